//! Library components of the `ena-samples` command-line tool.

pub mod logging;
pub mod pipeline;
