//! Webin account credentials.
//!
//! Stored as TOML:
//!
//! ```toml
//! [credentials]
//! account = "Webin-00000"
//! password = "secret"
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SubmitError};

/// Location of the credentials file relative to the home directory.
pub const CREDENTIALS_FILE: &str = ".EBI/ebi.toml";

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub account: String,
    pub password: String,
}

#[derive(Deserialize)]
struct CredentialsFile {
    credentials: Credentials,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `~/.EBI/ebi.toml`, when a home directory exists.
pub fn default_credentials_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CREDENTIALS_FILE))
}

impl Credentials {
    pub fn new(account: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
        }
    }

    /// Load from an explicit file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SubmitError::CredentialsNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                SubmitError::Credentials {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })?;
        let file: CredentialsFile =
            toml::from_str(&content).map_err(|e| SubmitError::Credentials {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let credentials = file.credentials;
        if credentials.account.trim().is_empty() || credentials.password.is_empty() {
            return Err(SubmitError::Credentials {
                path: path.to_path_buf(),
                message: "account and password must not be empty".to_string(),
            });
        }
        debug!(path = %path.display(), account = %credentials.account, "credentials loaded");
        Ok(credentials)
    }

    /// Load from `path`, or from the default location when `None`.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = default_credentials_path().ok_or(SubmitError::NoHomeDir)?;
                Self::load(&path)
            }
        }
    }
}
