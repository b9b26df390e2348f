//! Where checklist documents come from.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use crate::error::{ChecklistError, Result};

/// Public ENA registry.
pub const DEFAULT_REGISTRY_URL: &str = "https://www.ebi.ac.uk";

/// User agent string for registry requests.
const USER_AGENT_VALUE: &str = concat!("ena-samples/", env!("CARGO_PKG_VERSION"));

/// Longest response excerpt kept in a status error.
const BODY_EXCERPT_LEN: usize = 200;

/// Fetches the raw checklist document for an accession.
pub trait ChecklistSource {
    fn fetch(&self, checklist_id: &str) -> Result<String>;
}

impl<T: ChecklistSource + ?Sized> ChecklistSource for &T {
    fn fetch(&self, checklist_id: &str) -> Result<String> {
        (**self).fetch(checklist_id)
    }
}

/// Registry connection settings.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Scheme and host of the registry, without a trailing path.
    pub base_url: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout: None,
        }
    }
}

/// Blocking HTTP source against the registry's browser API.
#[derive(Debug, Clone)]
pub struct HttpChecklistSource {
    client: Client,
    base_url: String,
}

impl HttpChecklistSource {
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ChecklistError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Lookup URL for one checklist accession.
    pub fn checklist_url(&self, checklist_id: &str) -> String {
        format!("{}/ena/browser/api/xml/{checklist_id}", self.base_url)
    }
}

impl ChecklistSource for HttpChecklistSource {
    fn fetch(&self, checklist_id: &str) -> Result<String> {
        let url = self.checklist_url(checklist_id);
        debug!(%url, "fetching checklist");

        let network_error = |e: reqwest::Error| ChecklistError::Network {
            checklist_id: checklist_id.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, "application/xml")
            .send()
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ChecklistError::Status {
                checklist_id: checklist_id.to_string(),
                status: status.as_u16(),
                body: body.chars().take(BODY_EXCERPT_LEN).collect(),
            });
        }

        response.text().map_err(network_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_url_strips_trailing_slash() {
        let source = HttpChecklistSource::new(&ResolverConfig {
            base_url: "https://wwwdev.ebi.ac.uk/".to_string(),
            timeout: Some(Duration::from_secs(5)),
        })
        .expect("client");
        assert_eq!(
            source.checklist_url("ERC000011"),
            "https://wwwdev.ebi.ac.uk/ena/browser/api/xml/ERC000011"
        );
    }
}
