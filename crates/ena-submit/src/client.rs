//! Blocking drop-box client.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::blocking::multipart::Form;
use reqwest::header::USER_AGENT;
use tracing::{debug, info, info_span, warn};

use crate::credentials::Credentials;
use crate::error::{Result, SubmitError};
use crate::receipt::{Receipt, save_receipt};

/// Drop-box endpoint path, appended to the server base URL.
pub const SUBMIT_PATH: &str = "/ena/submit/drop-box/submit/";

const TEST_SERVER_URL: &str = "https://wwwdev.ebi.ac.uk";

const PRODUCTION_SERVER_URL: &str = "https://www.ebi.ac.uk";

const USER_AGENT_VALUE: &str = concat!("ena-samples/", env!("CARGO_PKG_VERSION"));

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Longest response excerpt kept in a status error.
const BODY_EXCERPT_LEN: usize = 200;

/// Registry server receiving the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    /// Test server; submissions are discarded within 24 hours.
    #[default]
    Test,
    Production,
}

impl Target {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Test => TEST_SERVER_URL,
            Self::Production => PRODUCTION_SERVER_URL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

/// Files sent in one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Sent as the `SUBMISSION` field.
    pub manifest: PathBuf,
    /// Sent as the `SAMPLE` field. Release manifests carry no samples.
    pub samples: Option<PathBuf>,
}

impl Submission {
    pub fn new(manifest: impl Into<PathBuf>, samples: Option<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            samples,
        }
    }

    fn check_files(&self) -> Result<()> {
        for path in std::iter::once(&self.manifest).chain(self.samples.as_ref()) {
            if !path.is_file() {
                return Err(SubmitError::MissingDocument { path: path.clone() });
            }
        }
        Ok(())
    }

    fn form(&self) -> Result<Form> {
        let io_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source| SubmitError::Io { path, source }
        };
        let mut form = Form::new()
            .file("SUBMISSION", &self.manifest)
            .map_err(io_error(&self.manifest))?;
        if let Some(samples) = &self.samples {
            form = form.file("SAMPLE", samples).map_err(io_error(samples))?;
        }
        Ok(form)
    }
}

/// Result of a submission whose receipt was received.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub receipt: Receipt,
    pub receipt_path: PathBuf,
}

/// Authenticated client for one drop-box server.
#[derive(Debug, Clone)]
pub struct DropBoxClient {
    client: Client,
    target: Target,
    base_url: String,
    credentials: Credentials,
}

impl DropBoxClient {
    pub fn new(target: Target, credentials: Credentials) -> Result<Self> {
        Self::with_base_url(target, target.base_url(), credentials)
    }

    /// Client against a custom server, e.g. a local mirror.
    pub fn with_base_url(
        target: Target,
        base_url: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SubmitError::Client(e.to_string()))?;
        let base_url: String = base_url.into();
        Ok(Self {
            client,
            target,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn submit_url(&self) -> String {
        format!("{}{SUBMIT_PATH}", self.base_url)
    }

    /// Post the documents and return the raw receipt body.
    pub fn submit(&self, submission: &Submission) -> Result<String> {
        submission.check_files()?;
        let url = self.submit_url();
        debug!(
            %url,
            account = %self.credentials.account,
            manifest = %submission.manifest.display(),
            "posting submission"
        );

        let response = self
            .client
            .post(&url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .basic_auth(&self.credentials.account, Some(&self.credentials.password))
            .multipart(submission.form()?)
            .send()
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body: body.chars().take(BODY_EXCERPT_LEN).collect(),
            });
        }
        Ok(body)
    }

    /// Submit, save the receipt next to the documents and parse it.
    ///
    /// A receipt reporting failure is still returned; its messages say why.
    pub fn submit_and_record(
        &self,
        submission: &Submission,
        output_dir: &Path,
    ) -> Result<SubmissionOutcome> {
        let span = info_span!("submit", target = self.target.label());
        let _guard = span.enter();
        let start = Instant::now();

        let body = self.submit(submission)?;
        let receipt_path = save_receipt(output_dir, &body)?;
        let receipt = Receipt::parse(&body)?;

        for message in &receipt.errors {
            warn!(%message, "drop-box error");
        }
        info!(
            success = receipt.success,
            accessions = receipt.samples.len(),
            receipt = %receipt_path.display(),
            duration_ms = start.elapsed().as_millis(),
            "submission finished"
        );
        Ok(SubmissionOutcome {
            receipt,
            receipt_path,
        })
    }
}
