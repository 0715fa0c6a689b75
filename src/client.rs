use crate::config::Config;
use crate::error::{LocalizeError, Result};
use crate::project::{Project, ProjectResponse};
use crate::retry::{with_retry_if, RetryConfig};
use std::time::Duration;
use tracing::{debug, info};

/// Header carrying the project's secret key
pub const SECRET_KEY_HEADER: &str = "X-Localize-Secret-Key";

/// Upper bound for a single fetch attempt
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the project endpoint: `{host}/api/client/projects/{project_id}`
pub fn project_url(host: &str, project_id: &str) -> String {
    format!(
        "{}/api/client/projects/{}",
        host.trim_end_matches('/'),
        project_id
    )
}

/// Fetches a project's keys and languages from the Localize API
#[derive(Debug, Clone)]
pub struct ProjectClient {
    client: reqwest::Client,
    url: String,
    secret_key: String,
    retry: RetryConfig,
    timeout: Duration,
}

impl ProjectClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            url: project_url(&config.host, &config.project_id),
            secret_key: config.secret_key.clone(),
            retry: RetryConfig::project_fetch(),
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Override the per-attempt timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the project.
    ///
    /// Transport failures (including attempts exceeding the timeout), 429 and
    /// 5xx responses are retried according to the retry config. Any other error status or a body without a `data`
    /// payload fails immediately.
    pub async fn fetch(&self) -> Result<Project> {
        let project = with_retry_if(
            &self.retry,
            "Fetch Localize project",
            || self.fetch_once(),
            LocalizeError::is_retryable,
        )
        .await?;

        info!(
            "Fetched project with {} keys in {} languages",
            project.keys.len(),
            project.languages.len()
        );
        Ok(project)
    }

    async fn fetch_once(&self) -> Result<Project> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .header(SECRET_KEY_HEADER, &self.secret_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LocalizeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_project(&body)
    }
}

/// Extract the project from a response body
pub fn parse_project(body: &str) -> Result<Project> {
    let response: ProjectResponse = serde_json::from_str(body)
        .map_err(|e| LocalizeError::MalformedResponse(e.to_string()))?;
    Ok(response.data)
}
