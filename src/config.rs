use crate::error::{LocalizeError, Result};
use crate::export::OutputFormat;
use std::path::PathBuf;

/// Connection and output settings for one Localize project
#[derive(Debug, Clone)]
pub struct Config {
    // Localize API
    pub host: String,
    pub project_id: String,
    pub secret_key: String,

    // Output
    pub directory: PathBuf,
    pub filename: String,
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Localize API
            host: required_var("LOCALIZE_HOST")?,
            project_id: required_var("LOCALIZE_PROJECT_ID")?,
            secret_key: required_var("LOCALIZE_SECRET_KEY")?,

            // Output
            directory: std::env::var("LOCALIZE_DIRECTORY")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("lang")),
            filename: std::env::var("LOCALIZE_FILENAME")
                .unwrap_or_else(|_| "localize".to_string()),
            format: match std::env::var("LOCALIZE_FORMAT") {
                Ok(value) => value.parse()?,
                Err(_) => OutputFormat::default(),
            },
        })
    }

    /// Reject settings that would produce a broken request or write outside
    /// the language directory.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(LocalizeError::Config("host is required".to_string()));
        }

        if self.project_id.trim().is_empty() {
            return Err(LocalizeError::Config("project id is required".to_string()));
        }

        if self.secret_key.is_empty() {
            return Err(LocalizeError::Config("secret key is required".to_string()));
        }

        if self.filename.is_empty() {
            return Err(LocalizeError::Config("filename is required".to_string()));
        }

        if self.filename.contains(['/', '\\']) {
            return Err(LocalizeError::Config(format!(
                "filename must not contain path separators: '{}'",
                self.filename
            )));
        }

        Ok(())
    }
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| LocalizeError::Config(format!("{} not set", name)))
}
