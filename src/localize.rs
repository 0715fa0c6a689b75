//! The `Localize` handle: one fetched project plus the language selection
//! that export and clear runs operate on.

use crate::clean::{ClearReport, Cleaner};
use crate::client::ProjectClient;
use crate::config::Config;
use crate::error::Result;
use crate::export::{ExportReport, Exporter};
use crate::project::Project;
use crate::selector::LanguageSelector;
use tracing::info;

/// A fetched Localize project bound to an output directory.
///
/// The project is fetched once when the handle is created and never
/// refreshed; create a new handle to pick up remote changes.
///
/// ```rust,ignore
/// let mut localize = Localize::new(Config::from_env()?).await?;
/// localize.except(["de"]).export()?;
/// localize.clear()?;
/// ```
#[derive(Debug, Clone)]
pub struct Localize {
    config: Config,
    project: Project,
    selector: LanguageSelector,
}

impl Localize {
    /// Validate the configuration and fetch the project
    pub async fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let project = ProjectClient::new(&config)?.fetch().await?;
        Ok(Self::from_project(config, project))
    }

    /// Wrap an already fetched project
    pub fn from_project(config: Config, project: Project) -> Self {
        let selector = LanguageSelector::from_project(&project);
        Self {
            config,
            project,
            selector,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// All project languages in API order
    pub fn languages(&self) -> &[String] {
        self.selector.languages()
    }

    pub fn has_language(&self, name: &str) -> bool {
        self.selector.has_language(name)
    }

    /// Languages targeted by `export` and `clear` (all of them when no
    /// selection is active or the selection is empty)
    pub fn expected_languages(&self) -> Vec<String> {
        self.selector.expected_languages()
    }

    pub fn has_expected_language(&self, name: &str) -> bool {
        self.selector.has_expected_language(name)
    }

    pub fn only<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selector.only(names);
        self
    }

    pub fn except<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selector.except(names);
        self
    }

    /// Write one translation file per expected language
    pub fn export(&self) -> Result<ExportReport> {
        let languages = self.expected_languages();
        info!("Exporting {} language(s): {}", languages.len(), languages.join(", "));

        Exporter::new(
            &self.config.directory,
            &self.config.filename,
            self.config.format,
        )
        .export(&self.project.keys, &languages)
    }

    /// Delete language directories that are not expected
    pub fn clear(&self) -> Result<ClearReport> {
        Cleaner::new(&self.config.directory).clear(|name| self.has_expected_language(name))
    }
}
