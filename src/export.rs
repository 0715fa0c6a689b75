use crate::error::{LocalizeError, Result};
use crate::format::{format_keys, Translations};
use crate::project::Key;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// File format of an exported language file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON object
    #[default]
    Json,
    /// PHP file returning a static array
    Php,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Php => "php",
        }
    }

    /// Render a language's translations as file content
    pub fn render(&self, translations: &Translations) -> Result<String> {
        match self {
            OutputFormat::Json => {
                let mut content = serde_json::to_string_pretty(translations)
                    .map_err(|e| LocalizeError::Serialization(e.to_string()))?;
                content.push('\n');
                Ok(content)
            }
            OutputFormat::Php => render_php(translations),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = LocalizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "php" => Ok(OutputFormat::Php),
            other => Err(LocalizeError::Config(format!(
                "Unknown output format: '{}' (expected json or php)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

fn render_php(translations: &Translations) -> Result<String> {
    let mut body = String::new();
    if translations.is_empty() {
        body.push_str("[]");
    } else {
        body.push_str("[\n");
        for (name, value) in translations {
            let text = value.as_str().ok_or_else(|| {
                LocalizeError::Serialization(format!(
                    "value of '{}' is not a string: {}",
                    name, value
                ))
            })?;
            body.push_str(&format!(
                "    {} => {},\n",
                php_string(name),
                php_string(text)
            ));
        }
        body.push(']');
    }

    Ok(format!("<?php\n\nreturn {};\n", body))
}

/// Single-quoted PHP literal
fn php_string(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Files written by one export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub files: Vec<PathBuf>,
}

/// Writes one translation file per language under a shared root:
/// `<directory>/<language>/<filename>.<ext>`.
#[derive(Debug, Clone)]
pub struct Exporter {
    directory: PathBuf,
    filename: String,
    format: OutputFormat,
}

impl Exporter {
    pub fn new(directory: impl Into<PathBuf>, filename: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
            format,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the file exported for `language`.
    ///
    /// The language name is used verbatim as a directory segment.
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.directory
            .join(language)
            .join(format!("{}.{}", self.filename, self.format.extension()))
    }

    /// Format, render and write the file of a single language
    pub fn export_language(&self, keys: &[Key], language: &str) -> Result<PathBuf> {
        let translations = format_keys(keys, language);
        let content = self.format.render(&translations)?;

        let language_dir = self.directory.join(language);
        fs::create_dir_all(&language_dir)
            .map_err(|e| LocalizeError::filesystem(&language_dir, e))?;

        let path = self.path_for(language);
        fs::write(&path, content).map_err(|e| LocalizeError::filesystem(&path, e))?;

        debug!(
            "Exported {} keys for '{}' to {}",
            translations.len(),
            language,
            path.display()
        );
        Ok(path)
    }

    /// Export every language in order.
    ///
    /// Stops at the first failure; files already written stay in place.
    pub fn export<S: AsRef<str>>(&self, keys: &[Key], languages: &[S]) -> Result<ExportReport> {
        let mut report = ExportReport::default();
        for language in languages {
            let path = self.export_language(keys, language.as_ref())?;
            report.files.push(path);
        }

        info!(
            "✓ Exported {} language file(s) to {}",
            report.files.len(),
            self.directory.display()
        );
        Ok(report)
    }
}
