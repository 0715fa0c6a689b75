//! Language selection: which of the project's languages an export or clear
//! run operates on.

use crate::project::Project;
use std::collections::HashSet;

/// The project's languages plus the active `only`/`except` selection.
///
/// The selection starts empty, which means "every language". An `only` or
/// `except` call replaces whatever selection was active before.
#[derive(Debug, Clone, Default)]
pub struct LanguageSelector {
    languages: Vec<String>,
    expected: Option<Vec<String>>,
}

impl LanguageSelector {
    pub fn new(languages: Vec<String>) -> Self {
        Self {
            languages,
            expected: None,
        }
    }

    pub fn from_project(project: &Project) -> Self {
        Self::new(project.language_names())
    }

    /// All language names in API order
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn has_language(&self, name: &str) -> bool {
        self.languages.iter().any(|l| l == name)
    }

    /// Restrict the selection to the given names that exist in the project.
    ///
    /// Unknown names are dropped and duplicates collapse. The result keeps
    /// the project's language order.
    pub fn only<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted = collect_names(names);
        self.expected = Some(
            self.languages
                .iter()
                .filter(|l| wanted.contains(l.as_str()))
                .cloned()
                .collect(),
        );
        self
    }

    /// Select every project language except the given names
    pub fn except<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unwanted = collect_names(names);
        self.expected = Some(
            self.languages
                .iter()
                .filter(|l| !unwanted.contains(l.as_str()))
                .cloned()
                .collect(),
        );
        self
    }

    /// Drop any `only`/`except` selection
    pub fn reset(&mut self) -> &mut Self {
        self.expected = None;
        self
    }

    /// The languages an export or clear run targets.
    ///
    /// An empty selection falls back to all languages, so `only` with no
    /// matching names selects everything rather than nothing.
    pub fn expected_languages(&self) -> Vec<String> {
        match &self.expected {
            Some(selected) if !selected.is_empty() => selected.clone(),
            _ => self.languages.clone(),
        }
    }

    pub fn has_expected_language(&self, name: &str) -> bool {
        match &self.expected {
            Some(selected) if !selected.is_empty() => selected.iter().any(|l| l == name),
            _ => self.has_language(name),
        }
    }
}

fn collect_names<I, S>(names: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().map(|n| n.as_ref().to_string()).collect()
}
