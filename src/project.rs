//! Project data as returned by the Localize API.
//!
//! A project is a list of languages plus a list of keys; every key carries
//! its localized values, each tagged with the language it belongs to and a
//! numeric range (used for pluralization rules such as `[2,*]`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope of `GET /api/client/projects/{id}`
#[derive(Debug, Deserialize)]
pub(crate) struct ProjectResponse {
    pub data: Project,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub keys: Vec<Key>,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub name: String,
    #[serde(default)]
    pub values: Vec<Value>,
}

/// One localized text of a key, scoped to a language and a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub language: Language,
    pub form: Form,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub range_min: RangeBound,
    #[serde(default)]
    pub range_max: RangeBound,
}

/// A range boundary as sent by the API.
///
/// Integers print as-is and floats without a trailing `.0` (`1.0` prints
/// `1`, `2.5` prints `2.5`). Strings (e.g. `*` for "no upper bound") are used
/// verbatim and a missing bound prints nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeBound {
    Number(serde_json::Number),
    Text(String),
    #[default]
    Unbounded,
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::Number(n) => match n.as_f64() {
                Some(float) if n.is_f64() => write!(f, "{}", float),
                _ => write!(f, "{}", n),
            },
            RangeBound::Text(s) => f.write_str(s),
            RangeBound::Unbounded => Ok(()),
        }
    }
}

impl From<i32> for RangeBound {
    fn from(n: i32) -> Self {
        RangeBound::Number(n.into())
    }
}

impl From<i64> for RangeBound {
    fn from(n: i64) -> Self {
        RangeBound::Number(n.into())
    }
}

impl From<&str> for RangeBound {
    fn from(s: &str) -> Self {
        RangeBound::Text(s.to_string())
    }
}

impl Language {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Value {
    pub fn new(
        language: impl Into<String>,
        range_min: impl Into<RangeBound>,
        range_max: impl Into<RangeBound>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            language: Language::new(language),
            form: Form {
                range_min: range_min.into(),
                range_max: range_max.into(),
            },
            text: text.into(),
        }
    }
}

impl Project {
    /// Language names in API order
    pub fn language_names(&self) -> Vec<String> {
        self.languages.iter().map(|l| l.name.clone()).collect()
    }
}
