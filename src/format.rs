//! Rendering of key values into translation strings.
//!
//! Every value of a language becomes `[min,max]text`; multiple values are
//! joined with `|`, the interval syntax used by pluralizing translators:
//!
//! ```text
//! [0,1]One apple|[2,*]Many apples
//! ```

use crate::project::{Key, Value};

/// Ordered mapping from key name to formatted translation
pub type Translations = serde_json::Map<String, serde_json::Value>;

/// Join every value of `language` into one delimited string.
///
/// Values of other languages are skipped. Returns an empty string when the
/// key has no value for `language`.
pub fn format_values(values: &[Value], language: &str) -> String {
    values
        .iter()
        .filter(|v| v.language.name == language)
        .map(|v| format!("[{},{}]{}", v.form.range_min, v.form.range_max, v.text))
        .collect::<Vec<_>>()
        .join("|")
}

/// Format every key for `language`, keeping the API's key order
pub fn format_keys(keys: &[Key], language: &str) -> Translations {
    let mut translations = Translations::new();
    for key in keys {
        translations.insert(
            key.name.clone(),
            serde_json::Value::String(format_values(&key.values, language)),
        );
    }
    translations
}
