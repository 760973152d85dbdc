//! Derivation of export names
//!
//! Each raw name goes through three steps: the extension after the last
//! dot is dropped, the prefix is prepended, and every match of the removal
//! pattern is erased.

use log::trace;
use regex::Regex;
use serde::Deserialize;

use crate::errors::{Result, invalid_pattern_error};
use crate::session::FileEntry;

/// User supplied transformation parameters
///
/// Empty strings mean "not set". Nothing is validated on assignment, an
/// invalid pattern only surfaces when names are derived.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformConfig {
    /// Text prepended to every derived name
    #[serde(default)]
    pub prefix: String,
    /// Regular expression whose matches are removed from every derived name
    #[serde(default)]
    pub remove_pattern: String,
}

impl TransformConfig {
    pub fn new(prefix: impl Into<String>, remove_pattern: impl Into<String>) -> Self {
        TransformConfig {
            prefix: prefix.into(),
            remove_pattern: remove_pattern.into(),
        }
    }

    /// Compiles the configuration into a reusable transformer
    ///
    /// # Errors
    /// Returns an invalid pattern error when `remove_pattern` is not a valid
    /// regular expression
    pub fn compile(&self) -> Result<NameTransformer> {
        let remover = if self.remove_pattern.is_empty() {
            None
        } else {
            Some(
                Regex::new(&self.remove_pattern)
                    .map_err(|e| invalid_pattern_error(e, &self.remove_pattern))?,
            )
        };

        Ok(NameTransformer {
            prefix: self.prefix.clone(),
            remover,
        })
    }
}

/// A compiled [`TransformConfig`]
#[derive(Debug, Clone)]
pub struct NameTransformer {
    prefix: String,
    remover: Option<Regex>,
}

impl NameTransformer {
    /// Derives the export name for one raw file name
    pub fn derive(&self, raw: &str) -> String {
        let stripped = strip_extension(raw);
        let prefixed = apply_prefix(&self.prefix, stripped);

        let derived = match &self.remover {
            Some(regex) => regex.replace_all(&prefixed, "").into_owned(),
            None => prefixed,
        };
        trace!("Derived '{derived}' from '{raw}'");
        derived
    }
}

/// Truncates `name` at its last dot
///
/// A name without a dot is returned unchanged. Only the rightmost dot
/// counts, so `archive.tar.gz` becomes `archive.tar` and `.profile`
/// becomes an empty string.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) => &name[..index],
        None => name,
    }
}

/// Prepends `prefix` without any separator
pub fn apply_prefix(prefix: &str, name: &str) -> String {
    let mut result = String::with_capacity(prefix.len() + name.len());
    result.push_str(prefix);
    result.push_str(name);
    result
}

/// Derives export names for every entry, in list order
///
/// # Errors
/// Returns an invalid pattern error before any name is produced when the
/// removal pattern does not compile
pub fn derive_names(config: &TransformConfig, entries: &[FileEntry]) -> Result<Vec<String>> {
    let transformer = config.compile()?;
    Ok(entries
        .iter()
        .map(|entry| transformer.derive(&entry.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_extension_uses_last_dot() {
        assert_eq!(strip_extension("photo.final.png"), "photo.final");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("a.txt"), "a");
    }

    #[test]
    fn test_strip_extension_without_dot() {
        assert_eq!(strip_extension("README"), "README");
        assert_eq!(strip_extension(""), "");
    }

    #[test]
    fn test_strip_extension_dotfiles() {
        assert_eq!(strip_extension(".profile"), "");
        assert_eq!(strip_extension(".config.bak"), ".config");
        assert_eq!(strip_extension("trailing."), "trailing");
    }

    #[test]
    fn test_strip_extension_only_removes_one_level() {
        let once = strip_extension("photo.final.png");
        assert_eq!(strip_extension(once), "photo");
    }

    #[test]
    fn test_apply_prefix() {
        assert_eq!(apply_prefix("IMG_", "001"), "IMG_001");
        assert_eq!(apply_prefix("", "001"), "001");
    }

    #[test]
    fn test_remove_pattern_is_global() {
        let transformer = TransformConfig::new("", "[0-9]+").compile().unwrap();
        assert_eq!(transformer.derive("file123"), "file");
        assert_eq!(transformer.derive("a1b22c333.txt"), "abc");
    }

    #[test]
    fn test_pattern_applies_after_prefix() {
        let transformer = TransformConfig::new("IMG_", "_").compile().unwrap();
        assert_eq!(transformer.derive("001.jpg"), "IMG001");
    }

    #[test]
    fn test_prefix_and_strip() {
        let transformer = TransformConfig::new("IMG_", "").compile().unwrap();
        assert_eq!(transformer.derive("001.png"), "IMG_001");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = TransformConfig::new("", "(").compile();
        let error = result.unwrap_err();
        assert!(format!("{error}").contains("Invalid removal pattern"));
    }

    #[test]
    fn test_derive_names_keeps_order() {
        let entries = vec![FileEntry::new("b.txt"), FileEntry::new("a.txt")];
        let names = derive_names(&TransformConfig::default(), &entries).unwrap();
        assert_eq!(names, vec!["b", "a"]);
    }
}
