//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::constants::DEFAULT_BATCH_SIZE;
use crate::transform::TransformConfig;

/// Configuration for the Folder CSV application
///
/// Every field is optional, command-line values take precedence.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default prefix and removal pattern
    #[serde(flatten)]
    pub transform: TransformConfig,
    /// Where exports are saved (file, folder, or `-` for standard output)
    #[serde(default)]
    pub output: Option<String>,
    /// Entries requested per directory read
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            transform: TransformConfig::default(),
            output: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Config {
    /// Validates the configuration
    ///
    /// The removal pattern is not compiled here, an invalid pattern only
    /// fails the export that uses it.
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(anyhow!(
                "batch_size must be at least 1. Please check the configuration."
            ));
        }

        if let Some(output) = &self.output
            && output.trim().is_empty()
        {
            return Err(anyhow!(
                "output is empty. Remove the key or give a file or folder path."
            ));
        }

        Ok(())
    }

}

/// Default batch size for directory reads
fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}
