//! Filename transformation module
//!
//! This module turns raw file names into the names written to the export.

mod name;

pub use name::{
    NameTransformer, TransformConfig, apply_prefix, derive_names, strip_extension,
};
