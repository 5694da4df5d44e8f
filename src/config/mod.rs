//! Configuration module for apidoc-extract
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! All marker strings and selectors the extractor relies on live here, so the
//! tool can be pointed at a different documentation snapshot without code changes.
//!
//! # Example
//!
//! ```no_run
//! use apidoc_extract::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("extract.toml")).unwrap();
//! println!("Extracting operations tagged: {}", config.tag);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, MarkerConfig, PathsConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config, resolve_config};
pub use validation::{validate, validate_tag};
