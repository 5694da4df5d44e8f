use crate::config::types::{Config, MarkerConfig, PathsConfig};
use crate::ConfigError;
use scraper::Selector;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_tag(&config.tag)?;
    validate_paths_config(&config.paths)?;
    validate_marker_config(&config.markers)?;
    Ok(())
}

/// Validates the tag name
///
/// The tag is embedded in `tag/<Tag>/operation/` patterns, so it must be
/// a single non-empty path segment.
pub fn validate_tag(tag: &str) -> Result<(), ConfigError> {
    if tag.trim().is_empty() {
        return Err(ConfigError::Validation("tag cannot be empty".to_string()));
    }

    if tag.contains('/') || tag.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "tag must not contain '/' or whitespace, got '{}'",
            tag
        )));
    }

    Ok(())
}

/// Validates input and output paths
fn validate_paths_config(config: &PathsConfig) -> Result<(), ConfigError> {
    if config.input.is_empty() {
        return Err(ConfigError::Validation("input cannot be empty".to_string()));
    }

    if config.json_output.is_empty() {
        return Err(ConfigError::Validation(
            "json-output cannot be empty".to_string(),
        ));
    }

    if config.module_output.is_empty() {
        return Err(ConfigError::Validation(
            "module-output cannot be empty".to_string(),
        ));
    }

    if config.json_output == config.module_output {
        return Err(ConfigError::Validation(format!(
            "json-output and module-output must differ, both are '{}'",
            config.json_output
        )));
    }

    Ok(())
}

/// Validates markers and selectors
fn validate_marker_config(config: &MarkerConfig) -> Result<(), ConfigError> {
    for (key, marker) in config.text_markers() {
        if marker.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "marker '{}' cannot be empty",
                key
            )));
        }
    }

    if config.path_selectors.is_empty() {
        return Err(ConfigError::Validation(
            "path-selectors must contain at least one selector".to_string(),
        ));
    }

    for selector in config.selectors() {
        validate_selector(selector)?;
    }

    Ok(())
}

/// Checks that a selector parses
fn validate_selector(selector: &str) -> Result<(), ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })?;
    Ok(())
}
