use crate::config::MarkerConfig;
use crate::{ParseError, ParseResult};
use scraper::Selector;

/// Parses a CSS selector, keeping the selector text in the error
pub fn compile_selector(selector: &str) -> ParseResult<Selector> {
    Selector::parse(selector).map_err(|e| ParseError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Every configured selector, compiled once per run
#[derive(Debug, Clone)]
pub struct Selectors {
    pub heading: Selector,
    pub description: Selector,
    pub endpoint: Selector,
    pub paths: Vec<Selector>,
    pub field_name: Selector,
    pub property_name: Selector,
    pub param_type: Selector,
    pub response_entry: Selector,
    pub status_code: Selector,
    pub table: Selector,
}

impl Selectors {
    pub fn compile(markers: &MarkerConfig) -> ParseResult<Self> {
        Ok(Self {
            heading: compile_selector(&markers.heading_selector)?,
            description: compile_selector(&markers.description_selector)?,
            endpoint: compile_selector(&markers.endpoint_selector)?,
            paths: markers
                .path_selectors
                .iter()
                .map(|s| compile_selector(s))
                .collect::<ParseResult<Vec<_>>>()?,
            field_name: compile_selector(&markers.field_name_selector)?,
            property_name: compile_selector(&markers.property_name_selector)?,
            param_type: compile_selector(&markers.type_selector)?,
            response_entry: compile_selector(&markers.response_entry_selector)?,
            status_code: compile_selector(&markers.status_code_selector)?,
            table: compile_selector("table")?,
        })
    }
}
