//! Operation section parser
//!
//! Maps one segmented section to an [`OperationRecord`]. Each field is
//! extracted independently and falls back to its default when the markup
//! does not match; only a duplicate parameter fails the section.

use crate::config::MarkerConfig;
use crate::extract::endpoint::{detect_method, detect_path, endpoint_block};
use crate::extract::layout::{Landmark, LandmarkPatterns, SectionLayout};
use crate::extract::rows::parse_table_rows;
use crate::extract::segmenter::Section;
use crate::extract::selectors::Selectors;
use crate::extract::text::{collapse_whitespace, element_text, paragraph_text, spaced_text};
use crate::model::{
    title_case_id, OperationRecord, ParameterLocation, Parameters, RequestBody, Response,
};
use crate::{ParseError, ParseResult};
use scraper::{ElementRef, Html};
use std::collections::HashSet;

/// Content type assumed when the request body heading names none
const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Parses operation sections using one marker configuration
#[derive(Debug, Clone)]
pub struct OperationParser {
    markers: MarkerConfig,
    selectors: Selectors,
    landmarks: LandmarkPatterns,
}

impl OperationParser {
    /// Compiles the selectors and heading patterns of `markers`
    pub fn new(markers: &MarkerConfig) -> ParseResult<Self> {
        Ok(Self {
            markers: markers.clone(),
            selectors: Selectors::compile(markers)?,
            landmarks: LandmarkPatterns::compile(markers)?,
        })
    }

    /// Extracts the record for one section
    pub fn parse(&self, section: &Section) -> ParseResult<OperationRecord> {
        let fragment = Html::parse_fragment(&section.html);
        let root = fragment.root_element();
        let layout = SectionLayout::locate(&section.html, &self.landmarks);

        let scope = endpoint_block(&root, &self.selectors).unwrap_or(root);
        let verb = detect_method(&scope, &self.markers);
        let path = detect_path(&scope, verb.as_ref(), &self.selectors).unwrap_or_default();

        Ok(OperationRecord {
            id: section.operation_id.clone(),
            name: self.extract_name(&root, &section.operation_id),
            description: self.extract_description(&layout),
            method: verb.map(|v| v.method).unwrap_or_default(),
            path,
            parameters: self.extract_parameters(&layout)?,
            request_body: self.extract_request_body(&layout),
            responses: self.extract_responses(&layout),
            authorization: self.extract_authorization(&section.html),
        })
    }

    /// Heading text after its anchor, or the title-cased operation id
    fn extract_name(&self, root: &ElementRef, operation_id: &str) -> String {
        root.select(&self.selectors.heading)
            .next()
            .map(heading_text)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| title_case_id(operation_id))
    }

    /// Paragraphs of the first description container above the group headings
    fn extract_description(&self, layout: &SectionLayout) -> String {
        let fragment = Html::parse_fragment(layout.head());
        fragment
            .select(&self.selectors.description)
            .next()
            .map(|container| paragraph_text(&container))
            .unwrap_or_default()
    }

    fn extract_parameters(&self, layout: &SectionLayout) -> ParseResult<Parameters> {
        let mut parameters = Parameters::default();

        for location in ParameterLocation::all() {
            let Some(window) = layout.window(Landmark::Parameters(location)) else {
                continue;
            };

            let mut seen = HashSet::new();
            for param in parse_table_rows(window, &self.selectors, &self.markers) {
                if !seen.insert(param.name.clone()) {
                    return Err(ParseError::DuplicateParameter {
                        location,
                        name: param.name,
                    });
                }
                parameters.group_mut(location).push(param);
            }
        }

        Ok(parameters)
    }

    /// Request body schema; a body without parseable properties is omitted
    fn extract_request_body(&self, layout: &SectionLayout) -> Option<RequestBody> {
        let window = layout.window(Landmark::RequestBody)?;

        let properties = parse_table_rows(window, &self.selectors, &self.markers);
        if properties.is_empty() {
            tracing::debug!("Request body without parseable properties, omitting it");
            return None;
        }

        // Heading remainder: content type and required flag sit before the table
        let heading_html = window.split("<table").next().unwrap_or(window);
        let heading = Html::parse_fragment(heading_html);
        let heading_text = spaced_text(&heading.root_element());
        let heading_text = heading_text.trim_start_matches(':').trim();

        let content_type = heading_text
            .split_whitespace()
            .next()
            .filter(|token| token.contains('/'))
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        Some(RequestBody {
            content_type,
            required: heading_text
                .split_whitespace()
                .any(|token| token == self.markers.required),
            properties,
        })
    }

    fn extract_responses(&self, layout: &SectionLayout) -> Vec<Response> {
        let Some(window) = layout.window(Landmark::Responses) else {
            return Vec::new();
        };

        let fragment = Html::parse_fragment(window);
        let mut responses = Vec::new();

        for entry in fragment.select(&self.selectors.response_entry) {
            let Some(status) = entry.select(&self.selectors.status_code).next() else {
                continue;
            };
            let status_text = element_text(&status);

            // Ranges such as 4XX and the `default` entry carry no numeric code
            if status_text.is_empty() || !status_text.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }

            let Some(status_code) = status_text
                .parse::<u16>()
                .ok()
                .filter(|code| (100..=599).contains(code))
            else {
                tracing::debug!("Skipping response with status code {}", status_text);
                continue;
            };

            let mut description = paragraph_text(&entry);
            if description.is_empty() {
                let entry_text = element_text(&entry);
                description = entry_text
                    .strip_prefix(status_text.as_str())
                    .unwrap_or(&entry_text)
                    .trim()
                    .to_string();
            }

            responses.push(Response {
                status_code,
                description,
            });
        }

        responses
    }

    fn extract_authorization(&self, html: &str) -> Option<String> {
        html.contains(&self.markers.bearer_auth)
            .then(|| self.markers.auth_scheme.clone())
    }
}

/// Text of a heading, skipping its anchor links
fn heading_text(heading: ElementRef) -> String {
    let mut text = String::new();

    for child in heading.children() {
        if let Some(node_text) = child.value().as_text() {
            text.push_str(node_text);
        } else if let Some(element) = ElementRef::wrap(child) {
            if element.value().name() != "a" {
                text.push_str(&element.text().collect::<String>());
            }
        }
        text.push(' ');
    }

    collapse_whitespace(&text)
}

/// Parses one section with a freshly compiled parser
///
/// Prefer [`OperationParser`] when parsing many sections with the same markers.
pub fn parse_operation(section: &Section, markers: &MarkerConfig) -> ParseResult<OperationRecord> {
    OperationParser::new(markers)?.parse(section)
}
