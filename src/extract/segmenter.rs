//! Operation segmentation
//!
//! Splits a document into the operation sections of one tag. Two document
//! shapes are supported:
//!
//! - **Primary**: container elements whose id attribute reads
//!   `tag/<Tag>/operation/<operationId>`. The section is the container's subtree.
//! - **Fallback**: elements whose alternate attribute carries the same pattern.
//!   Each section runs from its marker element to the next `tag/...` marker of
//!   any tag, or to the end of the document.
//!
//! Neither strategy treats "no match" as an error.

use crate::config::MarkerConfig;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// One operation's slice of the document
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub operation_id: String,
    pub html: String,
}

/// Finds every operation section for `tag`, in document order
///
/// The fallback strategy only runs when the primary one yields nothing.
/// Sections repeating an already seen operation id are dropped.
///
/// # Example
///
/// ```
/// use apidoc_extract::config::MarkerConfig;
/// use apidoc_extract::extract::segment;
///
/// let html = r#"<div id="tag/Agent/operation/list_agents"><h2>List Agents</h2></div>"#;
/// let sections = segment(html, "Agent", &MarkerConfig::default());
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].operation_id, "list_agents");
/// ```
pub fn segment(html: &str, tag: &str, markers: &MarkerConfig) -> Vec<Section> {
    let mut sections = segment_by_container(html, tag, &markers.section_id_attribute);

    if sections.is_empty() {
        tracing::debug!(
            "No '{}' containers for tag {}, scanning '{}' markers",
            markers.section_id_attribute,
            tag,
            markers.fallback_section_attribute
        );
        sections = segment_by_boundaries(html, tag, &markers.fallback_section_attribute);
    }

    dedup_sections(sections)
}

/// Primary strategy: whole subtrees of marked containers
fn segment_by_container(html: &str, tag: &str, attribute: &str) -> Vec<Section> {
    let document = Html::parse_document(html);
    let prefix = operation_prefix(tag);
    let mut sections = Vec::new();

    if let Ok(any) = Selector::parse("*") {
        for element in document.select(&any) {
            let Some(value) = element.value().attr(attribute) else {
                continue;
            };

            if let Some(operation_id) = operation_id_from(value, &prefix) {
                sections.push(Section {
                    operation_id: operation_id.to_string(),
                    html: element.html(),
                });
            }
        }
    }

    sections
}

/// Fallback strategy: non-overlapping slices between attribute markers
fn segment_by_boundaries(html: &str, tag: &str, attribute: &str) -> Vec<Section> {
    let pattern = format!(
        r#"<[A-Za-z][^>]*?\s{}\s*=\s*["'](tag/[^"']*)["']"#,
        regex::escape(attribute)
    );
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("Cannot build boundary pattern for '{}': {}", attribute, e);
            return Vec::new();
        }
    };

    // Every `tag/...` marker bounds the section before it, whatever its tag
    let boundaries: Vec<(usize, &str)> = re
        .captures_iter(html)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let value = caps.get(1)?.as_str();
            Some((start, value))
        })
        .collect();

    let prefix = operation_prefix(tag);
    let mut sections = Vec::new();

    for (index, (start, value)) in boundaries.iter().enumerate() {
        let Some(operation_id) = operation_id_from(value, &prefix) else {
            continue;
        };

        let end = boundaries
            .get(index + 1)
            .map(|(next, _)| *next)
            .unwrap_or(html.len());

        sections.push(Section {
            operation_id: operation_id.to_string(),
            html: html[*start..end].to_string(),
        });
    }

    sections
}

fn operation_prefix(tag: &str) -> String {
    format!("tag/{}/operation/", tag)
}

/// Extracts the operation id from an attribute value carrying `prefix`
fn operation_id_from<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let id = value.strip_prefix(prefix)?.trim();
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(id)
}

/// Keeps the first section for each operation id
fn dedup_sections(sections: Vec<Section>) -> Vec<Section> {
    let mut seen = HashSet::new();
    sections
        .into_iter()
        .filter(|section| {
            let fresh = seen.insert(section.operation_id.clone());
            if !fresh {
                tracing::debug!("Skipping duplicate section {}", section.operation_id);
            }
            fresh
        })
        .collect()
}
