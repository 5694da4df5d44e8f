//! Parameter row parsing
//!
//! Parameter groups and request bodies are rendered as tables with one row per
//! field. Every row goes through [`parse_row`]; rows without a name are dropped.

use crate::config::MarkerConfig;
use crate::extract::selectors::Selectors;
use crate::extract::text::{collapse_whitespace, element_text, paragraph_text, spaced_text};
use crate::model::Parameter;
use scraper::{ElementRef, Html};

/// Scalar type names a parameter may normalize to
const KNOWN_TYPES: &[&str] = &["string", "number", "boolean", "array", "object", "null"];

/// Parses every top-level row of the first table in `window`
pub fn parse_table_rows(window: &str, selectors: &Selectors, markers: &MarkerConfig) -> Vec<Parameter> {
    let fragment = Html::parse_fragment(window);
    let Some(table) = fragment.select(&selectors.table).next() else {
        return Vec::new();
    };

    top_level_rows(&table)
        .iter()
        .filter_map(|row| parse_row(row, selectors, markers))
        .collect()
}

/// Rows that belong to `table` itself, not to tables nested in its cells
fn top_level_rows<'a>(table: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut rows = Vec::new();

    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|row| row.value().name() == "tr"),
            ),
            _ => {}
        }
    }

    rows
}

/// Parses one table row into a parameter
///
/// Returns None when no name can be extracted.
pub fn parse_row(row: &ElementRef, selectors: &Selectors, markers: &MarkerConfig) -> Option<Parameter> {
    let name = row_name(row, selectors)?;

    let param_type = row
        .select(&selectors.param_type)
        .next()
        .map(|element| normalize_type(&element_text(&element)))
        .unwrap_or_else(|| "string".to_string());

    let text = spaced_text(row);
    let required = has_marker_element(row, &markers.required);
    let default = extract_default(&text, &markers.default_value);

    Some(Parameter {
        name,
        param_type,
        required,
        description: paragraph_text(row),
        default,
    })
}

/// Name from the field cell title, falling back to the property name element
fn row_name(row: &ElementRef, selectors: &Selectors) -> Option<String> {
    let from_title = row
        .select(&selectors.field_name)
        .filter_map(|cell| cell.value().attr("title"))
        .map(str::trim)
        .find(|title| !title.is_empty())
        .map(str::to_string);

    from_title.or_else(|| {
        row.select(&selectors.property_name)
            .map(|element| element_text(&element))
            .find(|name| !name.is_empty())
    })
}

/// Whether some element in the row carries exactly the marker as its text
///
/// Names and descriptions that merely contain the marker word do not count.
fn has_marker_element(row: &ElementRef, marker: &str) -> bool {
    row.descendants()
        .filter_map(ElementRef::wrap)
        .any(|element| element_text(&element) == marker)
}

/// Value following the default marker, with surrounding quotes removed
///
/// A quoted value may contain spaces; an unquoted one ends at whitespace.
fn extract_default(text: &str, marker: &str) -> Option<String> {
    let (_, rest) = text.split_once(marker)?;
    let rest = rest.trim_start();

    let value = match rest.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let inner = &rest[1..];
            match inner.find(quote) {
                Some(end) => &inner[..end],
                None => inner.split_whitespace().next().unwrap_or(""),
            }
        }
        _ => rest.split_whitespace().next().unwrap_or(""),
    };

    Some(value.to_string())
}

/// Normalizes a raw type annotation to a scalar type name
///
/// - `integer` and `int` (and other numeric spellings) become `number`
/// - `X or Y` keeps the first alternative, unwrapping `(X)` when parenthesized
/// - format hints such as `<uuid>` and `Array of ...` qualifiers are dropped
/// - anything unrecognized becomes `string`
pub fn normalize_type(raw: &str) -> String {
    let raw = collapse_whitespace(raw).to_lowercase();

    let first = raw.split(" or ").next().unwrap_or("").trim();
    let candidate = match (first.find('('), first.find(')')) {
        (Some(open), Some(close)) if open < close => first[open + 1..close].trim(),
        _ => first,
    };

    let token = candidate
        .split(|c: char| c.is_whitespace() || c == '<')
        .next()
        .unwrap_or("");

    let normalized = match token {
        "integer" | "int" | "int32" | "int64" | "float" | "double" => "number",
        "bool" => "boolean",
        other => other,
    };

    if KNOWN_TYPES.contains(&normalized) {
        normalized.to_string()
    } else {
        "string".to_string()
    }
}
