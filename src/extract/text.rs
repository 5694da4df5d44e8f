//! Text helpers shared by the section parsers

use scraper::{ElementRef, Selector};

/// Collapses every whitespace run to a single space and trims the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Full text content of an element, whitespace collapsed
pub fn element_text(element: &ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Text content with a space between every text node
///
/// Keeps adjacent inline elements such as `<span>a</span><span>b</span>`
/// apart, at the cost of splitting words broken up by inline markup.
pub fn spaced_text(element: &ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

/// Texts of all `<p>` elements below `element`, joined by single spaces
///
/// Empty paragraphs are skipped.
pub fn paragraph_text(element: &ElementRef) -> String {
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    element
        .select(&selector)
        .map(|p| element_text(&p))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
