//! HTTP method and URL path detection
//!
//! The search is narrowed to the endpoint display block when the section has
//! one, so verb-like words elsewhere in the section are not picked up.

use crate::config::MarkerConfig;
use crate::extract::selectors::Selectors;
use crate::extract::text::element_text;
use crate::model::HttpMethod;
use scraper::ElementRef;

/// How many ancestors above the verb badge are searched for a path
const PATH_SEARCH_DEPTH: usize = 3;

/// Verb detection strategies, in priority order
///
/// Strategies backed by an explicit `type` attribute win over text-only ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbStrategy {
    /// `type` attribute whose value is a verb
    TypeAttribute,
    /// Element carrying some `type` attribute whose text is a verb
    TypedText,
    /// Verb class next to the verb class token, e.g. `class="http-verb put"`
    ClassToken,
    /// Leaf element whose whole text is a verb
    BareText,
}

impl VerbStrategy {
    pub fn all() -> [Self; 4] {
        [
            Self::TypeAttribute,
            Self::TypedText,
            Self::ClassToken,
            Self::BareText,
        ]
    }

    fn detect(&self, element: &ElementRef, markers: &MarkerConfig) -> Option<HttpMethod> {
        let value = element.value();
        match self {
            Self::TypeAttribute => value.attr("type").and_then(HttpMethod::from_token),
            Self::TypedText => {
                value.attr("type")?;
                HttpMethod::from_token(&element_text(element))
            }
            Self::ClassToken => {
                if !value.classes().any(|class| class == markers.verb_class_token) {
                    return None;
                }
                value.classes().find_map(HttpMethod::from_token)
            }
            Self::BareText => {
                if element.children().any(|child| child.value().is_element()) {
                    return None;
                }
                HttpMethod::from_token(&element_text(element))
            }
        }
    }
}

/// The detected verb and the element it was read from
#[derive(Debug, Clone)]
pub struct VerbMatch<'a> {
    pub method: HttpMethod,
    pub strategy: VerbStrategy,
    pub element: ElementRef<'a>,
}

/// Finds the endpoint display block, if the section has one
pub fn endpoint_block<'a>(section: &ElementRef<'a>, selectors: &Selectors) -> Option<ElementRef<'a>> {
    section.select(&selectors.endpoint).next()
}

/// Detects the verb within `scope`, trying each strategy in order
pub fn detect_method<'a>(scope: &ElementRef<'a>, markers: &MarkerConfig) -> Option<VerbMatch<'a>> {
    VerbStrategy::all().into_iter().find_map(|strategy| {
        scope
            .descendants()
            .filter_map(ElementRef::wrap)
            .find_map(|element| {
                strategy.detect(&element, markers).map(|method| VerbMatch {
                    method,
                    strategy,
                    element,
                })
            })
    })
}

/// Detects the URL template
///
/// The configured path selectors are tried in order within `scope`; when none
/// matches, the ancestors of the verb badge are searched for a text node
/// starting with `/`.
pub fn detect_path(scope: &ElementRef, verb: Option<&VerbMatch>, selectors: &Selectors) -> Option<String> {
    let from_selectors = selectors.paths.iter().find_map(|selector| {
        scope
            .select(selector)
            .map(|element| clean_path(&element_text(&element)))
            .find(|path| !path.is_empty())
    });

    from_selectors.or_else(|| {
        let verb = verb?;
        verb.element
            .ancestors()
            .take(PATH_SEARCH_DEPTH)
            .find_map(|ancestor| {
                ancestor.descendants().find_map(|node| {
                    let text = node.value().as_text()?.trim();
                    text.starts_with('/').then(|| clean_path(text))
                })
            })
    })
}

/// Strips any scheme and host in front of the path template
fn clean_path(text: &str) -> String {
    let text = text.trim();
    match text.find("://") {
        Some(scheme_end) => {
            let after_scheme = &text[scheme_end + 3..];
            match after_scheme.find('/') {
                Some(slash) => after_scheme[slash..].to_string(),
                None => String::new(),
            }
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn detect(html: &str) -> (Option<HttpMethod>, Option<VerbStrategy>, Option<String>) {
        let markers = MarkerConfig::default();
        let selectors = Selectors::compile(&markers).unwrap();
        let fragment = Html::parse_fragment(html);
        let root = fragment.root_element();
        let scope = endpoint_block(&root, &selectors).unwrap_or(root);

        let verb = detect_method(&scope, &markers);
        let path = detect_path(&scope, verb.as_ref(), &selectors);
        (
            verb.as_ref().map(|v| v.method),
            verb.as_ref().map(|v| v.strategy),
            path,
        )
    }

    #[test]
    fn test_type_attribute_verb() {
        let (method, strategy, path) = detect(
            r#"<div class="endpoint"><span type="put" class="http-verb put">put</span><span class="endpoint-path">/agents/{agent_id}</span></div>"#,
        );
        assert_eq!(method, Some(HttpMethod::Put));
        assert_eq!(strategy, Some(VerbStrategy::TypeAttribute));
        assert_eq!(path.as_deref(), Some("/agents/{agent_id}"));
    }

    #[test]
    fn test_uppercase_verb_text() {
        let (method, strategy, _) = detect(r#"<div class="endpoint"><span type="operation">PUT</span></div>"#);
        assert_eq!(method, Some(HttpMethod::Put));
        assert_eq!(strategy, Some(VerbStrategy::TypedText));
    }

    #[test]
    fn test_class_token_verb() {
        let (method, strategy, _) =
            detect(r#"<div class="endpoint"><span class="http-verb patch"><i>~</i></span></div>"#);
        assert_eq!(method, Some(HttpMethod::Patch));
        assert_eq!(strategy, Some(VerbStrategy::ClassToken));
    }

    #[test]
    fn test_bare_text_verb() {
        let (method, strategy, _) = detect(r#"<div><b>DELETE</b><code>/agents/{id}</code></div>"#);
        assert_eq!(method, Some(HttpMethod::Delete));
        assert_eq!(strategy, Some(VerbStrategy::BareText));
    }

    #[test]
    fn test_type_attribute_wins_over_text() {
        let (method, _, _) = detect(
            r#"<div class="endpoint"><b>GET</b><span type="post">submit</span></div>"#,
        );
        assert_eq!(method, Some(HttpMethod::Post));
    }

    #[test]
    fn test_narrowed_to_endpoint_block() {
        let (method, _, path) = detect(
            r#"<p><b>Delete</b> is not allowed</p><div class="endpoint"><span type="get">get</span><span class="path">/agents</span></div>"#,
        );
        assert_eq!(method, Some(HttpMethod::Get));
        assert_eq!(path.as_deref(), Some("/agents"));
    }

    #[test]
    fn test_path_falls_back_to_verb_window() {
        let (method, _, path) = detect(
            r#"<div><button><span type="delete">delete</span><span>/agents/{agent_id}/archive</span></button></div>"#,
        );
        assert_eq!(method, Some(HttpMethod::Delete));
        assert_eq!(path.as_deref(), Some("/agents/{agent_id}/archive"));
    }

    #[test]
    fn test_nothing_detected() {
        let (method, _, path) = detect("<div><p>Nothing to see</p></div>");
        assert_eq!(method, None);
        assert_eq!(path, None);
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("/agents"), "/agents");
        assert_eq!(clean_path(" https://api.example.com/v1/agents "), "/v1/agents");
        assert_eq!(clean_path("https://api.example.com"), "");
    }
}
