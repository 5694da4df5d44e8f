use serde::Deserialize;

/// Main configuration structure for apidoc-extract
///
/// Every field has a default, so an empty file (or no file at all) targets
/// the `Agent` tag of a Redoc page at `docs/api.html`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API tag whose operations are extracted
    pub tag: String,

    pub paths: PathsConfig,

    pub markers: MarkerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag: "Agent".to_string(),
            paths: PathsConfig::default(),
            markers: MarkerConfig::default(),
        }
    }
}

/// Input and output locations, relative to the project root
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// HTML API reference document
    pub input: String,

    /// JSON catalogue destination
    #[serde(rename = "json-output")]
    pub json_output: String,

    /// TypeScript module destination
    #[serde(rename = "module-output")]
    pub module_output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: "docs/api.html".to_string(),
            json_output: "api/data/agent-apis.json".to_string(),
            module_output: "api/agent-apis.ts".to_string(),
        }
    }
}

/// Marker strings and selectors that recognize structural roles in the document
///
/// Selectors use CSS syntax; plain markers are matched as literal text.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MarkerConfig {
    /// Attribute carrying `tag/<Tag>/operation/<id>` on section containers
    pub section_id_attribute: String,

    /// Alternate attribute used when no container carries the primary one
    pub fallback_section_attribute: String,

    pub heading_selector: String,

    pub description_selector: String,

    /// Narrow block holding the verb and path display
    pub endpoint_selector: String,

    /// Tried in order when looking for the URL template
    pub path_selectors: Vec<String>,

    /// Class token that accompanies the verb class on verb badges
    pub verb_class_token: String,

    /// Table cell holding the parameter name in its `title` attribute
    pub field_name_selector: String,

    pub property_name_selector: String,

    pub type_selector: String,

    pub query_parameters: String,

    pub path_parameters: String,

    pub header_parameters: String,

    pub request_body: String,

    pub responses: String,

    pub response_entry_selector: String,

    pub status_code_selector: String,

    /// Token marking a parameter or body as required
    pub required: String,

    /// Token preceding a parameter default value
    pub default_value: String,

    /// Text whose presence marks an operation as bearer-authenticated
    pub bearer_auth: String,

    /// Value recorded as the operation authorization
    pub auth_scheme: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            section_id_attribute: "id".to_string(),
            fallback_section_attribute: "data-section-id".to_string(),
            heading_selector: "h2".to_string(),
            description_selector: ".redoc-markdown".to_string(),
            endpoint_selector: ".endpoint".to_string(),
            path_selectors: vec![".endpoint-path".to_string(), ".path".to_string()],
            verb_class_token: "http-verb".to_string(),
            field_name_selector: "td[kind='field']".to_string(),
            property_name_selector: ".property-name".to_string(),
            type_selector: ".property-type".to_string(),
            query_parameters: "query Parameters".to_string(),
            path_parameters: "path Parameters".to_string(),
            header_parameters: "header Parameters".to_string(),
            request_body: "Request Body schema".to_string(),
            responses: "Responses".to_string(),
            response_entry_selector: ".response".to_string(),
            status_code_selector: "strong".to_string(),
            required: "required".to_string(),
            default_value: "Default:".to_string(),
            bearer_auth: "HTTPBearer".to_string(),
            auth_scheme: "bearer".to_string(),
        }
    }
}

impl MarkerConfig {
    /// All CSS selectors, for validation
    pub fn selectors(&self) -> Vec<&str> {
        let mut selectors = vec![
            self.heading_selector.as_str(),
            self.description_selector.as_str(),
            self.endpoint_selector.as_str(),
            self.field_name_selector.as_str(),
            self.property_name_selector.as_str(),
            self.type_selector.as_str(),
            self.response_entry_selector.as_str(),
            self.status_code_selector.as_str(),
        ];
        selectors.extend(self.path_selectors.iter().map(String::as_str));
        selectors
    }

    /// Plain text markers with their config key, for validation
    pub fn text_markers(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("section-id-attribute", self.section_id_attribute.as_str()),
            (
                "fallback-section-attribute",
                self.fallback_section_attribute.as_str(),
            ),
            ("verb-class-token", self.verb_class_token.as_str()),
            ("query-parameters", self.query_parameters.as_str()),
            ("path-parameters", self.path_parameters.as_str()),
            ("header-parameters", self.header_parameters.as_str()),
            ("request-body", self.request_body.as_str()),
            ("responses", self.responses.as_str()),
            ("required", self.required.as_str()),
            ("default-value", self.default_value.as_str()),
            ("bearer-auth", self.bearer_auth.as_str()),
            ("auth-scheme", self.auth_scheme.as_str()),
        ]
    }
}
