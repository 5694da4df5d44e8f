use crate::model::HttpMethod;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One documented REST endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord {
    /// Machine identifier taken from the section anchor
    pub id: String,

    /// Human readable title
    pub name: String,

    /// Descriptive prose, empty when the section has none
    pub description: String,

    pub method: HttpMethod,

    /// URL template with `{param}` placeholders, empty when undetectable
    pub path: String,

    pub parameters: Parameters,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    pub responses: Vec<Response>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
}

impl OperationRecord {
    /// Creates a record carrying only its identifier and defaults everywhere else
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let name = title_case_id(&id);
        Self {
            id,
            name,
            description: String::new(),
            method: HttpMethod::default(),
            path: String::new(),
            parameters: Parameters::default(),
            request_body: None,
            responses: Vec::new(),
            authorization: None,
        }
    }

    /// Total number of parameters across all groups, body properties excluded
    pub fn parameter_count(&self) -> usize {
        self.parameters.query.len() + self.parameters.path.len() + self.parameters.header.len()
    }
}

/// Fixed three-way partition of operation parameters
///
/// All three groups are always serialized, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub query: Vec<Parameter>,
    pub path: Vec<Parameter>,
    pub header: Vec<Parameter>,
}

impl Parameters {
    /// Returns the group for a location
    pub fn group(&self, location: ParameterLocation) -> &[Parameter] {
        match location {
            ParameterLocation::Query => &self.query,
            ParameterLocation::Path => &self.path,
            ParameterLocation::Header => &self.header,
        }
    }

    /// Returns the mutable group for a location
    pub fn group_mut(&mut self, location: ParameterLocation) -> &mut Vec<Parameter> {
        match location {
            ParameterLocation::Query => &mut self.query,
            ParameterLocation::Path => &mut self.path,
            ParameterLocation::Header => &mut self.header,
        }
    }
}

/// Where a parameter is carried in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Header => "header",
        }
    }

    /// Locations in the order they are emitted
    pub fn all() -> [Self; 3] {
        [Self::Query, Self::Path, Self::Header]
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One field of a parameter group or request body schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    /// Normalized scalar type name
    #[serde(rename = "type")]
    pub param_type: String,

    pub required: bool,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Request body schema of an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    pub content_type: String,
    pub required: bool,
    pub properties: Vec<Parameter>,
}

/// One documented response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub description: String,
}

/// Turns an operation id into a display name
///
/// Underscores become spaces and each word is capitalized, so
/// `get_agent_tasks` becomes `Get Agent Tasks`.
pub fn title_case_id(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
