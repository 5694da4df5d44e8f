//! Data model for extracted operations
//!
//! # Components
//!
//! - `OperationRecord`: one documented endpoint with its parameters, body and responses
//! - `Parameter`: one field of a parameter group or body schema
//! - `HttpMethod`: the normalized verb of an operation

mod method;
mod operation;

// Re-export main types
pub use method::HttpMethod;
pub use operation::{
    title_case_id, OperationRecord, Parameter, ParameterLocation, Parameters, RequestBody,
    Response,
};
