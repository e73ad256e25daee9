//! Core functionality for the search command builder
//!
//! Contains the request model and the renderer that turns a request into
//! a walker invocation.

pub mod plan;
pub mod request;

pub use plan::SearchPlan;
pub use request::{OutputMode, RequestBuilder, SearchRequest};
