// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod request;
pub mod result;

pub use request::{CreationRequest, DEFAULT_README, DEFAULT_WORKFLOW};
pub use result::CreationResult;
