//! Matching — scores a candidate's skill set against every stored job and
//! persists the results with replace semantics.

pub mod engine;
pub mod handlers;
pub mod store;
