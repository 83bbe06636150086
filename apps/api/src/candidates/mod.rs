//! Candidates — résumé upload, text extraction, and the explicit
//! skill-analysis step.

pub mod handlers;
pub mod ingest;
pub mod store;
