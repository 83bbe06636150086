//! Job postings — storage queries, the startup seed population, and the
//! listing endpoint.

pub mod handlers;
pub mod seed;
pub mod store;
