//! Serialization boundary for skill lists.
//!
//! Skill lists live in the domain as `Vec<String>` and in SQLite as JSON
//! text. Every encode/decode crosses through these two functions so the
//! storage representation never leaks into business logic. An empty list
//! encodes as `[]`, never null.

use anyhow::{Context, Result};

pub fn encode_skills(skills: &[String]) -> String {
    // Vec<String> -> JSON array cannot fail to serialize
    serde_json::to_string(skills).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes a stored skill column. Rows are only ever written through
/// `encode_skills`, so a decode failure means corrupt storage and is
/// surfaced, not defaulted.
pub fn decode_skills(raw: &str) -> Result<Vec<String>> {
    serde_json::from_str(raw).with_context(|| format!("invalid stored skill list: {raw}"))
}
