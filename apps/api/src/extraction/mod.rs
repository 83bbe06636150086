//! Skill extraction — turns unstructured text into a list of skill strings
//! via one LLM call.
//!
//! Behind the `SkillExtractor` trait so handlers and the seed routine can
//! be exercised in tests without touching the network. Default backend:
//! `LlmSkillExtractor`.
//!
//! Failure policy: this is the one place in the service where errors are
//! swallowed by design. A flaky model call must never block ingestion or
//! matching, so every failure path logs and yields an empty list.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::llm_client::{strip_json_fences, LlmClient};

pub mod prompts;

/// Input is truncated to this many characters before the model call.
/// Bounds cost and latency; text beyond it is deliberately dropped.
const MAX_EXTRACT_CHARS: usize = 2000;

#[async_trait]
pub trait SkillExtractor: Send + Sync {
    /// Extracts skill strings from free text. Infallible by contract:
    /// any upstream failure produces an empty list.
    async fn extract_skills(&self, text: &str) -> Vec<String>;
}

/// Default extractor backed by the OpenAI chat-completions client.
pub struct LlmSkillExtractor {
    llm: LlmClient,
}

impl LlmSkillExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract_skills(&self, text: &str) -> Vec<String> {
        let excerpt = truncate_chars(text, MAX_EXTRACT_CHARS);
        let prompt = prompts::SKILL_EXTRACT_PROMPT.replace("{text}", excerpt);

        let response = match self.llm.call(prompts::SKILL_EXTRACT_SYSTEM, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Skill extraction LLM call failed, returning empty list: {e}");
                return Vec::new();
            }
        };

        match parse_skill_response(&response) {
            Some(skills) => skills,
            None => {
                warn!("Skill extraction returned unparseable output, returning empty list");
                Vec::new()
            }
        }
    }
}

/// Parses model output into a skill list.
///
/// Accepted shapes: a raw JSON array of strings, or a JSON object whose
/// first array-valued field is used. serde_json's default map iterates
/// keys in lexicographic order, which is the deterministic "first" here.
/// Non-string array elements are ignored.
pub fn parse_skill_response(text: &str) -> Option<Vec<String>> {
    let value: Value = serde_json::from_str(strip_json_fences(text)).ok()?;

    let list = match &value {
        Value::Array(items) => items,
        Value::Object(fields) => fields.values().find_map(|v| v.as_array())?,
        _ => return None,
    };

    Some(
        list.iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
    )
}

/// Truncates to at most `max` characters, respecting char boundaries.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
