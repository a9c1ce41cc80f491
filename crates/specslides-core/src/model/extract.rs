use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const SCHEMA_VERSION: &str = "1.0";
pub const SOURCE_CODEX: &str = "codex";

/// The structured prompt extract for one session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptExtract {
    pub schema_version: String,
    pub source: String,
    pub session: PromptSession,
    pub prompts: Vec<PromptMessage>,
}

/// Session identity, copied verbatim from the `session_meta` record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptSession {
    pub id: String,
    pub created_at: String,
    pub workspace_root: String,
    pub source_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptMessage {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub timestamp: String,
    pub text: String,
}

impl PromptExtract {
    /// Build a Codex extract with the current schema version.
    pub fn codex(session: PromptSession, prompts: Vec<PromptMessage>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            source: SOURCE_CODEX.to_string(),
            session,
            prompts,
        }
    }

    /// Pretty-printed JSON (two-space indent).
    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl PromptMessage {
    /// Sequential prompt id, 1-based: `p_1`, `p_2`, ...
    pub fn sequence_id(index: usize) -> String {
        format!("p_{index}")
    }
}
