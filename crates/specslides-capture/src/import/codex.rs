use std::path::Path;

use specslides_core::model::{ExtractResult, PromptExtract, PromptMessage, PromptSession};

use crate::error::CaptureError;
use crate::import::detect::resolve_input;
use crate::import::jsonl::{object_field, read_records, record_type, str_field, Record};

const SESSION_META: &str = "session_meta";
const EVENT_MSG: &str = "event_msg";
const USER_MESSAGE: &str = "user_message";

/// Build prompt extracts from Codex session rollout files.
pub struct CodexImporter;

impl CodexImporter {
    /// Resolve `input` (file or directory), read it and build the extract
    /// together with its JSON and Markdown renderings.
    pub fn build_extract(input: &Path) -> Result<ExtractResult, CaptureError> {
        let session_path = resolve_input(input)?;
        let records = read_records(&session_path)?;

        let meta = extract_session_meta(&records)?;
        let prompts = extract_user_prompts(&records);
        if prompts.is_empty() {
            return Err(CaptureError::NoPrompts);
        }
        tracing::debug!("Session {} has {} prompts", meta.id, prompts.len());

        let extract = PromptExtract::codex(
            PromptSession {
                id: meta.id,
                created_at: meta.created_at,
                workspace_root: meta.workspace_root,
                source_path: session_path.to_string_lossy().into_owned(),
            },
            prompts,
        );

        Ok(ExtractResult::from_extract(extract)?)
    }
}

/// Identity fields of the `session_meta` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMeta {
    pub id: String,
    pub created_at: String,
    pub workspace_root: String,
}

/// Read session identity from the first `session_meta` record.
///
/// Later `session_meta` records are ignored. A payload without its own
/// `timestamp` falls back to the envelope timestamp.
pub fn extract_session_meta(records: &[Record]) -> Result<SessionMeta, CaptureError> {
    let record = records
        .iter()
        .find(|r| record_type(r) == SESSION_META)
        .ok_or_else(|| CaptureError::NotFound("session_meta record not found".into()))?;

    let payload = object_field(record, "payload")
        .ok_or_else(|| CaptureError::MalformedInput("session_meta payload missing".into()))?;

    let id = str_field(payload, "id");
    let workspace_root = str_field(payload, "cwd");
    let mut created_at = str_field(payload, "timestamp");
    if created_at.is_empty() {
        created_at = str_field(record, "timestamp");
    }

    if id.is_empty() || created_at.is_empty() || workspace_root.is_empty() {
        return Err(CaptureError::MalformedInput(
            "session_meta missing required fields".into(),
        ));
    }

    Ok(SessionMeta {
        id: id.to_string(),
        created_at: created_at.to_string(),
        workspace_root: workspace_root.to_string(),
    })
}

/// Collect user-authored prompts in file order.
///
/// Blank messages are dropped without using up an id, so ids stay dense.
pub fn extract_user_prompts(records: &[Record]) -> Vec<PromptMessage> {
    records
        .iter()
        .filter(|r| record_type(r) == EVENT_MSG)
        .filter_map(|r| {
            let payload = object_field(r, "payload")?;
            if str_field(payload, "type") != USER_MESSAGE {
                return None;
            }
            let text = str_field(payload, "message").trim();
            if text.is_empty() {
                return None;
            }
            Some((str_field(r, "timestamp"), text))
        })
        .enumerate()
        .map(|(i, (timestamp, text))| PromptMessage {
            id: PromptMessage::sequence_id(i + 1),
            timestamp: timestamp.to_string(),
            text: text.to_string(),
        })
        .collect()
}
