pub mod document;
pub mod extract;

pub use document::{derive_title, UNTITLED};
pub use extract::{PromptExtract, PromptMessage, PromptSession, SCHEMA_VERSION, SOURCE_CODEX};

/// A finished extraction: the structured extract plus both rendered forms.
#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub extract: PromptExtract,
    pub json: String,
    pub markdown: String,
}

impl ExtractResult {
    /// Render both output forms from an extract.
    pub fn from_extract(extract: PromptExtract) -> Result<Self, crate::error::CoreError> {
        let json = extract.to_json_pretty()?;
        let markdown = extract.to_markdown();
        Ok(Self {
            extract,
            json,
            markdown,
        })
    }
}
