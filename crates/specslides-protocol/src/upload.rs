use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use specslides_core::config::UploadConfig;
use specslides_core::model::ExtractResult;

use crate::error::ProtocolError;

/// Publishes rendered stories to a Specslides server.
pub struct StoryUploader {
    config: UploadConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct StoryRequest<'a> {
    story: StoryPayload<'a>,
}

#[derive(Debug, Serialize)]
struct StoryPayload<'a> {
    markdown: &'a str,
    source: &'a str,
    source_path: &'a str,
}

/// Body returned by `POST /api/stories`.
#[derive(Debug, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// A single message or a list of validation messages.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl StoryUploader {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        self.config.stories_url()
    }

    /// Upload the story Markdown and return the URL the server assigned it.
    pub fn upload(&self, result: &ExtractResult) -> Result<String, ProtocolError> {
        let body = StoryRequest {
            story: StoryPayload {
                markdown: &result.markdown,
                source: &result.extract.source,
                source_path: &result.extract.session.source_path,
            },
        };

        let endpoint = self.endpoint();
        tracing::info!("Uploading story to {endpoint}");

        let response = self.client.post(&endpoint).json(&body).send()?;
        let status = response.status();
        let text = response.text()?;
        tracing::debug!("Upload responded with {status}");

        interpret_response(status, &text)
    }
}

/// Map a server response to the story URL or a user-facing failure.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<String, ProtocolError> {
    let parsed = match serde_json::from_str::<UploadResponse>(body) {
        Ok(parsed) => parsed,
        Err(_) if !status.is_success() => UploadResponse::default(),
        Err(e) => return Err(ProtocolError::Decode(e)),
    };

    if !status.is_success() {
        let mut msg = parsed
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| "upload_failed".to_string());
        if let Some(details) = parsed.details.as_ref().and_then(details_text) {
            msg = format!("{msg}: {details}");
        }
        return Err(ProtocolError::Rejected(msg));
    }

    parsed
        .url
        .filter(|u| !u.is_empty())
        .ok_or(ProtocolError::MissingUrl)
}

fn details_text(details: &serde_json::Value) -> Option<String> {
    let text = match details {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|i| i.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    };
    (!text.is_empty()).then_some(text)
}
