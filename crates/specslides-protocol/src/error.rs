#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("upload failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("decode upload response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("upload failed: {0}")]
    Rejected(String),

    #[error("upload failed: missing URL in response")]
    MissingUrl,
}
