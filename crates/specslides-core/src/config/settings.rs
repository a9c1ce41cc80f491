use crate::error::CoreError;

/// Server used when neither `--server` nor `SPECSLIDES_SERVER_URL` is given.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

const STORIES_PATH: &str = "/api/stories";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub server_url: String,
}

impl UploadConfig {
    /// Build a config for the given server base URL.
    pub fn new(server_url: impl Into<String>) -> Result<Self, CoreError> {
        let server_url = server_url.into().trim().to_string();
        if server_url.is_empty() {
            return Err(CoreError::Config("server URL must not be empty".into()));
        }
        Ok(Self { server_url })
    }

    /// Full endpoint stories are POSTed to.
    pub fn stories_url(&self) -> String {
        format!("{}{STORIES_PATH}", self.server_url.trim_end_matches('/'))
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}
