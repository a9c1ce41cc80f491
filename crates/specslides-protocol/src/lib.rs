pub mod error;
pub mod upload;

pub use error::ProtocolError;
pub use upload::{StoryUploader, UploadResponse};
