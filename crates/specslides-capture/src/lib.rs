pub mod error;
pub mod import;

pub use error::CaptureError;
pub use import::codex::CodexImporter;
