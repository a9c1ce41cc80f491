mod settings;

pub use settings::{UploadConfig, DEFAULT_SERVER_URL};
