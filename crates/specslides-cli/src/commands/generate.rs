use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use specslides_capture::CodexImporter;
use specslides_core::config::{UploadConfig, DEFAULT_SERVER_URL};
use specslides_protocol::StoryUploader;

use crate::output::{format_extract, OutputFormat};

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to a Codex session .jsonl file or a directory of sessions
    #[arg(short, long)]
    pub input: PathBuf,

    /// Specslides server URL
    #[arg(long, env = "SPECSLIDES_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Extract prompts and print the payload without uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Payload printed by --dry-run
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    if args.input.as_os_str().to_string_lossy().trim().is_empty() {
        anyhow::bail!("missing required --input path");
    }

    let input = std::path::absolute(&args.input).context("Failed to resolve input path")?;
    tracing::debug!("Generating story from {}", input.display());
    let result = CodexImporter::build_extract(&input)?;

    if args.dry_run {
        println!("{}", format_extract(&result, args.format));
        return Ok(());
    }

    let config = UploadConfig::new(args.server.as_str())?;

    println!("Session: {}", result.extract.session.id);
    println!("Prompts: {}", result.extract.prompts.len());

    let url = StoryUploader::new(config).upload(&result)?;
    println!("{url}");
    Ok(())
}
