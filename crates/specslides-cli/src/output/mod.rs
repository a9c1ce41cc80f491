use specslides_core::model::ExtractResult;

/// What `generate --dry-run` prints.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
}

pub fn format_extract(result: &ExtractResult, fmt: OutputFormat) -> &str {
    match fmt {
        OutputFormat::Json => &result.json,
        OutputFormat::Markdown => &result.markdown,
    }
}
