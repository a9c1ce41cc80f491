pub mod generate;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Extract prompts from a Codex session and upload a story
    Generate(generate::GenerateArgs),
}
