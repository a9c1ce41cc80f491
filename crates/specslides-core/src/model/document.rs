use super::extract::{PromptExtract, PromptMessage};

/// Title used when the first prompt yields nothing usable.
pub const UNTITLED: &str = "Untitled Specslides";

const PROVENANCE: &str = "<!-- Generated by Specslides -->";
const DESCRIPTION: &str = "Generated from Codex prompts only.";
const SEPARATOR: &str = "---";
const MAX_TITLE_CHARS: usize = 60;

impl PromptExtract {
    /// Render the prompts as a Markdown story.
    ///
    /// Pure function of the extract: rendering the same extract twice
    /// yields identical bytes.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(PROVENANCE);
        md.push_str("\n\n");
        md.push_str("# ");
        md.push_str(&derive_title(&self.prompts));
        md.push_str("\n\n");
        md.push_str(DESCRIPTION);
        md.push_str("\n\n");

        for (i, prompt) in self.prompts.iter().enumerate() {
            if i > 0 {
                md.push_str(SEPARATOR);
                md.push_str("\n\n");
            }

            md.push_str("_**User");
            if !prompt.timestamp.is_empty() {
                md.push_str(&format!(" ({})", prompt.timestamp));
            }
            md.push_str("**_\n\n");
            md.push_str(&prompt.text);
            md.push_str("\n\n");
        }

        md.trim().to_string()
    }
}

/// Title from the first line of the first prompt, cut at 60 characters.
///
/// No word-boundary handling: the cut falls wherever the 60th character ends.
pub fn derive_title(prompts: &[PromptMessage]) -> String {
    let Some(first) = prompts.first() else {
        return UNTITLED.to_string();
    };

    let first_line = first
        .text
        .trim()
        .split('\n')
        .next()
        .unwrap_or_default()
        .trim();
    if first_line.is_empty() {
        return UNTITLED.to_string();
    }

    if first_line.chars().count() > MAX_TITLE_CHARS {
        let cut: String = first_line.chars().take(MAX_TITLE_CHARS).collect();
        return cut.trim().to_string();
    }

    first_line.to_string()
}
