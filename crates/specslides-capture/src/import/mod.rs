pub mod codex;
pub mod detect;
pub mod jsonl;
