//! Prompt shaping for Gemma-style chat endpoints.

use serde_json::{json, Value};

/// Characters of the prompt shown in verbose logs.
pub const PREVIEW_CHARS: usize = 50;

/// Wrap a user prompt in the single-turn chat template the served model
/// expects. The literal must stay byte-exact.
pub fn chat_turn(prompt: &str) -> String {
    format!("<bos><start_of_turn>user\n{prompt}<end_of_turn>\n<start_of_turn>model\n")
}

/// The one-element instance list sent per query.
pub fn instances(prompt: &str) -> Vec<Value> {
    vec![json!({ "inputs": chat_turn(prompt) })]
}

/// Whitespace is stripped before truncating, counted in chars.
pub fn preview(prompt: &str) -> &str {
    let trimmed = prompt.trim();
    match trimmed.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => &trimmed[..idx],
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_exact() {
        assert_eq!(
            chat_turn("X"),
            "<bos><start_of_turn>user\nX<end_of_turn>\n<start_of_turn>model\n"
        );
    }

    #[test]
    fn single_instance_with_inputs_key() {
        let list = instances("X");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["inputs"], chat_turn("X"));
        assert_eq!(list[0].as_object().unwrap().len(), 1);
    }

    #[test]
    fn preview_strips_then_truncates() {
        let prompt = format!("   {}{}", "a".repeat(48), "  bcdef");
        // Stripping first lets the tail past the leading blanks in.
        assert_eq!(preview(&prompt), format!("{}  ", "a".repeat(48)));
        assert_eq!(preview(&prompt).chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn preview_short_prompt_is_whole() {
        assert_eq!(preview("  Hi \n"), "Hi");
    }

    #[test]
    fn preview_counts_chars_not_bytes() {
        let prompt = "é".repeat(60);
        assert_eq!(preview(&prompt).chars().count(), PREVIEW_CHARS);
    }
}
