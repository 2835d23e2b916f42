use crate::domain::comment::entity::ModerationInput;

pub const MODERATION_PROMPT: &str = "\
You moderate reader comments on a blog about software and programming.
Classify each comment supplied below.

Return one object per comment with these fields:
- 'id': integer, copied unchanged from the input.
- 'message': string, copied unchanged from the input.
- 'moderation_status': integer. 1 is OK, 2 is Warning, 3 is Dangerous.
  OK covers ordinary language, including disagreement and civil debate.
  Warning covers strong language, implicit mockery, swearing in context, and otherwise normal messages that contain a URL.
  Dangerous covers hate speech, slander, slurs, ad hominem and straw man arguments, and spam or unrelated promotion, including placeholder or lorem ipsum text.
- 'moderation_reason': string, one sentence of at most 15 words explaining the status.

The comments follow as a JSON array of { \"id\": integer, \"message\": string }.
";

/// Most words kept from a classifier reason.
pub const MAX_REASON_WORDS: usize = 15;

pub fn build_moderation_prompt(batch: &[ModerationInput]) -> Result<String, serde_json::Error> {
    let payload = serde_json::to_string(batch)?;
    Ok(format!("{}\n{}", MODERATION_PROMPT, payload))
}

pub fn truncate_reason(reason: &str) -> String {
    reason
        .split_whitespace()
        .take(MAX_REASON_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}
