pub const TRANSLATE_PROMPT_TEMPLATE: &str =
    "You are a translator. Translate the user's text from {source_language} to {target_language}. \
     Output only the translated text without any explanations. \
     Preserve the original formatting including blank lines and whitespace.";

pub const DETECT_PROMPT: &str =
    "Identify the language of the user's text. \
     Reply with only the ISO 639-1 language code (for example: en, ja, es).";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_translate_prompt(source_language: &str, target_language: &str) -> String {
    // {source_language}/{target_language} are placeholders for string
    // replacement, not format arguments
    TRANSLATE_PROMPT_TEMPLATE
        .replace("{source_language}", source_language)
        .replace("{target_language}", target_language)
}
