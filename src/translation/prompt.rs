pub const PROMPT_TEMPLATE: &str =
    "Translate the following text to {target_language}: {source_text}";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(target_language: &str, source_text: &str) -> String {
    // Source text goes in last so placeholder-like text inside it survives verbatim.
    PROMPT_TEMPLATE
        .replace("{target_language}", target_language)
        .replace("{source_text}", source_text)
}
