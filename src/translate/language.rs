/// Language codes the front-end offers, with the names used in prompts
pub const LANGUAGES: &[(&str, &str)] = &[
    ("bn", "Bengali"),
    ("en", "English"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("zh", "Chinese (Simplified)"),
    ("ja", "Japanese"),
    ("at", "Western Punjabi"),
    ("ru", "Russian"),
    ("pt", "Portuguese"),
    ("it", "Italian"),
    ("ko", "Korean"),
    ("tr", "Turkish"),
    ("vi", "Vietnamese"),
];

/// Display name for a language code. Unknown codes come back unchanged;
/// this only makes prompts clearer and never rejects a request.
pub fn language_name(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}
