//! Supported language codes, display names, and validation.

use crate::ui::Style;

/// Supported language codes (ISO 639-1) and their display names.
///
/// This set is fixed at build time and establishes the engine's supported
/// language set at construction.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ar", "Arabic"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("no", "Norwegian"),
    ("cs", "Czech"),
    ("hu", "Hungarian"),
    ("ro", "Romanian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("et", "Estonian"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("el", "Greek"),
    ("tr", "Turkish"),
    ("id", "Indonesian"),
    ("bg", "Bulgarian"),
    ("uk", "Ukrainian"),
    ("he", "Hebrew"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
];

/// Returns `true` if the given code (case-insensitive) is supported.
pub fn is_supported(code: &str) -> bool {
    let code = code.to_lowercase();
    SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Returns the human-readable name for a language code.
///
/// Unknown codes return the upper-cased input, never an error.
pub fn display_name(code: &str) -> String {
    let lowered = code.to_lowercase();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == lowered)
        .map_or_else(|| code.to_uppercase(), |(_, name)| (*name).to_string())
}

/// Validates that the given language code is supported.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list.
pub fn validate_language(lang: &str) -> anyhow::Result<()> {
    if is_supported(lang) {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes (ISO 639-1): ja, es, zh, ko, fr, de, it, ...\n\
             Run 'lingo languages' to see all supported codes."
        )
    }
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported_valid() {
        assert!(is_supported("ja"));
        assert!(is_supported("en"));
        assert!(is_supported("ES")); // Case insensitive
    }

    #[test]
    fn test_is_supported_invalid() {
        assert!(!is_supported("invalid"));
        assert!(!is_supported(""));
        assert!(!is_supported("xx"));
    }

    #[test]
    fn test_validate_language() {
        assert!(validate_language("ja").is_ok());
        assert!(validate_language("EN").is_ok());
        assert!(validate_language("invalid").is_err());
        assert!(validate_language("").is_err());
    }

    #[test]
    fn test_display_name_known_codes() {
        assert_eq!(display_name("es"), "Spanish");
        assert_eq!(display_name("JA"), "Japanese");
        assert_eq!(display_name("zh"), "Chinese");
    }

    #[test]
    fn test_display_name_unknown_code_uppercases() {
        assert_eq!(display_name("xx"), "XX");
        assert_eq!(display_name("qqq"), "QQQ");
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        let mut codes: Vec<_> = SUPPORTED_LANGUAGES.iter().map(|(c, _)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), SUPPORTED_LANGUAGES.len());
    }
}
