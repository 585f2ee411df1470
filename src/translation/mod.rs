mod adapter;
mod client;
mod language;
mod prompt;

pub use adapter::{TranslateError, Translator};
pub use client::HttpTranslator;
pub use language::{
    SUPPORTED_LANGUAGES, display_name, is_supported, print_languages, validate_language,
};
