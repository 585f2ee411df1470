//! The translator adapter contract.
//!
//! The engine depends on exactly two remote operations: translating a text
//! and detecting its language. Everything vendor-specific lives behind this
//! trait; the engine never sees wire formats.

use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by a translator adapter.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The translation request failed (network, vendor, or malformed reply).
    #[error("translation failed: {0}")]
    Translation(String),
    /// The language detection request failed.
    #[error("language detection failed: {0}")]
    Detection(String),
}

/// A remote translation backend.
///
/// Implementations must be shareable across concurrently running engine
/// tasks, hence `Send + Sync`.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` from `from_language` into `to_language`.
    async fn translate_text(
        &self,
        text: &str,
        from_language: &str,
        to_language: &str,
    ) -> Result<String, TranslateError>;

    /// Detects the language of `text`, returning an ISO 639-1-like code.
    async fn detect_language(&self, text: &str) -> Result<String, TranslateError>;
}
