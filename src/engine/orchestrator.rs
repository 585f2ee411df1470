//! Cache-first translation orchestration.
//!
//! The orchestrator decides, per request, between three outcomes: a
//! no-translation short circuit (English target or blank input), a cache
//! hit, or a live adapter call whose result is written back into the
//! cache. Adapter failures never propagate as faults; they become the
//! `Error` variant of [`TranslationResult`].

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cache::{CacheKey, CacheStatusReport, CacheStore, FlowContext};
use crate::translation::{self, Translator};

use super::populate::COMMON_MESSAGES;

/// Outcome of one translation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    /// The translated (or passed-through) text and wall-clock time spent.
    Success { text: String, elapsed_ms: u64 },
    /// The request failed; the reason is human-readable, never a panic.
    Error { reason: String },
}

impl TranslationResult {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The translated text, if this is a success.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success { text, .. } => Some(text),
            Self::Error { .. } => None,
        }
    }
}

/// The central translation engine.
///
/// Construction takes the translator adapter and cache store as plain
/// parameters; the engine holds no global state and is cheap to clone,
/// with clones sharing the same collaborators and shutdown token.
#[derive(Clone)]
pub struct TranslationEngine {
    translator: Arc<dyn Translator>,
    cache: Arc<dyn CacheStore>,
    languages: Arc<HashSet<String>>,
    cancel: CancellationToken,
}

impl TranslationEngine {
    /// Creates an engine over the given collaborators.
    ///
    /// The supported language set is fixed here and read-only afterwards.
    pub fn new(translator: Arc<dyn Translator>, cache: Arc<dyn CacheStore>) -> Self {
        let languages = translation::SUPPORTED_LANGUAGES
            .iter()
            .map(|(code, _)| (*code).to_string())
            .collect();

        Self {
            translator,
            cache,
            languages: Arc::new(languages),
            cancel: CancellationToken::new(),
        }
    }

    /// Translates `text` into `target_language`, auto-detecting the source.
    pub async fn translate(&self, text: &str, target_language: &str) -> TranslationResult {
        self.translate_from(text, target_language, "auto").await
    }

    /// Translates `text` from `source_language` into `target_language`.
    ///
    /// Cache-first with live fallback; a cache hit is never re-validated
    /// for freshness. A successful live translation is written back into
    /// the cache so repeated misses do not re-fetch.
    pub async fn translate_from(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> TranslationResult {
        let target = target_language.to_lowercase();

        if !self.languages.contains(&target) {
            return TranslationResult::Error {
                reason: format!("Unsupported language: {target_language}"),
            };
        }

        // English is the canonical source language; blank input is a no-op
        if target == "en" || text.trim().is_empty() {
            return TranslationResult::Success {
                text: text.to_string(),
                elapsed_ms: 0,
            };
        }

        let start = Instant::now();
        let key = CacheKey::new(text, &target, FlowContext::Api);

        match self.cache.lookup(&key) {
            Ok(Some(cached)) => {
                debug!(language = %target, "cache hit");
                return TranslationResult::Success {
                    text: cached,
                    elapsed_ms: start.elapsed().as_millis() as u64,
                };
            }
            Ok(None) => {}
            // A broken cache must not take translation down with it
            Err(e) => warn!("cache lookup failed, treating as miss: {e:#}"),
        }

        let source = if source_language == "auto" {
            "en"
        } else {
            source_language
        };

        match self.translator.translate_text(text, source, &target).await {
            Ok(translated) => {
                if let Err(e) = self.cache.put(&key, &translated) {
                    warn!("failed to cache translation: {e:#}");
                }

                debug!(
                    language = %target,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "live translation"
                );

                TranslationResult::Success {
                    text: translated,
                    elapsed_ms: start.elapsed().as_millis() as u64,
                }
            }
            Err(e) => {
                warn!("translation failed: {e}");
                TranslationResult::Error {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Translates each message sequentially.
    ///
    /// The result is positionally aligned with the input; one message's
    /// failure does not abort its siblings.
    pub async fn translate_batch(
        &self,
        messages: &[String],
        target_language: &str,
        source_language: &str,
    ) -> Vec<TranslationResult> {
        let mut results = Vec::with_capacity(messages.len());
        for message in messages {
            results.push(
                self.translate_from(message, target_language, source_language)
                    .await,
            );
        }
        results
    }

    /// Detects the language of `text`.
    ///
    /// Falls back to `"en"` on any adapter failure; detection prioritizes
    /// availability over correctness and never fails upward.
    pub async fn detect_language(&self, text: &str) -> String {
        match self.translator.detect_language(text).await {
            Ok(code) => code,
            Err(e) => {
                warn!("language detection failed, defaulting to en: {e}");
                "en".to_string()
            }
        }
    }

    /// The fixed set of supported language codes.
    pub fn supported_languages(&self) -> &HashSet<String> {
        &self.languages
    }

    /// Returns `true` if `code` (case-insensitive) is supported.
    pub fn is_language_supported(&self, code: &str) -> bool {
        self.languages.contains(&code.to_lowercase())
    }

    /// Human-readable name for a language code; unknown codes come back
    /// upper-cased rather than as an error.
    pub fn language_display_name(&self, code: &str) -> String {
        translation::display_name(code)
    }

    /// Population status for `language` against the canonical corpus.
    pub fn cache_status(&self, language: &str) -> anyhow::Result<CacheStatusReport> {
        self.cache.status_report(language, COMMON_MESSAGES)
    }

    /// Stops background work (population passes, typing deliveries).
    ///
    /// Idempotent. In-flight adapter requests are not aborted, only their
    /// continuations are dropped.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub(super) fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engine::testing::{ScriptedTranslator, test_engine};

    #[tokio::test]
    async fn test_unsupported_language_rejected_without_adapter_call() {
        let translator = Arc::new(ScriptedTranslator::new());
        let (engine, _cache, _dir) = test_engine(translator.clone());

        let result = engine.translate("Hello", "xx").await;

        assert_eq!(
            result,
            TranslationResult::Error {
                reason: "Unsupported language: xx".to_string()
            }
        );
        assert_eq!(translator.translate_calls(), 0);
    }

    #[tokio::test]
    async fn test_english_target_short_circuits() {
        let translator = Arc::new(ScriptedTranslator::new());
        let (engine, _cache, _dir) = test_engine(translator.clone());

        let result = engine.translate("Hello world", "en").await;

        assert_eq!(
            result,
            TranslationResult::Success {
                text: "Hello world".to_string(),
                elapsed_ms: 0
            }
        );
        assert_eq!(translator.translate_calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_input_is_a_no_op() {
        let translator = Arc::new(ScriptedTranslator::new());
        let (engine, _cache, _dir) = test_engine(translator.clone());

        let result = engine.translate("   \n\t", "es").await;

        assert_eq!(
            result,
            TranslationResult::Success {
                text: "   \n\t".to_string(),
                elapsed_ms: 0
            }
        );
        assert_eq!(translator.translate_calls(), 0);
    }

    #[tokio::test]
    async fn test_miss_then_hit_with_write_back() {
        let translator = Arc::new(ScriptedTranslator::new().with_response("Hello world", "Hola mundo"));
        let (engine, _cache, _dir) = test_engine(translator.clone());

        let first = engine.translate("Hello world", "es").await;
        assert_eq!(first.text(), Some("Hola mundo"));
        assert_eq!(translator.translate_calls(), 1);

        // "auto" source resolves to English before reaching the adapter
        assert_eq!(
            translator.requests(),
            vec![(
                "Hello world".to_string(),
                "en".to_string(),
                "es".to_string()
            )]
        );

        // Second identical call must be served from cache
        let second = engine.translate("Hello world", "es").await;
        assert_eq!(second.text(), Some("Hola mundo"));
        assert_eq!(translator.translate_calls(), 1);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_adapter() {
        use crate::cache::{CacheKey, CacheStore, FlowContext};

        let translator = Arc::new(ScriptedTranslator::new());
        let (engine, cache, _dir) = test_engine(translator.clone());

        let key = CacheKey::new("Hello", "es", FlowContext::Api);
        cache.put(&key, "Hola").unwrap();

        let result = engine.translate("Hello", "es").await;
        assert_eq!(result.text(), Some("Hola"));
        assert_eq!(translator.translate_calls(), 0);
    }

    #[tokio::test]
    async fn test_adapter_failure_becomes_error_result() {
        let translator = Arc::new(ScriptedTranslator::new().failing_on("Hello"));
        let (engine, _cache, _dir) = test_engine(translator);

        let result = engine.translate("Hello", "es").await;
        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn test_batch_is_positionally_aligned_despite_failure() {
        let translator = Arc::new(
            ScriptedTranslator::new()
                .with_response("one", "uno")
                .failing_on("two")
                .with_response("three", "tres"),
        );
        let (engine, _cache, _dir) = test_engine(translator);

        let messages = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let results = engine.translate_batch(&messages, "es", "auto").await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].text(), Some("uno"));
        assert!(!results[1].is_success());
        assert_eq!(results[2].text(), Some("tres"));
    }

    #[tokio::test]
    async fn test_detect_language_delegates() {
        let translator = Arc::new(ScriptedTranslator::new().detecting("ja"));
        let (engine, _cache, _dir) = test_engine(translator);

        assert_eq!(engine.detect_language("こんにちは").await, "ja");
    }

    #[tokio::test]
    async fn test_detect_language_falls_back_to_english() {
        let translator = Arc::new(ScriptedTranslator::new());
        let (engine, _cache, _dir) = test_engine(translator);

        assert_eq!(engine.detect_language("anything").await, "en");
    }

    #[tokio::test]
    async fn test_language_queries() {
        let translator = Arc::new(ScriptedTranslator::new());
        let (engine, _cache, _dir) = test_engine(translator);

        assert!(engine.is_language_supported("es"));
        assert!(engine.is_language_supported("ES"));
        assert!(!engine.is_language_supported("xx"));
        assert!(engine.supported_languages().contains("ja"));
        assert_eq!(engine.language_display_name("es"), "Spanish");
        assert_eq!(engine.language_display_name("xx"), "XX");
    }

    #[tokio::test]
    async fn test_shutdown_is_idempotent() {
        let translator = Arc::new(ScriptedTranslator::new());
        let (engine, _cache, _dir) = test_engine(translator);

        engine.shutdown();
        engine.shutdown();
        assert!(engine.cancel_token().is_cancelled());
    }
}
