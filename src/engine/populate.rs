//! Rate-limited bulk cache population.
//!
//! A population pass walks a message list in order, translating each one
//! through the orchestrator (which writes results into the cache), with a
//! fixed delay between messages to bound the outbound request rate. A
//! failed message is recorded and the pass moves on; there are no retries
//! within a pass.

use std::time::Duration;
use tracing::{info, warn};

use super::orchestrator::{TranslationEngine, TranslationResult};

/// Fixed inter-message delay during population.
pub const MESSAGE_DELAY: Duration = Duration::from_millis(100);

/// Canonical corpus of common phrases used for pre-population and for
/// computing population-completeness reports.
pub const COMMON_MESSAGES: &[&str] = &[
    "Hello",
    "Thank you",
    "Please",
    "Yes",
    "No",
    "How are you?",
    "What is your name?",
    "Nice to meet you",
    "Goodbye",
    "See you later",
    "I don't understand",
    "Can you help me?",
    "Where is the bathroom?",
    "How much does this cost?",
    "I would like to order",
    "Excuse me",
    "I'm sorry",
    "You're welcome",
    "Good morning",
    "Good evening",
];

/// One message that failed during a population pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationFailure {
    pub message: String,
    pub reason: String,
}

/// Outcome of a population pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationReport {
    pub language: String,
    /// Messages attempted (each at most once).
    pub attempted: usize,
    pub failures: Vec<PopulationFailure>,
}

impl PopulationReport {
    pub fn succeeded(&self) -> usize {
        self.attempted - self.failures.len()
    }
}

impl TranslationEngine {
    /// Populates the cache for `target_language` from the canonical corpus.
    pub async fn populate_cache_default(&self, target_language: &str) -> PopulationReport {
        self.populate_cache(target_language, COMMON_MESSAGES).await
    }

    /// Populates the cache for `target_language` from `messages`.
    ///
    /// Each message is attempted exactly once, in order, with a
    /// [`MESSAGE_DELAY`] pause between messages. Cancellation via
    /// [`TranslationEngine::shutdown`] ends the pass early.
    pub async fn populate_cache(
        &self,
        target_language: &str,
        messages: &[&str],
    ) -> PopulationReport {
        info!(
            language = target_language,
            count = messages.len(),
            "populating cache"
        );

        let mut report = PopulationReport {
            language: target_language.to_lowercase(),
            attempted: 0,
            failures: Vec::new(),
        };

        for (i, message) in messages.iter().enumerate() {
            if self.cancel_token().is_cancelled() {
                info!(
                    language = target_language,
                    attempted = report.attempted,
                    "population cancelled"
                );
                return report;
            }

            if let TranslationResult::Error { reason } =
                self.translate(message, target_language).await
            {
                warn!(message = *message, %reason, "failed to populate message");
                report.failures.push(PopulationFailure {
                    message: (*message).to_string(),
                    reason,
                });
            }
            report.attempted += 1;

            if i + 1 < messages.len() {
                tokio::select! {
                    biased;
                    () = self.cancel_token().cancelled() => {
                        info!(
                            language = target_language,
                            attempted = report.attempted,
                            "population cancelled"
                        );
                        return report;
                    }
                    () = tokio::time::sleep(MESSAGE_DELAY) => {}
                }
            }
        }

        info!(
            language = target_language,
            succeeded = report.succeeded(),
            failed = report.failures.len(),
            "population completed"
        );

        report
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crate::cache::CacheStore;
    use crate::engine::testing::{ScriptedTranslator, test_engine};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_all_messages_attempted_despite_failures() {
        let translator = Arc::new(ScriptedTranslator::new().failing_on("two"));
        let (engine, _cache, _dir) = test_engine(translator.clone());

        let report = engine.populate_cache("es", &["one", "two", "three"]).await;

        assert_eq!(report.attempted, 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].message, "two");
        assert_eq!(translator.translate_calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_population_respects_rate_limit() {
        let translator = Arc::new(ScriptedTranslator::new());
        let (engine, _cache, _dir) = test_engine(translator);

        let start = tokio::time::Instant::now();
        let report = engine.populate_cache("es", &["one", "two", "three"]).await;

        assert_eq!(report.attempted, 3);
        // Two inter-message delays for three messages
        assert!(start.elapsed() >= MESSAGE_DELAY * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_population_writes_through_to_cache() {
        let translator = Arc::new(ScriptedTranslator::new());
        let (engine, cache, _dir) = test_engine(translator);

        engine.populate_cache("es", &["Hello", "Goodbye"]).await;

        let report = cache.status_report("es", &["Hello", "Goodbye"]).unwrap();
        assert!(
            report
                .populated
                .contains(&crate::cache::FlowContext::Api)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_population_after_shutdown_attempts_nothing() {
        let translator = Arc::new(ScriptedTranslator::new());
        let (engine, _cache, _dir) = test_engine(translator.clone());

        engine.shutdown();
        let report = engine.populate_cache("es", &["one", "two"]).await;

        assert_eq!(report.attempted, 0);
        assert_eq!(translator.translate_calls(), 0);
    }

    #[test]
    fn test_canonical_corpus_shape() {
        assert_eq!(COMMON_MESSAGES.len(), 20);
        assert!(COMMON_MESSAGES.contains(&"Hello"));
        assert!(COMMON_MESSAGES.contains(&"Good evening"));
    }
}
