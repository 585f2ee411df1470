//! Progressive typing delivery.
//!
//! A completed translation is turned into a finite stream of successive
//! character prefixes, paced per language script class so the reveal reads
//! naturally. Dropping the stream stops emission; there is no separate
//! cancelled terminal state.

use futures_util::{Stream, StreamExt};
use std::pin::Pin;
use std::time::Duration;
use tracing::warn;

use super::orchestrator::{TranslationEngine, TranslationResult};

/// Per-character reveal delay for a language code.
///
/// Latin scripts read fastest; CJK and Southeast-Asian scripts get a wider
/// pause per glyph, right-to-left scripts the widest.
pub fn typing_speed(language_code: &str) -> Duration {
    let millis = match language_code.to_lowercase().as_str() {
        "zh" | "ja" | "ko" | "th" | "vi" | "hi" | "bn" => 110,
        "ar" | "fa" | "ur" | "he" => 115,
        // Latin scripts and anything unclassified
        _ => 65,
    };
    Duration::from_millis(millis)
}

/// Emits successive prefixes of `full_text`, one character at a time.
///
/// Each prefix is followed by the language's per-character delay. The
/// stream is finite and not restartable; dropping it halts emission.
pub fn deliver(full_text: &str, language_code: &str) -> Pin<Box<dyn Stream<Item = String> + Send>> {
    let text = full_text.to_string();
    let delay = typing_speed(language_code);

    Box::pin(async_stream::stream! {
        let mut current = String::new();
        for ch in text.chars() {
            current.push(ch);
            yield current.clone();
            tokio::time::sleep(delay).await;
        }
    })
}

impl TranslationEngine {
    /// Translates `text` and delivers the result progressively.
    ///
    /// `on_chunk` receives each emitted prefix; `on_complete` is invoked
    /// exactly once with the final text. On translation failure no chunks
    /// are emitted and the original text is delivered instead; swallowing
    /// the error here keeps the rendering side uninterrupted.
    ///
    /// Engine shutdown cancels the delivery without a completion callback.
    pub fn translate_with_progressive_delivery<C, F>(
        &self,
        text: &str,
        target_language: &str,
        on_chunk: C,
        on_complete: F,
    ) -> tokio::task::JoinHandle<()>
    where
        C: Fn(String) + Send + 'static,
        F: FnOnce(String) + Send + 'static,
    {
        let engine = self.clone();
        let text = text.to_string();
        let target = target_language.to_string();

        tokio::spawn(async move {
            let final_text = match engine.translate(&text, &target).await {
                TranslationResult::Success {
                    text: translated, ..
                } => {
                    let mut chunks = deliver(&translated, &target);
                    loop {
                        tokio::select! {
                            biased;
                            () = engine.cancel_token().cancelled() => return,
                            chunk = chunks.next() => match chunk {
                                Some(prefix) => on_chunk(prefix),
                                None => break,
                            }
                        }
                    }
                    translated
                }
                TranslationResult::Error { reason } => {
                    warn!(%reason, "delivery falling back to original text");
                    text
                }
            };

            on_complete(final_text);
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::engine::testing::{ScriptedTranslator, test_engine};

    use super::*;

    #[test]
    fn test_typing_speed_classes() {
        assert_eq!(typing_speed("en"), Duration::from_millis(65));
        assert_eq!(typing_speed("es"), Duration::from_millis(65));
        assert_eq!(typing_speed("ja"), Duration::from_millis(110));
        assert_eq!(typing_speed("th"), Duration::from_millis(110));
        assert_eq!(typing_speed("ar"), Duration::from_millis(115));
        assert_eq!(typing_speed("he"), Duration::from_millis(115));
        // Unclassified codes fall back to the Latin default
        assert_eq!(typing_speed("fi"), Duration::from_millis(65));
        assert_eq!(typing_speed("xx"), Duration::from_millis(65));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_emits_each_prefix() {
        let chunks: Vec<String> = deliver("Hola", "es").collect().await;
        assert_eq!(chunks, vec!["H", "Ho", "Hol", "Hola"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_paces_per_character() {
        let start = tokio::time::Instant::now();
        let chunks: Vec<String> = deliver("Hola", "es").collect().await;

        assert_eq!(chunks.len(), 4);
        assert!(start.elapsed() >= Duration::from_millis(65) * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_handles_multibyte_characters() {
        let chunks: Vec<String> = deliver("こんにちは", "ja").collect().await;
        assert_eq!(chunks.len(), 5);
        assert_eq!(chunks[0], "こ");
        assert_eq!(chunks[4], "こんにちは");
    }

    #[tokio::test(start_paused = true)]
    async fn test_progressive_delivery_success() {
        let translator = Arc::new(ScriptedTranslator::new().with_response("Hello", "Hola"));
        let (engine, _cache, _dir) = test_engine(translator);

        let chunks = Arc::new(Mutex::new(Vec::new()));
        let completed = Arc::new(Mutex::new(None));

        let chunks_seen = chunks.clone();
        let completed_with = completed.clone();

        engine
            .translate_with_progressive_delivery(
                "Hello",
                "es",
                move |prefix| chunks_seen.lock().unwrap().push(prefix),
                move |text| *completed_with.lock().unwrap() = Some(text),
            )
            .await
            .unwrap();

        assert_eq!(
            *chunks.lock().unwrap(),
            vec!["H", "Ho", "Hol", "Hola"]
        );
        assert_eq!(*completed.lock().unwrap(), Some("Hola".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_progressive_delivery_failure_delivers_original() {
        let translator = Arc::new(ScriptedTranslator::new().failing_on("Hello"));
        let (engine, _cache, _dir) = test_engine(translator);

        let chunks = Arc::new(Mutex::new(Vec::new()));
        let completed = Arc::new(Mutex::new(None));

        let chunks_seen = chunks.clone();
        let completed_with = completed.clone();

        engine
            .translate_with_progressive_delivery(
                "Hello",
                "es",
                move |prefix| chunks_seen.lock().unwrap().push(prefix),
                move |text| *completed_with.lock().unwrap() = Some(text),
            )
            .await
            .unwrap();

        assert!(chunks.lock().unwrap().is_empty());
        assert_eq!(*completed.lock().unwrap(), Some("Hello".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_halts_delivery_without_completion() {
        let translator = Arc::new(ScriptedTranslator::new());
        let (engine, _cache, _dir) = test_engine(translator);

        let completed = Arc::new(Mutex::new(None));
        let completed_with = completed.clone();

        engine.shutdown();
        engine
            .translate_with_progressive_delivery(
                "Hello",
                "es",
                |_prefix| {},
                move |text| *completed_with.lock().unwrap() = Some(text),
            )
            .await
            .unwrap();

        assert_eq!(*completed.lock().unwrap(), None);
    }
}
