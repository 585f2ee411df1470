//! Cache key model and the store contract.
//!
//! Entries are partitioned per flow context: the same source text can be
//! cached independently for API calls, notifications, and chat messages.

use anyhow::Result;
use serde_json::json;
use sha2::{Digest, Sha256};
use std::fmt;

/// Identifies which subsystem a cached translation serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowContext {
    Api,
    Notification,
    Message,
}

impl FlowContext {
    /// All tracked flow contexts, in reporting order.
    pub const ALL: [Self; 3] = [Self::Api, Self::Notification, Self::Message];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Notification => "notification",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FlowContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite cache key: source text, target language, and flow context.
///
/// The source text is trimmed and the language code lower-cased on
/// construction; equality is exact string match beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub source_text: String,
    pub target_language: String,
    pub flow: FlowContext,
}

impl CacheKey {
    pub fn new(source_text: &str, target_language: &str, flow: FlowContext) -> Self {
        Self {
            source_text: source_text.trim().to_string(),
            target_language: target_language.to_lowercase(),
            flow,
        }
    }

    /// Compute the storage key for this entry.
    pub fn digest(&self) -> String {
        let cache_input = json!({
            "source_text": self.source_text,
            "target_language": self.target_language,
            "flow": self.flow.as_str(),
        });

        let mut hasher = Sha256::new();
        hasher.update(cache_input.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Population status for one language, derived from the canonical corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStatusReport {
    pub language: String,
    /// Flow contexts with an entry for every corpus message.
    pub populated: Vec<FlowContext>,
    /// Flow contexts missing at least one corpus message.
    pub missing: Vec<FlowContext>,
}

impl CacheStatusReport {
    /// A language is fully populated iff every corpus message has an entry
    /// for every tracked flow context.
    pub fn is_fully_populated(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Contract for translation cache backends.
///
/// `lookup` is a pure read; `put` is an idempotent upsert with
/// last-write-wins semantics. Neither touches the network.
pub trait CacheStore: Send + Sync {
    /// Returns the cached translation for `key`, if present.
    fn lookup(&self, key: &CacheKey) -> Result<Option<String>>;

    /// Stores (or overwrites) the translation for `key`.
    fn put(&self, key: &CacheKey, translated_text: &str) -> Result<()>;

    /// Computes population status for `language` against a message corpus.
    fn status_report(&self, language: &str, corpus: &[&str]) -> Result<CacheStatusReport> {
        let mut populated = Vec::new();
        let mut missing = Vec::new();

        for flow in FlowContext::ALL {
            let mut complete = true;
            for message in corpus {
                let key = CacheKey::new(message, language, flow);
                if self.lookup(&key)?.is_none() {
                    complete = false;
                    break;
                }
            }

            if complete {
                populated.push(flow);
            } else {
                missing.push(flow);
            }
        }

        Ok(CacheStatusReport {
            language: language.to_lowercase(),
            populated,
            missing,
        })
    }
}

/// A store that caches nothing.
///
/// Every lookup is a miss and every put is dropped; used when caching is
/// disabled so the orchestrator always takes the live path.
pub struct NullCacheStore;

impl CacheStore for NullCacheStore {
    fn lookup(&self, _key: &CacheKey) -> Result<Option<String>> {
        Ok(None)
    }

    fn put(&self, _key: &CacheKey, _translated_text: &str) -> Result<()> {
        Ok(())
    }
}
