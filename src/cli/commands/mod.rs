//! Subcommand implementations.

/// Language detection command handler.
pub mod detect;

/// Cache population command handler.
pub mod populate;

/// Cache status command handler.
pub mod status;

/// Translation command handler.
pub mod translate;

use anyhow::Result;
use std::sync::Arc;

use crate::cache::{CacheStore, NullCacheStore, SqliteCacheStore};
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::engine::TranslationEngine;
use crate::paths;
use crate::translation::HttpTranslator;

/// Merges CLI overrides with the config file.
fn load_config(options: ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new();
    let file_config = manager.load().unwrap_or_default();
    resolve_config(&options, &file_config)
}

/// Builds an engine from resolved configuration.
///
/// With `use_cache` disabled the engine runs against a store that never
/// hits, forcing the live path on every request.
fn build_engine(config: &ResolvedConfig, use_cache: bool) -> Result<TranslationEngine> {
    let translator = Arc::new(HttpTranslator::new(
        config.endpoint.clone(),
        config.model.clone(),
        config.api_key.clone(),
    ));

    let cache: Arc<dyn CacheStore> = if use_cache {
        Arc::new(SqliteCacheStore::open(
            paths::cache_dir().join("translations.db"),
        )?)
    } else {
        Arc::new(NullCacheStore)
    };

    Ok(TranslationEngine::new(translator, cache))
}
