//! # lingo - Cache-first Translation Engine
//!
//! `lingo` is a translation engine and CLI built around a cache-first
//! lookup with a live-fetch fallback against OpenAI-compatible API
//! endpoints. Completed translations can be revealed progressively,
//! character by character, paced per language script.
//!
//! ## Features
//!
//! - **Cache-first translation**: instant responses for known text via a
//!   SQLite-backed cache partitioned per flow context
//! - **Predictive population**: rate-limited bulk pre-translation of a
//!   canonical phrase corpus per language
//! - **Progressive delivery**: cancellable typing-style reveal of results
//! - **Language detection**: with a safe fallback to English
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file
//! lingo --to es ./notes.txt
//!
//! # Translate from stdin with a typing-style reveal
//! echo "Hello world" | lingo --to es --typing
//!
//! # Pre-populate the cache for Spanish
//! lingo populate --to es
//!
//! # Inspect population status
//! lingo status --to es
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/lingo/config.toml`:
//!
//! ```toml
//! [engine]
//! endpoint = "http://localhost:11434"
//! model = "gemma3:12b"
//! to = "ja"
//! ```

/// Translation cache: key model, store contract, `SQLite` backend.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// The translation engine: orchestration, population, typing delivery.
pub mod engine;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Translator adapter contract, HTTP client, and language tables.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
