//! The translation engine: cache-first orchestration, rate-limited cache
//! population, and progressive typing delivery.

mod orchestrator;
mod populate;
mod typing;

pub use orchestrator::{TranslationEngine, TranslationResult};
pub use populate::{COMMON_MESSAGES, MESSAGE_DELAY, PopulationFailure, PopulationReport};
pub use typing::{deliver, typing_speed};
