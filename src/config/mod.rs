//! Configuration file management and resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, EngineSection, ResolveOptions, ResolvedConfig, resolve_config,
};
