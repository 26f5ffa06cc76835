//! Configuration module for formpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FORMPACK_*)
//! 3. Project config (./formpack.toml, or --config)
//! 4. User config (~/.config/formpack/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_config, ConfigOrigin, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{Config, OutputConfig, SourceConfig, WatchConfig};
