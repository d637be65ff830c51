//! Configuration file management and resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_BASE_URL, DEFAULT_CATALOG_TIMEOUT_SECS,
    DEFAULT_COMPLETION_TIMEOUT_SECS, DEFAULT_REFERER, DEFAULT_TITLE, LctConfig, ResolveOptions,
    ResolvedConfig, normalize_base_url, resolve_config,
};
