//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Catalog listing command handler.
pub mod models;

/// Translation command handler.
pub mod translate;
