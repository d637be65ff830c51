//! # lct - English-to-Chinese Dictionary & Translation CLI
//!
//! `lct` reads English text, picks a chat model from an OpenAI-compatible
//! catalog (OpenRouter by default), and prints either a dictionary-style
//! Chinese gloss (single words) or a Chinese translation (anything else).
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENROUTER_API_KEY="sk-or-..."
//!
//! # Look up a word
//! lct serendipity
//!
//! # Translate a sentence from stdin
//! echo "The quick brown fox jumps over the lazy dog." | lct
//!
//! # Show which model would be selected
//! lct models
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/lct/config.toml`:
//!
//! ```toml
//! [lct]
//! base_url = "https://openrouter.ai/api/v1"
//! api_key_env = "OPENROUTER_API_KEY"
//! temperature = 0.2
//!
//! [lct.selection]
//! vendor_prefix = "deepseek/"
//! capability_hint = "chat"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// API key loading.
pub mod credential;

/// Fatal error taxonomy and exit codes.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from arguments, the terminal and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logger;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Model selection, prompting and the completion round trip.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
