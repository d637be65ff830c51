//! Fatal error taxonomy for a translation run.
//!
//! Every variant aborts the run. A non-200 completion response is not an
//! error: it is rendered as a diagnostic by [`crate::translation::present`].

use thiserror::Error;

/// Errors that stop a translation run.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(
        "Missing {env_var} env var\n\n\
         Set it in your shell:\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or set api_key in ~/.config/lct/config.toml"
    )]
    MissingCredential { env_var: String },

    #[error("Failed to fetch model catalog: {0}")]
    CatalogFetch(String),

    #[error("No model starting with '{vendor_prefix}' found in the /models list")]
    NoModelAvailable { vendor_prefix: String },

    #[error("Input is empty")]
    EmptyInput,

    #[error("Completion request failed: {0}")]
    CompletionRequest(String),

    #[error("Invalid completion reply: {0}")]
    InvalidReply(String),
}

impl TranslateError {
    /// Process exit code (sysexits) for this error.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::MissingCredential { .. } => exitcode::CONFIG,
            Self::EmptyInput => exitcode::DATAERR,
            Self::CatalogFetch(_) | Self::NoModelAvailable { .. } | Self::CompletionRequest(_) => {
                exitcode::UNAVAILABLE
            }
            Self::InvalidReply(_) => exitcode::PROTOCOL,
        }
    }
}

/// Maps any error from a command to a process exit code.
///
/// Errors outside the [`TranslateError`] taxonomy (config parsing, I/O) map
/// to `SOFTWARE`.
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    err.downcast_ref::<TranslateError>()
        .map_or(exitcode::SOFTWARE, TranslateError::exit_code)
}
