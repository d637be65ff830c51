use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Returns `true` if `err` comes from the user cancelling a prompt.
pub fn is_cancellation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<InquireError>()
        .is_some_and(is_prompt_cancelled)
}

/// Turns a prompt cancellation into a clean `Ok(())`.
///
/// If the user cancels the prompt (Ctrl+C or Escape), this prints a newline
/// to clean up the terminal instead of propagating the error.
pub fn handle_prompt_cancellation(result: Result<()>) -> Result<()> {
    match result {
        Err(e) if is_cancellation(&e) => {
            println!();
            Ok(())
        }
        other => other,
    }
}
