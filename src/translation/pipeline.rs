//! One translation round trip with injectable collaborators.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use super::catalog::ModelPreference;
use super::classify::classify;
use super::client::{ChatCompleter, ChatRequest, ModelCatalog};
use super::prompt::build_messages_for;
use super::reply::{CompletionReply, present};
use crate::error::TranslateError;
use crate::input::InputSource;
use crate::ui::Spinner;

/// Sampling temperature used unless configured otherwise.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Per-run options that do not come from collaborators.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Skips catalog resolution when set.
    pub pinned_model: Option<String>,
    pub preference: ModelPreference,
    pub temperature: f32,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            pinned_model: None,
            preference: ModelPreference::default(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Resolves a model from the catalog using `preference`.
pub async fn resolve_model(
    catalog: &impl ModelCatalog,
    preference: &ModelPreference,
) -> Result<String, TranslateError> {
    let entries = catalog.list_models().await?;
    let selection =
        preference
            .select(&entries)
            .ok_or_else(|| TranslateError::NoModelAvailable {
                vendor_prefix: preference.vendor_prefix.clone(),
            })?;

    info!(
        "selected model {} ({} tier)",
        selection.id,
        selection.tier.label()
    );
    Ok(selection.id.to_string())
}

/// Reads the input, resolves a model, requests a completion and prints the
/// result to `out`.
///
/// Input is read and validated before any network call. A non-200
/// completion is printed as a diagnostic and returned as
/// [`CompletionReply::Failed`], not as an error.
pub async fn run_pipeline<A, I, W>(
    api: &A,
    input: &mut I,
    out: &mut W,
    options: &PipelineOptions,
) -> Result<CompletionReply>
where
    A: ModelCatalog + ChatCompleter,
    I: InputSource,
    W: Write,
{
    let raw = input.read_input()?;
    let text = raw.trim();
    if text.is_empty() {
        return Err(TranslateError::EmptyInput.into());
    }

    let mode = classify(text);
    debug!("input classified as {}", mode.label());

    let model = match &options.pinned_model {
        Some(model) => {
            info!("using pinned model {model}");
            model.clone()
        }
        None => {
            let spinner = Spinner::unless_quiet("Choosing model...");
            let model = resolve_model(api, &options.preference).await?;
            drop(spinner);
            model
        }
    };

    let request = ChatRequest {
        model: &model,
        temperature: options.temperature,
        messages: build_messages_for(mode, text),
    };

    let spinner = Spinner::unless_quiet("Translating...");
    let reply = api.complete(&request).await?;
    drop(spinner);

    present(&reply, out).context("Failed to write output")?;
    Ok(reply)
}
