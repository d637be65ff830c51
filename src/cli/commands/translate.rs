use anyhow::Result;
use log::debug;
use std::io;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::credential::{ProcessEnv, load_credential};
use crate::input::{GivenText, InputSource, StdinInput};
use crate::translation::{CompletionReply, OpenRouterClient, run_pipeline};
use crate::ui::handle_prompt_cancellation;

pub struct TranslateOptions {
    /// Text from the command line; stdin is used when absent.
    pub text: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_resolved_config(&ResolveOptions {
        base_url: options.base_url,
        model: options.model,
    })?;

    // The credential is checked before touching stdin or the network.
    let credential = load_credential(
        &ProcessEnv,
        &config.api_key_env,
        config.api_key.as_deref(),
    )?;
    let client = OpenRouterClient::new(config.client_settings(), credential);

    let mut input: Box<dyn InputSource> = match options.text {
        Some(text) => Box::new(GivenText(text)),
        None => Box::new(StdinInput),
    };

    let result = run_pipeline(
        &client,
        &mut input,
        &mut io::stdout(),
        &config.pipeline_options(),
    )
    .await
    .map(|reply| {
        if let CompletionReply::Failed { status, .. } = reply {
            debug!("completion endpoint answered with status {status}");
        }
    });

    handle_prompt_cancellation(result)
}

pub(crate) fn load_resolved_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    resolve_config(options, &file_config)
}
