//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{CustomType, Text};

use crate::config::{
    ConfigManager, DEFAULT_BASE_URL, LctConfig, ResolveOptions, normalize_base_url,
    resolve_config,
};
use crate::credential::DEFAULT_API_KEY_ENV;
use crate::translation::DEFAULT_TEMPERATURE;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the effective configuration. Otherwise lets the user
/// interactively set the base URL, API key variable, model and temperature.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_configuration();
    }
    handle_prompt_cancellation(run_configure_inner())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_settings(&config.lct);

    let base_url = prompt_base_url(config.lct.base_url.as_deref())?;
    let api_key_env = prompt_api_key_env(config.lct.api_key_env.as_deref())?;
    let model = prompt_model(config.lct.model.as_deref())?;
    let temperature = prompt_temperature(config.lct.temperature)?;

    config.lct = LctConfig {
        base_url: Some(base_url),
        api_key_env: Some(api_key_env),
        model,
        temperature: Some(temperature),
        ..config.lct
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn show_configuration() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;
    let resolved = resolve_config(&ResolveOptions::default(), &config)?;

    println!(
        "{} {}",
        Style::header("Configuration"),
        Style::secondary(format!("({})", manager.config_path().display()))
    );
    print_row("base_url", &resolved.base_url);
    print_row("api_key_env", &resolved.api_key_env);
    let key_state = if std::env::var(&resolved.api_key_env).is_ok_and(|k| !k.trim().is_empty()) {
        "(set in environment)"
    } else if resolved.api_key.is_some() {
        "(set in config)"
    } else {
        "(not set)"
    };
    print_row("api_key", key_state);
    print_row(
        "model",
        resolved.model.as_deref().unwrap_or("(auto from catalog)"),
    );
    print_row("temperature", &resolved.temperature.to_string());
    print_row(
        "timeouts",
        &format!(
            "catalog {}s, completion {}s",
            resolved.catalog_timeout.as_secs(),
            resolved.completion_timeout.as_secs()
        ),
    );
    print_row("referer", &resolved.referer);
    print_row("title", &resolved.title);

    println!();
    println!("{}", Style::header("Model selection"));
    print_row("preferred", &resolved.preference.preferred.join(", "));
    print_row("vendor_prefix", &resolved.preference.vendor_prefix);
    print_row("capability_hint", &resolved.preference.capability_hint);

    Ok(())
}

fn print_row(label: &str, value: &str) {
    println!("  {:<16} {}", Style::label(label), Style::value(value));
}

fn print_current_settings(config: &LctConfig) {
    let show =
        |value: Option<&str>| value.map_or_else(|| Style::secondary("(not set)"), Style::value);

    println!("{}", Style::header("Current settings"));
    println!("  {}     {}", Style::label("base_url"), show(config.base_url.as_deref()));
    println!("  {}  {}", Style::label("api_key_env"), show(config.api_key_env.as_deref()));
    println!("  {}        {}", Style::label("model"), show(config.model.as_deref()));
    println!(
        "  {}  {}",
        Style::label("temperature"),
        show(config.temperature.map(|t| t.to_string()).as_deref())
    );
    println!();
}

fn prompt_base_url(current: Option<&str>) -> Result<String> {
    let input = Text::new("API base URL:")
        .with_default(current.unwrap_or(DEFAULT_BASE_URL))
        .with_help_message("OpenAI-compatible API root, e.g. https://openrouter.ai/api/v1")
        .prompt()?;

    normalize_base_url(&input)
}

fn prompt_api_key_env(current: Option<&str>) -> Result<String> {
    let input = Text::new("API key environment variable:")
        .with_default(current.unwrap_or(DEFAULT_API_KEY_ENV))
        .prompt()?;

    let name = input.trim();
    if name.is_empty() {
        bail!("Environment variable name cannot be empty");
    }
    Ok(name.to_string())
}

fn prompt_model(current: Option<&str>) -> Result<Option<String>> {
    let mut prompt = Text::new("Model:").with_help_message(
        "Clear the field (or enter 'auto') to pick a model from the catalog automatically",
    );

    // Pre-filled rather than a default, so clearing the field unpins the model.
    if let Some(model) = current {
        prompt = prompt.with_initial_value(model);
    }

    Ok(pinned_model_from_answer(&prompt.prompt()?))
}

/// An empty answer or `auto` means automatic selection.
fn pinned_model_from_answer(answer: &str) -> Option<String> {
    let model = answer.trim();
    (!model.is_empty() && !model.eq_ignore_ascii_case("auto")).then(|| model.to_string())
}

fn prompt_temperature(current: Option<f32>) -> Result<f32> {
    let temperature = CustomType::<f32>::new("Temperature:")
        .with_default(current.unwrap_or(DEFAULT_TEMPERATURE))
        .with_help_message("Between 0 and 2; lower is more deterministic")
        .with_error_message("Please enter a number")
        .prompt()?;

    if !(0.0..=2.0).contains(&temperature) {
        bail!("Temperature must be between 0 and 2");
    }
    Ok(temperature)
}
