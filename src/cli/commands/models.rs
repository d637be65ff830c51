//! Catalog listing command handler.

use anyhow::Result;

use super::translate::load_resolved_config;
use crate::config::ResolveOptions;
use crate::credential::{ProcessEnv, load_credential};
use crate::translation::{
    ModelCatalog, ModelEntry, ModelPreference, OpenRouterClient, Selection,
};
use crate::ui::{Spinner, Style};
use crate::status;

pub struct ModelsOptions {
    pub base_url: Option<String>,
    /// List every entry instead of only the vendor-prefixed ones.
    pub all: bool,
}

/// Prints the catalog and marks the model automatic selection would pick.
pub async fn print_models(options: ModelsOptions) -> Result<()> {
    let config = load_resolved_config(&ResolveOptions {
        base_url: options.base_url,
        model: None,
    })?;
    let credential = load_credential(
        &ProcessEnv,
        &config.api_key_env,
        config.api_key.as_deref(),
    )?;
    let client = OpenRouterClient::new(config.client_settings(), credential);

    status!("{}", Style::secondary(format!("Fetching {}/models", config.base_url)));
    let entries = {
        let _spinner = Spinner::unless_quiet("Loading catalog...");
        client.list_models().await?
    };

    for line in render_listing(&entries, &config.preference, options.all) {
        println!("{line}");
    }

    if let Some(model) = &config.model {
        println!();
        println!(
            "{} {}",
            Style::warning("Note:"),
            Style::hint(format!(
                "model is pinned to '{model}' in config; automatic selection is skipped"
            ))
        );
    }

    Ok(())
}

fn render_listing(
    entries: &[ModelEntry],
    preference: &ModelPreference,
    all: bool,
) -> Vec<String> {
    let selection = preference.select(entries);
    let shown: Vec<&ModelEntry> = entries
        .iter()
        .filter(|e| all || e.id.starts_with(preference.vendor_prefix.as_str()))
        .collect();

    let mut lines = Vec::with_capacity(shown.len() + 3);
    if all {
        lines.push(Style::header(format!("Models ({})", shown.len())));
    } else {
        lines.push(Style::header(format!(
            "Models matching '{}' ({} of {})",
            preference.vendor_prefix,
            shown.len(),
            entries.len()
        )));
    }

    for entry in shown {
        lines.push(render_entry(entry, selection));
    }

    if selection.is_none() {
        lines.push(String::new());
        lines.push(Style::warning(format!(
            "No model matches the selection policy for '{}'",
            preference.vendor_prefix
        )));
    }

    lines
}

fn render_entry(entry: &ModelEntry, selection: Option<Selection<'_>>) -> String {
    let mut line = format!("  {}", Style::value(&entry.id));
    if let Some(name) = entry
        .name
        .as_deref()
        .filter(|name| !name.is_empty() && *name != entry.id)
    {
        line.push_str(&format!(" {}", Style::secondary(format!("({name})"))));
    }
    if let Some(context) = entry.context_length {
        line.push_str(&format!(" {}", Style::secondary(format!("{context} ctx"))));
    }
    if let Some(selected) = selection.filter(|s| s.id == entry.id) {
        line.push(' ');
        line.push_str(&Style::selected_marker(selected.tier.label()));
    }
    line
}
