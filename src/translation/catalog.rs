//! Model catalog entries and the preference policy that picks one of them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Exact identifiers tried first, most preferred first.
pub const PREFERRED_MODELS: &[&str] = &[
    "deepseek/deepseek-chat",
    "deepseek/deepseek-chat:free",
    "deepseek/deepseek-v3",
    "deepseek/deepseek-v3:free",
];

/// Vendor namespace used by the fallback tiers.
pub const VENDOR_PREFIX: &str = "deepseek/";

/// Substring marking a chat-tuned variant.
pub const CAPABILITY_HINT: &str = "chat";

/// One entry of the `/models` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModelEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub context_length: Option<u64>,
}

impl ModelEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Body of `GET {base}/models`.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Vec<ModelEntry>,
}

/// Which stage of the policy produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Listed in the preferred identifiers.
    Preferred,
    /// Vendor prefix plus capability hint.
    VendorCapability,
    /// Vendor prefix only.
    Vendor,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Preferred => "preferred",
            Self::VendorCapability => "vendor + capability",
            Self::Vendor => "vendor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub id: &'a str,
    pub tier: Tier,
}

/// Ordered preference policy.
///
/// Corresponds to the `[lct.selection]` section of config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPreference {
    /// Exact identifiers, most preferred first.
    pub preferred: Vec<String>,
    pub vendor_prefix: String,
    pub capability_hint: String,
}

impl Default for ModelPreference {
    fn default() -> Self {
        Self {
            preferred: PREFERRED_MODELS.iter().map(|s| (*s).to_string()).collect(),
            vendor_prefix: VENDOR_PREFIX.to_string(),
            capability_hint: CAPABILITY_HINT.to_string(),
        }
    }
}

impl ModelPreference {
    /// Picks a model from `entries`, first matching tier wins.
    ///
    /// 1. the first preferred identifier present in the catalog
    /// 2. the first entry (catalog order) with the vendor prefix that
    ///    contains the capability hint
    /// 3. the first entry with the vendor prefix
    pub fn select<'a>(&self, entries: &'a [ModelEntry]) -> Option<Selection<'a>> {
        let available: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();

        let preferred = self.preferred.iter().find_map(|wanted| {
            available.get(wanted.as_str()).map(|&id| Selection {
                id,
                tier: Tier::Preferred,
            })
        });
        if preferred.is_some() {
            return preferred;
        }

        let vendor_ids: Vec<&'a str> = entries
            .iter()
            .map(|e| e.id.as_str())
            .filter(|id| id.starts_with(self.vendor_prefix.as_str()))
            .collect();

        vendor_ids
            .iter()
            .find(|id| id.contains(self.capability_hint.as_str()))
            .map(|&id| Selection {
                id,
                tier: Tier::VendorCapability,
            })
            .or_else(|| {
                vendor_ids.first().map(|&id| Selection {
                    id,
                    tier: Tier::Vendor,
                })
            })
    }
}
