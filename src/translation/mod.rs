mod catalog;
mod classify;
mod client;
mod pipeline;
mod prompt;
mod reply;

pub use catalog::{
    CAPABILITY_HINT, CatalogResponse, ModelEntry, ModelPreference, PREFERRED_MODELS, Selection,
    Tier, VENDOR_PREFIX,
};
pub use classify::{Mode, classify, is_single_english_word};
pub use client::{ChatCompleter, ChatRequest, ClientSettings, ModelCatalog, OpenRouterClient};
pub use pipeline::{DEFAULT_TEMPERATURE, PipelineOptions, resolve_model, run_pipeline};
pub use prompt::{
    DICTIONARY_PROMPT, Message, Role, TRANSLATION_PROMPT, build_messages, build_messages_for,
    system_prompt,
};
pub use reply::{CompletionReply, FAILURE_BANNER, parse_completion_body, present};
