use log::{debug, trace};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;

use super::catalog::{CatalogResponse, ModelEntry};
use super::prompt::Message;
use super::reply::{CompletionReply, parse_completion_body};
use crate::credential::Credential;
use crate::error::TranslateError;

/// Body of `POST {base}/chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub messages: [Message<'a>; 2],
}

/// Source of the model catalog.
pub trait ModelCatalog {
    fn list_models(
        &self,
    ) -> impl Future<Output = Result<Vec<ModelEntry>, TranslateError>> + Send;
}

/// Chat completion endpoint.
///
/// Transport failures and timeouts are errors; any HTTP response is a
/// [`CompletionReply`].
pub trait ChatCompleter {
    fn complete(
        &self,
        request: &ChatRequest<'_>,
    ) -> impl Future<Output = Result<CompletionReply, TranslateError>> + Send;
}

/// Connection settings for an OpenAI-compatible service.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// API root, e.g. `https://openrouter.ai/api/v1`, without trailing slash.
    pub base_url: String,
    pub referer: String,
    pub title: String,
    pub catalog_timeout: Duration,
    pub completion_timeout: Duration,
}

/// HTTP client for OpenRouter-style `/models` and `/chat/completions`.
pub struct OpenRouterClient {
    client: Client,
    settings: ClientSettings,
    credential: Credential,
}

impl OpenRouterClient {
    pub fn new(settings: ClientSettings, credential: Credential) -> Self {
        Self {
            client: Client::new(),
            settings,
            credential,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.settings.base_url.trim_end_matches('/'))
    }

    fn with_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(self.credential.expose())
            .header("HTTP-Referer", &self.settings.referer)
            .header("X-Title", &self.settings.title)
            .header(
                reqwest::header::USER_AGENT,
                concat!("lct/", env!("CARGO_PKG_VERSION")),
            )
    }
}

fn describe_transport_error(err: &reqwest::Error, url: &str, timeout: Duration) -> String {
    if err.is_timeout() {
        format!("request to {url} timed out after {}s", timeout.as_secs())
    } else {
        format!("failed to connect to {url}: {err}")
    }
}

impl ModelCatalog for OpenRouterClient {
    async fn list_models(&self) -> Result<Vec<ModelEntry>, TranslateError> {
        let url = self.endpoint("models");
        let timeout = self.settings.catalog_timeout;
        debug!("GET {url}");

        let response = self
            .with_headers(self.client.get(&url))
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                TranslateError::CatalogFetch(describe_transport_error(&e, &url, timeout))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::CatalogFetch(format!("HTTP {status}: {body}")));
        }

        let catalog: CatalogResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::CatalogFetch(format!("unreadable /models body: {e}")))?;

        debug!("catalog lists {} models", catalog.data.len());
        Ok(catalog.data)
    }
}

impl ChatCompleter for OpenRouterClient {
    async fn complete(&self, request: &ChatRequest<'_>) -> Result<CompletionReply, TranslateError> {
        let url = self.endpoint("chat/completions");
        let timeout = self.settings.completion_timeout;
        debug!(
            "POST {url} model={} temperature={}",
            request.model, request.temperature
        );

        let response = self
            .with_headers(self.client.post(&url))
            .json(request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                TranslateError::CompletionRequest(describe_transport_error(&e, &url, timeout))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            TranslateError::CompletionRequest(describe_transport_error(&e, &url, timeout))
        })?;
        trace!("completion response {status}: {body}");

        if status == StatusCode::OK {
            parse_completion_body(&body).map(CompletionReply::Content)
        } else {
            debug!("completion failed with status {status}");
            Ok(CompletionReply::Failed {
                status: status.as_u16(),
                body,
            })
        }
    }
}
