use serde::Deserialize;
use std::io::{self, Write};

use crate::error::TranslateError;

/// Banner printed before the status and body of a failed completion.
pub const FAILURE_BANNER: &str = "Failed to fetch data from API.";

/// Outcome of a completion request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionReply {
    /// `choices[0].message.content` of a 200 response.
    Content(String),
    /// Any non-200 response, body kept verbatim.
    Failed { status: u16, body: String },
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Extracts the reply text from a successful chat completion body.
pub fn parse_completion_body(body: &str) -> Result<String, TranslateError> {
    let trimmed = body.trim_start();
    if trimmed.is_empty() {
        return Err(TranslateError::InvalidReply("empty response body".to_string()));
    }
    if !trimmed.starts_with('{') {
        return Err(TranslateError::InvalidReply(format!(
            "response is not JSON (check that the base URL points at the API root, \
             e.g. https://openrouter.ai/api/v1):\n{}",
            snippet(body)
        )));
    }

    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::InvalidReply(format!("malformed JSON: {e}")))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| TranslateError::InvalidReply("response has no choices".to_string()))
}

fn snippet(body: &str) -> String {
    const MAX_CHARS: usize = 300;
    if body.chars().count() > MAX_CHARS {
        let head: String = body.chars().take(MAX_CHARS).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}

/// Prints the reply content as received, or the failure diagnostic.
pub fn present(reply: &CompletionReply, out: &mut impl Write) -> io::Result<()> {
    match reply {
        CompletionReply::Content(content) => writeln!(out, "{content}")?,
        CompletionReply::Failed { status, body } => {
            writeln!(out, "{FAILURE_BANNER}")?;
            writeln!(out, "Status Code: {status}")?;
            writeln!(out, "Response: {body}")?;
        }
    }
    out.flush()
}
