use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Duration;
use tracing::debug;

use super::adapter::{TranslateError, Translator};
use super::language::display_name;
use super::prompt::{DETECT_PROMPT, build_translate_prompt};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Translator adapter backed by an OpenAI-compatible chat-completions API.
pub struct HttpTranslator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl HttpTranslator {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint,
            model,
            api_key,
        }
    }

    /// Sends one chat completion and returns the assistant reply text.
    async fn complete(&self, system_prompt: &str, user_text: &str) -> Result<String, String> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(system_prompt),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(user_text),
                },
            ],
            stream: false,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| format!("Failed to connect to API endpoint {url}: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("API request failed with status {status}: {body}"));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse API response: {e}"))?;

        let content: String = completion
            .choices
            .into_iter()
            .filter_map(|c| c.message.content)
            .collect();

        if content.is_empty() {
            Err("API response contained no content".to_string())
        } else {
            Ok(content)
        }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate_text(
        &self,
        text: &str,
        from_language: &str,
        to_language: &str,
    ) -> Result<String, TranslateError> {
        let system_prompt =
            build_translate_prompt(&display_name(from_language), &display_name(to_language));

        debug!(from = from_language, to = to_language, "live translation");

        self.complete(&system_prompt, text)
            .await
            .map(|reply| reply.trim().to_string())
            .map_err(TranslateError::Translation)
    }

    async fn detect_language(&self, text: &str) -> Result<String, TranslateError> {
        let reply = self
            .complete(DETECT_PROMPT, text)
            .await
            .map_err(TranslateError::Detection)?;

        // Models occasionally pad the code with prose; take the first token
        let code = reply
            .split_whitespace()
            .next()
            .unwrap_or("")
            .trim_matches(|c: char| !c.is_ascii_alphabetic())
            .to_lowercase();

        if code.is_empty() || code.len() > 3 {
            return Err(TranslateError::Detection(format!(
                "unexpected detection reply: {reply}"
            )));
        }

        Ok(code)
    }
}
