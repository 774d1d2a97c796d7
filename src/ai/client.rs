use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::utils::rate_limiter::RateLimiter;

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "meta-llama/llama-3.1-8b-instruct:free";

/// Errors from the text-generation endpoint. Callers get no partial output;
/// a failed call produced nothing usable.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Generation endpoint returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Could not read completion from response: {0}")]
    Parse(String),
}

/// The generation tasks the app performs, each with its own token budget and
/// temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationTask {
    BlogContent,
    TitleSuggestions,
    Excerpt,
    NewsHeadlines,
    NewsDetail,
    NewsAnswer,
}

impl GenerationTask {
    pub fn max_tokens(&self) -> u32 {
        match self {
            GenerationTask::BlogContent => 2000,
            GenerationTask::TitleSuggestions => 300,
            GenerationTask::Excerpt => 200,
            GenerationTask::NewsHeadlines => 1000,
            GenerationTask::NewsDetail => 2000,
            GenerationTask::NewsAnswer => 500,
        }
    }

    pub fn temperature(&self) -> f32 {
        match self {
            GenerationTask::BlogContent => 0.7,
            GenerationTask::TitleSuggestions => 0.8,
            GenerationTask::Excerpt => 0.6,
            GenerationTask::NewsHeadlines => 0.8,
            GenerationTask::NewsDetail => 0.7,
            GenerationTask::NewsAnswer => 0.3,
        }
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Thin client for the hosted chat-completion endpoint. One request per
/// invocation, no retries.
#[derive(Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    limiter: RateLimiter,
}

impl GenerationClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        GenerationClient {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            // The free tier tolerates little concurrency; keep requests
            // serialized with a small gap between them.
            limiter: RateLimiter::new(2, 500),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send one prompt and return the raw completion text. The endpoint
    /// guarantees no output schema; parsing is the caller's problem.
    pub async fn complete(
        &self,
        task: GenerationTask,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let _permit = self.limiter.acquire().await;
        debug!(?task, prompt_chars = prompt.len(), "sending generation request");

        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": task.max_tokens(),
            "temperature": task.temperature(),
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, message });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Parse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::Parse("response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_budgets_match_the_endpoint_contract() {
        assert_eq!(GenerationTask::BlogContent.max_tokens(), 2000);
        assert_eq!(GenerationTask::TitleSuggestions.max_tokens(), 300);
        assert_eq!(GenerationTask::Excerpt.max_tokens(), 200);
        assert_eq!(GenerationTask::NewsHeadlines.max_tokens(), 1000);
        assert_eq!(GenerationTask::NewsDetail.max_tokens(), 2000);
        assert_eq!(GenerationTask::NewsAnswer.max_tokens(), 500);

        assert_eq!(GenerationTask::Excerpt.temperature(), 0.6);
        assert_eq!(GenerationTask::NewsAnswer.temperature(), 0.3);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let client = GenerationClient::new(reqwest::Client::new(), "test-key".to_string())
            .with_base_url("http://127.0.0.1:9");
        let err = client
            .complete(GenerationTask::Excerpt, "a prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Network(_)));
    }
}
