use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatCompletionProvider;
use crate::domain::{CompletionOptions, DomainError, Message};

const DEFAULT_API_VERSION: &str = "2024-02-15-preview";
const DEFAULT_DEPLOYMENT: &str = "gpt-4";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Azure OpenAI chat completions request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for the Azure OpenAI chat completions API.
///
/// Implements [`ChatCompletionProvider`] so the use case stays decoupled from
/// transport and serialization details. The handle holds the endpoint, key,
/// and API version resolved once at construction; the deployment (model)
/// name travels in [`CompletionOptions`] per call, so the handle itself is
/// immutable and safe to share across concurrent requests.
///
/// Configuration via environment variables:
///
/// ```text
/// AZURE_OPENAI_ENDPOINT=https://my-resource.openai.azure.com   (required)
/// AZURE_OPENAI_API_KEY=...                                     (required)
/// AZURE_OPENAI_API_VERSION=2024-02-15-preview                  (optional)
/// AZURE_OPENAI_MODEL_NAME=gpt-4                                (optional)
/// ```
#[derive(Debug)]
pub struct AzureOpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    /// Resource endpoint with any trailing slash removed.
    endpoint: String,
    api_version: String,
}

impl AzureOpenAiProvider {
    /// Create a provider with explicit connection parameters.
    ///
    /// Fails with [`DomainError::Configuration`] when the endpoint or key is
    /// empty. Initialization failure is fatal: without a handle no completion
    /// call can be attempted.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let endpoint: String = endpoint.into();
        let api_key: String = api_key.into();

        if endpoint.trim().is_empty() {
            return Err(DomainError::configuration(
                "Azure OpenAI endpoint is missing",
            ));
        }
        if api_key.trim().is_empty() {
            return Err(DomainError::configuration(
                "Azure OpenAI API key is missing",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_version: api_version.into(),
        })
    }

    /// Construct from environment variables:
    ///
    /// | Variable                   | Default               | Purpose           |
    /// |----------------------------|-----------------------|-------------------|
    /// | `AZURE_OPENAI_ENDPOINT`    | — (required)          | Resource URL      |
    /// | `AZURE_OPENAI_API_KEY`     | — (required)          | API key           |
    /// | `AZURE_OPENAI_API_VERSION` | `2024-02-15-preview`  | REST API version  |
    pub fn from_env() -> Result<Self, DomainError> {
        let endpoint = std::env::var("AZURE_OPENAI_ENDPOINT").map_err(|_| {
            DomainError::configuration("AZURE_OPENAI_ENDPOINT environment variable is not set")
        })?;
        let api_key = std::env::var("AZURE_OPENAI_API_KEY").map_err(|_| {
            DomainError::configuration("AZURE_OPENAI_API_KEY environment variable is not set")
        })?;
        let api_version = std::env::var("AZURE_OPENAI_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        Self::new(endpoint, api_key, api_version)
    }

    /// Deployment (model) name from `AZURE_OPENAI_MODEL_NAME`, defaulting to
    /// `gpt-4` when unset.
    pub fn deployment_from_env() -> String {
        std::env::var("AZURE_OPENAI_MODEL_NAME")
            .unwrap_or_else(|_| DEFAULT_DEPLOYMENT.to_string())
    }

    fn completions_url(&self, deployment: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, deployment, self.api_version
        )
    }

    /// Extract `error.message` from an Azure OpenAI failure body, if present.
    ///
    /// Failure responses carry `{"error": {"code": …, "message": …}}`; the
    /// message is what we log and surface — not the full payload.
    fn error_detail(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("error")?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }
}

#[async_trait]
impl ChatCompletionProvider for AzureOpenAiProvider {
    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, DomainError> {
        let request = ApiRequest {
            messages: messages
                .iter()
                .map(|m| ApiMessage {
                    role: m.role().as_str(),
                    content: m.content(),
                })
                .collect(),
            temperature: options.temperature(),
            max_tokens: options.max_tokens(),
            top_p: options.top_p(),
        };

        let url = self.completions_url(options.model());
        debug!(
            "AzureOpenAiProvider: POST {} messages to deployment {}",
            messages.len(),
            options.model()
        );

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = Self::error_detail(&body).unwrap_or_else(|| "Unknown error".to_string());
            warn!("AzureOpenAiProvider: API returned {status}: {detail}");
            return Err(DomainError::provider(format!(
                "API returned {status}: {detail}"
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::provider(format!("Failed to parse response: {e}")))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::provider("Response contained no choices"))
    }
}
