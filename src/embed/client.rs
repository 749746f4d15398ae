//! HTTP embedding client for hosted embedding APIs

use crate::embed::{EmbedError, EmbedResult, Embedding, EmbeddingProvider};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wire shape of the embedding endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbeddingApi {
    /// OpenAI-compatible `/embeddings` endpoint (batched request body)
    OpenAi,
    /// Ollama `/api/embeddings` endpoint (one prompt per request)
    Ollama,
}

/// Configuration for [`HttpEmbeddingClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedConfig {
    pub api: EmbeddingApi,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    /// Output dimensionality of the configured model.
    pub dimensions: usize,
}

/// Client for generating embeddings over HTTP.
///
/// The request carries a caller-imposed timeout; an unreachable provider
/// surfaces as [`EmbedError::NetworkError`] and the caller's write must not
/// proceed.
pub struct HttpEmbeddingClient {
    client: Client,
    api: EmbeddingApi,
    model: String,
    api_key: Option<String>,
    base_url: String,
    dimensions: usize,
}

impl HttpEmbeddingClient {
    /// Create a new embedding client from configuration.
    pub fn new(config: &EmbedConfig) -> EmbedResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| EmbedError::ConfigError(e.to_string()))?;

        let base_url = config.base_url.clone().unwrap_or_else(|| match config.api {
            EmbeddingApi::OpenAi => "https://api.openai.com/v1".to_string(),
            EmbeddingApi::Ollama => "http://localhost:11434".to_string(),
        });

        Ok(Self {
            client,
            api: config.api,
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            base_url,
            dimensions: config.dimensions,
        })
    }

    async fn openai_embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        #[derive(Serialize)]
        struct OpenAiRequest<'a> {
            input: &'a str,
            model: &'a str,
        }

        #[derive(Deserialize)]
        struct OpenAiResponse {
            data: Vec<OpenAiData>,
        }

        #[derive(Deserialize)]
        struct OpenAiData {
            embedding: Vec<f32>,
        }

        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| EmbedError::ConfigError("OpenAI requires an API key".to_string()))?;

        let url = format!("{}/embeddings", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&OpenAiRequest {
                input: text,
                model: &self.model,
            })
            .send()
            .await
            .map_err(|e| EmbedError::NetworkError(e.to_string()))?;

        if !resp.status().is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(EmbedError::ApiError(format!(
                "embedding endpoint returned error: {error_text}"
            )));
        }

        let result: OpenAiResponse = resp
            .json()
            .await
            .map_err(|e| EmbedError::SerializationError(e.to_string()))?;
        result
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbedError::ApiError("empty embedding response".to_string()))
    }

    async fn ollama_embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        #[derive(Serialize)]
        struct OllamaRequest<'a> {
            model: &'a str,
            prompt: &'a str,
        }

        #[derive(Deserialize)]
        struct OllamaResponse {
            embedding: Vec<f32>,
        }

        let url = format!("{}/api/embeddings", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&OllamaRequest {
                model: &self.model,
                prompt: text,
            })
            .send()
            .await
            .map_err(|e| EmbedError::NetworkError(e.to_string()))?;

        if !resp.status().is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(EmbedError::ApiError(format!(
                "embedding endpoint returned error: {error_text}"
            )));
        }

        let result: OllamaResponse = resp
            .json()
            .await
            .map_err(|e| EmbedError::SerializationError(e.to_string()))?;
        Ok(result.embedding)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HttpEmbeddingClient {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    async fn embed(&self, text: &str) -> EmbedResult<Embedding> {
        let values = match self.api {
            EmbeddingApi::OpenAi => self.openai_embed(text).await?,
            EmbeddingApi::Ollama => self.ollama_embed(text).await?,
        };
        // A model returning the wrong width is a provider fault, caught here
        // rather than at first use of the vector.
        Embedding::new(values, self.dimensions)
    }
}
