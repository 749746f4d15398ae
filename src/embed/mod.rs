//! Embedding vectors and embedding providers
//!
//! The matching engine never trains or runs a model itself; it consumes an
//! [`EmbeddingProvider`] that maps text to a fixed-dimension vector. Two
//! providers ship with the crate: an HTTP client for hosted embedding APIs
//! ([`client::HttpEmbeddingClient`]) and a deterministic local hasher
//! ([`hashing::HashingEmbedder`]) for offline use and tests.

pub mod client;
pub mod hashing;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Embedding errors
#[derive(Error, Debug)]
pub enum EmbedError {
    /// API error from the embedding provider
    #[error("embedding API error: {0}")]
    ApiError(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Network error
    #[error("network error: {0}")]
    NetworkError(String),

    /// Serialization/Deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Vector length does not match the provider's dimensionality
    #[error("embedding dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Persisted embedding string could not be decoded
    #[error("malformed embedding value: {0}")]
    ParseError(String),
}

pub type EmbedResult<T> = Result<T, EmbedError>;

/// A fixed-dimension embedding vector.
///
/// Dimensionality is checked at construction so that a wrong-length vector
/// fails at the write boundary, never inside a similarity computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    /// Construct an embedding, checking it against the expected dimensionality.
    pub fn new(values: Vec<f32>, dimensions: usize) -> EmbedResult<Self> {
        if values.len() != dimensions {
            return Err(EmbedError::DimensionMismatch {
                expected: dimensions,
                got: values.len(),
            });
        }
        Ok(Embedding(values))
    }

    /// Decode the persisted comma-separated float encoding.
    pub fn parse(encoded: &str, dimensions: usize) -> EmbedResult<Self> {
        let values = encoded
            .split(',')
            .map(|field| {
                field
                    .trim()
                    .parse::<f32>()
                    .map_err(|e| EmbedError::ParseError(format!("{field:?}: {e}")))
            })
            .collect::<EmbedResult<Vec<f32>>>()?;
        Embedding::new(values, dimensions)
    }

    /// Encode as a comma-separated float string, the persisted record shape
    /// for stores without a first-class vector type.
    pub fn to_csv(&self) -> String {
        self.0
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Cosine similarity with another embedding.
    ///
    /// Returns 0.0 when either vector has zero magnitude (undefined case,
    /// must not crash).
    pub fn cosine_similarity(&self, other: &Embedding) -> f32 {
        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;

        for (a, b) in self.0.iter().zip(other.0.iter()) {
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }

        if norm_a <= 0.0 || norm_b <= 0.0 {
            return 0.0;
        }

        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

// Embeddings travel on the wire as their comma-separated encoding. The
// deserialize side accepts any length; the store re-checks dimensionality
// before anything is written.
impl Serialize for Embedding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_csv())
    }
}

impl<'de> Deserialize<'de> for Embedding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        let values = encoded
            .split(',')
            .map(|field| field.trim().parse::<f32>().map_err(D::Error::custom))
            .collect::<Result<Vec<f32>, D::Error>>()?;
        Ok(Embedding(values))
    }
}

/// External embedding function: text in, fixed-dimension vector out.
///
/// Implementations must be deterministic for identical input and free of
/// side effects from the engine's perspective.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Output dimensionality, constant for the provider's lifetime.
    fn dimensions(&self) -> usize;

    /// Embed a single text.
    async fn embed(&self, text: &str) -> EmbedResult<Embedding>;
}
