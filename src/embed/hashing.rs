//! Deterministic local embedding provider
//!
//! Feature-hashes whitespace-delimited tokens into a fixed number of buckets
//! and L2-normalizes the counts. The vectors carry no semantics beyond token
//! overlap, but they are cheap, deterministic across runs, and dimensioned
//! like a real model's output, which is what the demo binary and the tests
//! need.

use crate::embed::{EmbedError, EmbedResult, Embedding, EmbeddingProvider};
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Token-hashing embedder with a configurable dimensionality.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    /// Zero dimensions would leave no bucket to hash into.
    pub fn new(dimensions: usize) -> EmbedResult<Self> {
        if dimensions == 0 {
            return Err(EmbedError::ConfigError(
                "dimensionality must be non-zero".to_string(),
            ));
        }
        Ok(Self { dimensions })
    }

    fn bucket(&self, token: &str) -> usize {
        let mut hasher = FxHasher::default();
        hasher.write(token.as_bytes());
        (hasher.finish() as usize) % self.dimensions
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut counts = vec![0.0f32; self.dimensions];
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let token = token.to_lowercase();
            counts[self.bucket(&token)] += 1.0;
        }

        let norm = counts.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in counts.iter_mut() {
                *v /= norm;
            }
        }
        counts
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self { dimensions: 128 }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HashingEmbedder {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    async fn embed(&self, text: &str) -> EmbedResult<Embedding> {
        Embedding::new(self.vectorize(text), self.dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deterministic_across_calls() {
        let embedder = HashingEmbedder::new(64).unwrap();
        let a = embedder.embed("Python and SQL skills").await.unwrap();
        let b = embedder.embed("Python and SQL skills").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_output_dimensionality() {
        let embedder = HashingEmbedder::new(32).unwrap();
        let e = embedder.embed("anything").await.unwrap();
        assert_eq!(e.len(), 32);
    }

    #[tokio::test]
    async fn test_similar_texts_score_higher() {
        let embedder = HashingEmbedder::new(128).unwrap();
        let base = embedder.embed("python sql spark airflow").await.unwrap();
        let close = embedder.embed("python sql spark hadoop").await.unwrap();
        let far = embedder.embed("figma photoshop sketch").await.unwrap();

        assert!(base.cosine_similarity(&close) > base.cosine_similarity(&far));
    }

    #[test]
    fn test_zero_dimensionality_rejected() {
        assert!(matches!(
            HashingEmbedder::new(0),
            Err(EmbedError::ConfigError(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_text_yields_zero_vector() {
        let embedder = HashingEmbedder::new(16).unwrap();
        let e = embedder.embed("").await.unwrap();
        assert!(e.as_slice().iter().all(|v| *v == 0.0));
        // Zero magnitude compares as similarity 0, not NaN.
        assert_eq!(e.cosine_similarity(&e), 0.0);
    }
}
