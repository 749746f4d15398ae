//! Crate-level error type
//!
//! Unifies the graph and embedding error families for callers that drive the
//! whole pipeline. The variants stay distinct so a caller can tell a
//! validation failure (reject and report) from a provider failure (retry or
//! surface as a dependency outage).

use crate::embed::EmbedError;
use crate::graph::GraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaffGraphError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbedError),
}

pub type Result<T> = std::result::Result<T, StaffGraphError>;
