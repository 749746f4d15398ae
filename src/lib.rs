//! StaffGraph
//!
//! An in-memory typed graph engine for matching employee profiles to
//! staffing demands. Profiles and demands are stored as nodes connected by
//! CAN_PLAY, HAS_SKILL, REQUIRES and SIMILAR_TO relationships; each carries
//! an embedding of its synthesized description, and the matching engine
//! ranks candidates by cosine similarity over structurally qualified
//! subsets of the graph.
//!
//! # Pipeline
//!
//! 1. Synthesize a deterministic text description from structured
//!    attributes ([`synthesis`]).
//! 2. Embed the description through an [`embed::EmbeddingProvider`].
//! 3. Write nodes and relationships atomically into the
//!    [`graph::ProfileGraph`] ([`ingest`]).
//! 4. Precompute SIMILAR_TO peer edges offline ([`peers`]).
//! 5. Answer one-hop and two-hop similarity searches
//!    ([`matching::MatchingEngine`]) and directory queries
//!    ([`catalog::Catalog`]).
//!
//! ## Example Usage
//!
//! ```rust
//! use staffgraph::embed::hashing::HashingEmbedder;
//! use staffgraph::graph::ProfileGraph;
//! use staffgraph::ingest::Ingestor;
//! use staffgraph::matching::MatchingEngine;
//! use staffgraph::{peers, samples, schema};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> staffgraph::Result<()> {
//! let embedder = HashingEmbedder::new(128)?;
//! let mut graph = ProfileGraph::new(128);
//! schema::apply(&mut graph);
//!
//! let ingestor = Ingestor::new(&embedder);
//! for record in samples::employees() {
//!     ingestor.ingest_profile(&mut graph, record).await?;
//! }
//! peers::recompute_peer_edges(&mut graph, 0.3);
//!
//! let demand_id = ingestor
//!     .ingest_demand(&mut graph, samples::ux_designer_demand())
//!     .await?;
//!
//! let engine = MatchingEngine::new(&graph);
//! let direct = engine.find_direct_matches(&demand_id, 0.5);
//! let transitive = engine.find_transitive_matches(&demand_id, 0.5, 0.3);
//! # let _ = (direct, transitive);
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod embed;
pub mod error;
pub mod graph;
pub mod index;
pub mod ingest;
pub mod matching;
pub mod peers;
pub mod samples;
pub mod schema;
pub mod synthesis;

// Re-export main types for convenience
pub use catalog::{Catalog, ProfileDetail, ProfileSummary, RatedProfile, SkillEntry};
pub use embed::{EmbedError, EmbedResult, Embedding, EmbeddingProvider};
pub use error::{Result, StaffGraphError};
pub use graph::{
    Demand, DemandId, EmpId, GraphError, GraphResult, GraphStats, NodeLabel, PeerEdge, PeerScore,
    Person, ProfileGraph, Role, SkillRating, Tool,
};
pub use ingest::{DemandRecord, Ingestor, NewProfile, ProfileRecord};
pub use matching::{
    MatchingEngine, RankedMatch, DEFAULT_PEER_THRESHOLD, DEFAULT_SIMILARITY_THRESHOLD,
};
pub use peers::recompute_peer_edges;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
