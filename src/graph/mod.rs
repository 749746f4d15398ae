//! Typed profile graph
//!
//! Nodes are Person, Role, Tool and Demand; relationships are CAN_PLAY,
//! HAS_SKILL (rated), REQUIRES and SIMILAR_TO (scored). The store keeps
//! everything in memory with uniqueness constraints on natural keys and
//! insertion-ordered adjacency.

pub mod node;
pub mod store;
pub mod types;

pub use node::{Demand, Person, Role, Tool};
pub use store::{GraphError, GraphResult, GraphStats, PeerEdge, ProfileGraph};
pub use types::{DemandId, EmpId, NodeLabel, PeerScore, SkillRating};
