//! Core identifier and scalar types for the profile graph

use serde::{Deserialize, Serialize};
use std::fmt;

use super::store::GraphError;

/// Employee identifier: a decimal integer left-zero-padded to three digits
/// (`"001"`, `"042"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EmpId(String);

impl EmpId {
    pub fn new(id: impl Into<String>) -> Self {
        EmpId(id.into())
    }

    /// Format a numeric id in the canonical zero-padded shape.
    pub fn from_number(n: u32) -> Self {
        EmpId(format!("{n:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if the id parses as a decimal integer.
    pub fn to_number(&self) -> Option<u32> {
        self.0.parse().ok()
    }
}

impl fmt::Display for EmpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EmpId {
    fn from(s: &str) -> Self {
        EmpId(s.to_string())
    }
}

impl From<String> for EmpId {
    fn from(s: String) -> Self {
        EmpId(s)
    }
}

/// Demand identifier: a plain decimal integer string, monotonically assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DemandId(String);

impl DemandId {
    pub fn new(id: impl Into<String>) -> Self {
        DemandId(id.into())
    }

    pub fn from_number(n: i64) -> Self {
        DemandId(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_number(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for DemandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DemandId {
    fn from(s: &str) -> Self {
        DemandId(s.to_string())
    }
}

impl From<String> for DemandId {
    fn from(s: String) -> Self {
        DemandId(s)
    }
}

/// Node label in the typed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum NodeLabel {
    Person,
    Role,
    Tool,
    Demand,
}

impl NodeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeLabel::Person => "Person",
            NodeLabel::Role => "Role",
            NodeLabel::Tool => "Tool",
            NodeLabel::Demand => "Demand",
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Skill proficiency on a HAS_SKILL edge, an integer within 1..=5.
///
/// Out-of-range values are a validation error at construction, never
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SkillRating(u8);

impl SkillRating {
    pub fn new(rating: u8) -> Result<Self, GraphError> {
        if !(1..=5).contains(&rating) {
            return Err(GraphError::InvalidRating(rating));
        }
        Ok(SkillRating(rating))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SkillRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Precomputed person-to-person similarity on a SIMILAR_TO edge, in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, PartialOrd)]
#[serde(transparent)]
pub struct PeerScore(f32);

impl PeerScore {
    pub fn new(score: f32) -> Result<Self, GraphError> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(GraphError::InvalidPeerScore(score));
        }
        Ok(PeerScore(score))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for PeerScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
