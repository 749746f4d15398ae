//! Typed node definitions for the profile graph

use super::types::{DemandId, EmpId};
use crate::embed::Embedding;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee profile node.
///
/// The description and embedding are derived from the structured attributes
/// by the synthesizer and the embedding provider; both are regenerated when
/// the attributes change. A person without an embedding exists in the graph
/// but is not eligible for similarity queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub emp_id: EmpId,
    pub name: String,
    /// Current role label (distinct from the CAN_PLAY set).
    pub role: String,
    pub grade: String,
    pub office: String,
    /// Engagement window, present only on externally submitted profiles.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub embedding: Option<Embedding>,
}

/// A role node; referenced by CAN_PLAY and REQUIRES edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
}

/// A tool (skill) node; referenced by HAS_SKILL edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
}

/// An open-position node. Immutable once matched against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    pub id: DemandId,
    pub role: String,
    pub grade: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub office: String,
    /// Raw free-text position description as supplied.
    pub job_description: String,
    /// Synthesized description fed to the embedding provider.
    pub description: Option<String>,
    pub embedding: Option<Embedding>,
}
