//! In-memory profile graph store
//!
//! Holds the typed nodes (Person, Role, Tool, Demand) and relationships
//! (CAN_PLAY, HAS_SKILL, REQUIRES, SIMILAR_TO) with uniqueness enforced on
//! each entity's natural key. Adjacency lists keep insertion order so that
//! candidate enumeration, and therefore tie-breaking in ranked results, is
//! deterministic.

use super::node::{Demand, Person, Role, Tool};
use super::types::{DemandId, EmpId, NodeLabel, PeerScore, SkillRating};
use crate::index::IndexManager;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by graph writes.
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("person {0} already exists")]
    DuplicatePerson(EmpId),

    #[error("demand {0} already exists")]
    DuplicateDemand(DemandId),

    #[error("role {0} already exists")]
    DuplicateRole(String),

    #[error("tool {0} already exists")]
    DuplicateTool(String),

    #[error("person {0} not found")]
    PersonNotFound(EmpId),

    #[error("skill rating {0} outside 1..=5")]
    InvalidRating(u8),

    #[error("peer similarity score {0} outside [0, 1]")]
    InvalidPeerScore(f32),

    #[error("embedding dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("demand date range ends {end} before it starts {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// An outbound SIMILAR_TO edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PeerEdge {
    pub target: EmpId,
    pub score: PeerScore,
}

/// Node and edge counts for validation output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub persons: usize,
    pub roles: usize,
    pub tools: usize,
    pub demands: usize,
    pub can_play_edges: usize,
    pub has_skill_edges: usize,
    pub requires_edges: usize,
    pub similar_to_edges: usize,
    pub embedded_persons: usize,
    pub embedded_demands: usize,
    pub dimensions: usize,
}

/// The typed profile graph.
///
/// Writes validate every input before the first mutation, so a failed write
/// never leaves a node discoverable without its dependent relationships.
#[derive(Debug)]
pub struct ProfileGraph {
    /// Embedding dimensionality every stored vector must match.
    dimensions: usize,

    persons: IndexMap<EmpId, Person>,
    roles: IndexMap<String, Role>,
    tools: IndexMap<String, Tool>,
    demands: IndexMap<DemandId, Demand>,

    /// CAN_PLAY: person -> roles
    can_play: HashMap<EmpId, Vec<String>>,
    /// Inbound CAN_PLAY: role -> persons, in person-creation order
    role_members: HashMap<String, Vec<EmpId>>,
    /// HAS_SKILL: person -> tool -> rating, in skill insertion order
    skills: HashMap<EmpId, IndexMap<String, SkillRating>>,
    /// Inbound HAS_SKILL: tool -> (person, rating)
    tool_users: HashMap<String, Vec<(EmpId, SkillRating)>>,
    /// REQUIRES: demand -> role
    requires: HashMap<DemandId, String>,
    /// SIMILAR_TO: person -> outbound scored edges
    similar_to: HashMap<EmpId, Vec<PeerEdge>>,
    similar_edge_count: usize,

    indexes: IndexManager,
}

impl ProfileGraph {
    /// Create an empty graph for vectors of the given dimensionality.
    pub fn new(dimensions: usize) -> Self {
        ProfileGraph {
            dimensions,
            persons: IndexMap::new(),
            roles: IndexMap::new(),
            tools: IndexMap::new(),
            demands: IndexMap::new(),
            can_play: HashMap::new(),
            role_members: HashMap::new(),
            skills: HashMap::new(),
            tool_users: HashMap::new(),
            requires: HashMap::new(),
            similar_to: HashMap::new(),
            similar_edge_count: 0,
            indexes: IndexManager::new(),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn indexes(&self) -> &IndexManager {
        &self.indexes
    }

    // --- Role / Tool nodes -------------------------------------------------

    /// Create a role node; duplicate names are a constraint violation.
    pub fn create_role(&mut self, name: impl Into<String>) -> GraphResult<()> {
        let name = name.into();
        if self.roles.contains_key(&name) {
            return Err(GraphError::DuplicateRole(name));
        }
        self.roles.insert(name.clone(), Role { name });
        Ok(())
    }

    /// Create a tool node; duplicate names are a constraint violation.
    pub fn create_tool(&mut self, name: impl Into<String>) -> GraphResult<()> {
        let name = name.into();
        if self.tools.contains_key(&name) {
            return Err(GraphError::DuplicateTool(name));
        }
        self.tools.insert(name.clone(), Tool { name });
        Ok(())
    }

    /// MERGE semantics: create the role if absent.
    pub fn merge_role(&mut self, name: &str) {
        if !self.roles.contains_key(name) {
            self.roles.insert(
                name.to_string(),
                Role {
                    name: name.to_string(),
                },
            );
        }
    }

    /// MERGE semantics: create the tool if absent.
    pub fn merge_tool(&mut self, name: &str) {
        if !self.tools.contains_key(name) {
            self.tools.insert(
                name.to_string(),
                Tool {
                    name: name.to_string(),
                },
            );
        }
    }

    // --- Person writes -----------------------------------------------------

    /// Insert a person together with its CAN_PLAY and HAS_SKILL edges as one
    /// logical unit. Referenced roles and tools are merged.
    pub fn insert_person(
        &mut self,
        person: Person,
        can_play: Vec<String>,
        skills: IndexMap<String, SkillRating>,
    ) -> GraphResult<()> {
        if self.persons.contains_key(&person.emp_id) {
            return Err(GraphError::DuplicatePerson(person.emp_id));
        }
        if let Some(embedding) = &person.embedding {
            if embedding.len() != self.dimensions {
                return Err(GraphError::DimensionMismatch {
                    expected: self.dimensions,
                    got: embedding.len(),
                });
            }
        }

        // All inputs validated; commit.
        let emp_id = person.emp_id.clone();
        for role in &can_play {
            self.merge_role(role);
            let members = self.role_members.entry(role.clone()).or_default();
            if !members.contains(&emp_id) {
                members.push(emp_id.clone());
            }
        }
        for (tool, rating) in &skills {
            self.merge_tool(tool);
            self.tool_users
                .entry(tool.clone())
                .or_default()
                .push((emp_id.clone(), *rating));
        }

        self.indexes
            .index_insert(NodeLabel::Person, "office", &person.office, emp_id.as_str());
        self.indexes
            .index_insert(NodeLabel::Person, "grade", &person.grade, emp_id.as_str());
        if let Some(embedding) = &person.embedding {
            self.indexes.index_insert(
                NodeLabel::Person,
                "embedding",
                &embedding.to_csv(),
                emp_id.as_str(),
            );
        }

        self.can_play.insert(emp_id.clone(), can_play);
        self.skills.insert(emp_id.clone(), skills);
        self.persons.insert(emp_id, person);
        Ok(())
    }

    // --- Demand writes -----------------------------------------------------

    /// Insert a demand together with its REQUIRES edge as one logical unit.
    /// The required role is merged.
    pub fn insert_demand(&mut self, demand: Demand) -> GraphResult<()> {
        if self.demands.contains_key(&demand.id) {
            return Err(GraphError::DuplicateDemand(demand.id));
        }
        if demand.end_date < demand.start_date {
            return Err(GraphError::InvalidDateRange {
                start: demand.start_date,
                end: demand.end_date,
            });
        }
        if let Some(embedding) = &demand.embedding {
            if embedding.len() != self.dimensions {
                return Err(GraphError::DimensionMismatch {
                    expected: self.dimensions,
                    got: embedding.len(),
                });
            }
        }

        let id = demand.id.clone();
        self.merge_role(&demand.role);
        self.requires.insert(id.clone(), demand.role.clone());

        self.indexes
            .index_insert(NodeLabel::Demand, "role", &demand.role, id.as_str());
        if let Some(embedding) = &demand.embedding {
            self.indexes.index_insert(
                NodeLabel::Demand,
                "embedding",
                &embedding.to_csv(),
                id.as_str(),
            );
        }

        self.demands.insert(id, demand);
        Ok(())
    }

    // --- SIMILAR_TO edges --------------------------------------------------

    /// Add (or refresh) a directed SIMILAR_TO edge between two persons.
    pub fn add_similar_to(&mut self, source: &EmpId, target: &EmpId, score: PeerScore) -> GraphResult<()> {
        if !self.persons.contains_key(source) {
            return Err(GraphError::PersonNotFound(source.clone()));
        }
        if !self.persons.contains_key(target) {
            return Err(GraphError::PersonNotFound(target.clone()));
        }

        let edges = self.similar_to.entry(source.clone()).or_default();
        if let Some(edge) = edges.iter_mut().find(|e| &e.target == target) {
            edge.score = score;
        } else {
            edges.push(PeerEdge {
                target: target.clone(),
                score,
            });
            self.similar_edge_count += 1;
        }
        Ok(())
    }

    /// Drop every SIMILAR_TO edge (batch refresh starts here).
    pub fn clear_similar_to(&mut self) {
        self.similar_to.clear();
        self.similar_edge_count = 0;
    }

    // --- ID assignment -----------------------------------------------------

    /// Next employee id: max over parseable existing ids plus one, zero
    /// padded. Falls back to the minimum when nothing parses.
    pub fn next_emp_id(&self) -> EmpId {
        let max = self
            .persons
            .keys()
            .filter_map(EmpId::to_number)
            .max()
            .unwrap_or(0);
        EmpId::from_number(max + 1)
    }

    /// Next demand id: max over parseable existing ids plus one, plain.
    pub fn next_demand_id(&self) -> DemandId {
        let max = self
            .demands
            .keys()
            .filter_map(DemandId::to_number)
            .max()
            .unwrap_or(0);
        DemandId::from_number(max + 1)
    }

    // --- Reads -------------------------------------------------------------

    pub fn person(&self, emp_id: &EmpId) -> Option<&Person> {
        self.persons.get(emp_id)
    }

    pub fn demand(&self, id: &DemandId) -> Option<&Demand> {
        self.demands.get(id)
    }

    /// All persons in creation order.
    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    pub fn demands(&self) -> impl Iterator<Item = &Demand> {
        self.demands.values()
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }

    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// Roles a person can play (CAN_PLAY, outbound).
    pub fn roles_of(&self, emp_id: &EmpId) -> &[String] {
        self.can_play.get(emp_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Persons holding a role (CAN_PLAY, inbound), in creation order.
    pub fn role_members(&self, role: &str) -> &[EmpId] {
        self.role_members
            .get(role)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// A person's skills in insertion order.
    pub fn skills_of(&self, emp_id: &EmpId) -> Option<&IndexMap<String, SkillRating>> {
        self.skills.get(emp_id)
    }

    /// Persons holding a tool with their ratings (HAS_SKILL, inbound).
    pub fn tool_users(&self, tool: &str) -> &[(EmpId, SkillRating)] {
        self.tool_users.get(tool).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The role a demand requires (REQUIRES).
    pub fn required_role(&self, id: &DemandId) -> Option<&str> {
        self.requires.get(id).map(String::as_str)
    }

    /// Outbound SIMILAR_TO edges of a person.
    pub fn similar_peers(&self, emp_id: &EmpId) -> &[PeerEdge] {
        self.similar_to
            .get(emp_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Persons in an office, via the secondary index when declared.
    pub fn persons_by_office(&self, office: &str) -> Vec<&Person> {
        self.persons_by_indexed_property("office", office, |p| &p.office)
    }

    /// Persons at a grade, via the secondary index when declared.
    pub fn persons_by_grade(&self, grade: &str) -> Vec<&Person> {
        self.persons_by_indexed_property("grade", grade, |p| &p.grade)
    }

    /// Demands requiring a role, via the secondary index when declared.
    pub fn demands_by_role(&self, role: &str) -> Vec<&Demand> {
        if let Some(keys) = self.indexes.index_get(NodeLabel::Demand, "role", role) {
            keys.iter()
                .filter_map(|key| self.demands.get(&DemandId::new(key.clone())))
                .collect()
        } else {
            self.demands.values().filter(|d| d.role == role).collect()
        }
    }

    fn persons_by_indexed_property<'a>(
        &'a self,
        property: &str,
        value: &str,
        field: impl Fn(&Person) -> &String,
    ) -> Vec<&'a Person> {
        if let Some(keys) = self.indexes.index_get(NodeLabel::Person, property, value) {
            keys.iter()
                .filter_map(|key| self.persons.get(&EmpId::new(key.clone())))
                .collect()
        } else {
            self.persons
                .values()
                .filter(|p| field(p) == value)
                .collect()
        }
    }

    /// Node/edge counts, for setup validation and logging.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            persons: self.persons.len(),
            roles: self.roles.len(),
            tools: self.tools.len(),
            demands: self.demands.len(),
            can_play_edges: self.can_play.values().map(Vec::len).sum(),
            has_skill_edges: self.skills.values().map(IndexMap::len).sum(),
            requires_edges: self.requires.len(),
            similar_to_edges: self.similar_edge_count,
            embedded_persons: self
                .persons
                .values()
                .filter(|p| p.embedding.is_some())
                .count(),
            embedded_demands: self
                .demands
                .values()
                .filter(|d| d.embedding.is_some())
                .count(),
            dimensions: self.dimensions,
        }
    }
}
