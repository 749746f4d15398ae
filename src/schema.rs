//! Declarative graph schema: constraints and secondary indexes
//!
//! Mirrors what a hosted graph store would hold as `CREATE CONSTRAINT ... IF
//! NOT EXISTS` / `CREATE INDEX ... IF NOT EXISTS` statements. Applying the
//! schema is idempotent: re-running neither errors nor duplicates anything.

use crate::graph::{NodeLabel, ProfileGraph};

/// Uniqueness constraints on natural keys, enforced by the store at write
/// time. Listed here so the declared schema is inspectable in one place.
pub const UNIQUE_CONSTRAINTS: &[(NodeLabel, &str)] = &[
    (NodeLabel::Person, "emp_id"),
    (NodeLabel::Role, "name"),
    (NodeLabel::Tool, "name"),
    (NodeLabel::Demand, "id"),
];

/// Secondary indexes for query performance.
pub const PROPERTY_INDEXES: &[(NodeLabel, &str)] = &[
    (NodeLabel::Person, "embedding"),
    (NodeLabel::Person, "office"),
    (NodeLabel::Person, "grade"),
    (NodeLabel::Demand, "role"),
    (NodeLabel::Demand, "embedding"),
];

/// Declare all indexes on the graph and backfill them from existing nodes.
pub fn apply(graph: &mut ProfileGraph) {
    for (label, property) in PROPERTY_INDEXES {
        graph.indexes().create_index(*label, *property);
    }
    backfill(graph);
    tracing::debug!(
        indexes = PROPERTY_INDEXES.len(),
        constraints = UNIQUE_CONSTRAINTS.len(),
        "schema applied"
    );
}

/// Whether every declared index exists.
pub fn is_applied(graph: &ProfileGraph) -> bool {
    PROPERTY_INDEXES
        .iter()
        .all(|(label, property)| graph.indexes().has_index(*label, property))
}

fn backfill(graph: &ProfileGraph) {
    let indexes = graph.indexes();
    for person in graph.persons() {
        let key = person.emp_id.as_str();
        indexes.index_insert(NodeLabel::Person, "office", &person.office, key);
        indexes.index_insert(NodeLabel::Person, "grade", &person.grade, key);
        if let Some(embedding) = &person.embedding {
            indexes.index_insert(NodeLabel::Person, "embedding", &embedding.to_csv(), key);
        }
    }
    for demand in graph.demands() {
        let key = demand.id.as_str();
        indexes.index_insert(NodeLabel::Demand, "role", &demand.role, key);
        if let Some(embedding) = &demand.embedding {
            indexes.index_insert(NodeLabel::Demand, "embedding", &embedding.to_csv(), key);
        }
    }
}
