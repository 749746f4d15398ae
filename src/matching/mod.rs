//! Similarity-ranked matching over the profile graph
//!
//! Both searches are a two-stage filter pipeline: a structural stage that
//! pattern-matches the graph (demand -> required role -> qualified persons)
//! and a numeric stage that re-ranks the structural candidates by cosine
//! similarity against the demand's embedding. Keeping the stages separate
//! scopes the vector comparisons to a structurally plausible candidate set
//! and makes each stage independently testable.

use crate::graph::{Demand, DemandId, EmpId, Person, ProfileGraph};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::cmp::Ordering;

/// Default minimum demand-to-person similarity.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.5;

/// Default minimum person-to-person similarity for peer expansion.
pub const DEFAULT_PEER_THRESHOLD: f32 = 0.3;

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    pub name: String,
    pub role: String,
    pub grade: String,
    pub similarity: f32,
}

/// Read-only matching engine over a borrowed graph.
///
/// Holds no state between calls; concurrent searches against the same graph
/// are governed entirely by the caller's locking of the store.
pub struct MatchingEngine<'g> {
    graph: &'g ProfileGraph,
}

impl<'g> MatchingEngine<'g> {
    pub fn new(graph: &'g ProfileGraph) -> Self {
        Self { graph }
    }

    /// One-hop search: persons holding the demand's required role, ranked by
    /// embedding similarity above `threshold` (strict).
    ///
    /// An unknown demand id is a legitimate empty result, not an error.
    pub fn find_direct_matches(&self, demand_id: &DemandId, threshold: f32) -> Vec<RankedMatch> {
        let Some((demand, anchors)) = self.role_qualified(demand_id) else {
            return Vec::new();
        };
        let matches = rank_by_similarity(demand, anchors, threshold);
        tracing::debug!(
            demand = %demand_id,
            threshold,
            matches = matches.len(),
            "one-hop search"
        );
        matches
    }

    /// Two-hop search: peers of the role-qualified anchors, reached over
    /// SIMILAR_TO edges scoring above `peer_threshold` (strict), ranked by
    /// embedding similarity above `threshold` (strict).
    ///
    /// Anchors themselves are not returned; a peer reachable through several
    /// anchors is scored once.
    pub fn find_transitive_matches(
        &self,
        demand_id: &DemandId,
        threshold: f32,
        peer_threshold: f32,
    ) -> Vec<RankedMatch> {
        let Some((demand, anchors)) = self.role_qualified(demand_id) else {
            return Vec::new();
        };

        let mut seen: FxHashSet<&EmpId> = FxHashSet::default();
        let mut peers: Vec<&Person> = Vec::new();
        for anchor in &anchors {
            for edge in self.graph.similar_peers(&anchor.emp_id) {
                if edge.target == anchor.emp_id {
                    continue; // self-edge
                }
                if edge.score.value() <= peer_threshold {
                    continue;
                }
                if let Some(peer) = self.graph.person(&edge.target) {
                    if seen.insert(&peer.emp_id) {
                        peers.push(peer);
                    }
                }
            }
        }

        let matches = rank_by_similarity(demand, peers, threshold);
        tracing::debug!(
            demand = %demand_id,
            threshold,
            peer_threshold,
            anchors = anchors.len(),
            matches = matches.len(),
            "two-hop search"
        );
        matches
    }

    /// Structural stage: resolve the demand and enumerate persons holding
    /// its required role, in creation order.
    fn role_qualified(&self, demand_id: &DemandId) -> Option<(&'g Demand, Vec<&'g Person>)> {
        let demand = self.graph.demand(demand_id)?;
        let role = self.graph.required_role(demand_id)?;
        let candidates = self
            .graph
            .role_members(role)
            .iter()
            .filter_map(|emp_id| self.graph.person(emp_id))
            .collect();
        Some((demand, candidates))
    }
}

/// Numeric stage: score candidates against the demand embedding, keep those
/// strictly above the threshold, sort descending with stable ties.
///
/// Candidates without an embedding are excluded, never scored as 0; a demand
/// without an embedding has no eligible comparisons at all.
fn rank_by_similarity<'a>(
    demand: &Demand,
    candidates: impl IntoIterator<Item = &'a Person>,
    threshold: f32,
) -> Vec<RankedMatch> {
    let Some(demand_embedding) = &demand.embedding else {
        return Vec::new();
    };

    let mut matches: Vec<RankedMatch> = candidates
        .into_iter()
        .filter_map(|person| {
            let embedding = person.embedding.as_ref()?;
            let similarity = demand_embedding.cosine_similarity(embedding);
            (similarity > threshold).then(|| RankedMatch {
                name: person.name.clone(),
                role: person.role.clone(),
                grade: person.grade.clone(),
                similarity,
            })
        })
        .collect();

    // sort_by is stable: equal similarities keep candidate order.
    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::Embedding;
    use crate::graph::{PeerScore, SkillRating};
    use chrono::NaiveDate;
    use indexmap::IndexMap;

    fn embedding(values: Vec<f32>) -> Embedding {
        let dims = values.len();
        Embedding::new(values, dims).unwrap()
    }

    fn add_person(graph: &mut ProfileGraph, emp_id: &str, name: &str, roles: &[&str], emb: Option<Vec<f32>>) {
        let person = Person {
            emp_id: EmpId::new(emp_id),
            name: name.to_string(),
            role: roles.first().unwrap_or(&"None").to_string(),
            grade: "Senior".to_string(),
            office: "New York".to_string(),
            start_date: None,
            end_date: None,
            description: None,
            embedding: emb.map(embedding),
        };
        graph
            .insert_person(
                person,
                roles.iter().map(|r| r.to_string()).collect(),
                IndexMap::<String, SkillRating>::new(),
            )
            .unwrap();
    }

    fn add_demand(graph: &mut ProfileGraph, id: &str, role: &str, emb: Vec<f32>) {
        let demand = Demand {
            id: DemandId::new(id),
            role: role.to_string(),
            grade: "Senior".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
            office: "New York".to_string(),
            job_description: "desc".to_string(),
            description: None,
            embedding: Some(embedding(emb)),
        };
        graph.insert_demand(demand).unwrap();
    }

    /// Demand at [1, 0, 0]; P1 cosine 0.8, P2 cosine 0.4.
    fn scenario_graph() -> ProfileGraph {
        let mut graph = ProfileGraph::new(3);
        add_person(
            &mut graph,
            "001",
            "P1",
            &["Data Scientist"],
            Some(vec![0.8, 0.6, 0.0]),
        );
        add_person(
            &mut graph,
            "002",
            "P2",
            &["Data Scientist"],
            Some(vec![0.4, 0.916_515_1, 0.0]),
        );
        add_demand(&mut graph, "1", "Data Scientist", vec![1.0, 0.0, 0.0]);
        graph
    }

    #[test]
    fn test_direct_match_scenario() {
        let graph = scenario_graph();
        let engine = MatchingEngine::new(&graph);

        let matches = engine.find_direct_matches(&DemandId::new("1"), 0.5);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "P1");
        assert!((matches[0].similarity - 0.8).abs() < 1e-3);
    }

    #[test]
    fn test_direct_matches_ranked_descending() {
        let graph = scenario_graph();
        let engine = MatchingEngine::new(&graph);

        let matches = engine.find_direct_matches(&DemandId::new("1"), 0.0);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "P1");
        assert_eq!(matches[1].name, "P2");
        assert!(matches[0].similarity >= matches[1].similarity);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut graph = ProfileGraph::new(2);
        // Exactly cosine 1.0 against the demand.
        add_person(&mut graph, "001", "Exact", &["DS"], Some(vec![2.0, 0.0]));
        add_demand(&mut graph, "1", "DS", vec![1.0, 0.0]);
        let engine = MatchingEngine::new(&graph);

        // similarity == threshold is excluded.
        assert!(engine.find_direct_matches(&DemandId::new("1"), 1.0).is_empty());
        assert_eq!(engine.find_direct_matches(&DemandId::new("1"), 0.99).len(), 1);
    }

    #[test]
    fn test_threshold_monotonicity() {
        let graph = scenario_graph();
        let engine = MatchingEngine::new(&graph);
        let id = DemandId::new("1");

        let loose = engine.find_direct_matches(&id, 0.3);
        let strict = engine.find_direct_matches(&id, 0.6);
        for m in &strict {
            assert!(loose.iter().any(|l| l.name == m.name));
        }
        assert!(strict.len() <= loose.len());
    }

    #[test]
    fn test_unknown_demand_returns_empty() {
        let graph = scenario_graph();
        let engine = MatchingEngine::new(&graph);
        let missing = DemandId::new("999");

        assert!(engine.find_direct_matches(&missing, 0.0).is_empty());
        assert!(engine.find_transitive_matches(&missing, 0.0, 0.0).is_empty());
    }

    #[test]
    fn test_person_without_embedding_excluded() {
        let mut graph = ProfileGraph::new(2);
        add_person(&mut graph, "001", "NoVector", &["DS"], None);
        add_demand(&mut graph, "1", "DS", vec![1.0, 0.0]);
        let engine = MatchingEngine::new(&graph);

        // Excluded entirely, not compared as similarity 0.
        assert!(engine.find_direct_matches(&DemandId::new("1"), -1.0).is_empty());
    }

    #[test]
    fn test_direct_matches_only_role_qualified() {
        let mut graph = ProfileGraph::new(2);
        add_person(&mut graph, "001", "Qualified", &["DS"], Some(vec![1.0, 0.0]));
        add_person(&mut graph, "002", "Other", &["UX Designer"], Some(vec![1.0, 0.0]));
        add_demand(&mut graph, "1", "DS", vec![1.0, 0.0]);
        let engine = MatchingEngine::new(&graph);

        let matches = engine.find_direct_matches(&DemandId::new("1"), 0.5);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Qualified");
    }

    #[test]
    fn test_transitive_match_scenario() {
        // P1 qualified; P3 not role-qualified but peer of P1 with score 0.6
        // and demand similarity 0.55.
        let mut graph = ProfileGraph::new(3);
        add_person(&mut graph, "001", "P1", &["Data Scientist"], Some(vec![0.8, 0.6, 0.0]));
        add_person(
            &mut graph,
            "003",
            "P3",
            &["Data Analyst"],
            Some(vec![0.55, 0.835_164_9, 0.0]),
        );
        add_demand(&mut graph, "1", "Data Scientist", vec![1.0, 0.0, 0.0]);
        graph
            .add_similar_to(
                &EmpId::new("001"),
                &EmpId::new("003"),
                PeerScore::new(0.6).unwrap(),
            )
            .unwrap();

        let engine = MatchingEngine::new(&graph);
        let matches = engine.find_transitive_matches(&DemandId::new("1"), 0.5, 0.5);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "P3");
        assert!((matches[0].similarity - 0.55).abs() < 1e-3);
        // The anchor is not part of the result.
        assert!(!matches.iter().any(|m| m.name == "P1"));
    }

    #[test]
    fn test_transitive_degenerates_to_empty_without_edges() {
        let graph = scenario_graph();
        let engine = MatchingEngine::new(&graph);

        // No SIMILAR_TO edges and a maximal peer threshold: empty, never the
        // anchor set.
        let matches = engine.find_transitive_matches(&DemandId::new("1"), 0.0, 1.0);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_peer_threshold_is_strict() {
        let mut graph = ProfileGraph::new(2);
        add_person(&mut graph, "001", "Anchor", &["DS"], Some(vec![1.0, 0.0]));
        add_person(&mut graph, "002", "Peer", &["UX"], Some(vec![1.0, 0.0]));
        add_demand(&mut graph, "1", "DS", vec![1.0, 0.0]);
        graph
            .add_similar_to(
                &EmpId::new("001"),
                &EmpId::new("002"),
                PeerScore::new(0.5).unwrap(),
            )
            .unwrap();
        let engine = MatchingEngine::new(&graph);

        // Edge score == peer_threshold is excluded.
        assert!(engine
            .find_transitive_matches(&DemandId::new("1"), 0.0, 0.5)
            .is_empty());
        assert_eq!(
            engine
                .find_transitive_matches(&DemandId::new("1"), 0.0, 0.4)
                .len(),
            1
        );
    }

    #[test]
    fn test_peer_deduplicated_across_anchors() {
        let mut graph = ProfileGraph::new(2);
        add_person(&mut graph, "001", "A1", &["DS"], Some(vec![1.0, 0.0]));
        add_person(&mut graph, "002", "A2", &["DS"], Some(vec![1.0, 0.0]));
        add_person(&mut graph, "003", "Peer", &["UX"], Some(vec![1.0, 0.1]));
        add_demand(&mut graph, "1", "DS", vec![1.0, 0.0]);

        let peer = EmpId::new("003");
        for anchor in ["001", "002"] {
            graph
                .add_similar_to(&EmpId::new(anchor), &peer, PeerScore::new(0.9).unwrap())
                .unwrap();
        }

        let engine = MatchingEngine::new(&graph);
        let matches = engine.find_transitive_matches(&DemandId::new("1"), 0.5, 0.5);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Peer");
    }

    #[test]
    fn test_stable_tie_order_follows_creation_order() {
        let mut graph = ProfileGraph::new(2);
        // Identical embeddings: identical similarity; creation order decides.
        add_person(&mut graph, "001", "First", &["DS"], Some(vec![1.0, 1.0]));
        add_person(&mut graph, "002", "Second", &["DS"], Some(vec![1.0, 1.0]));
        add_demand(&mut graph, "1", "DS", vec![1.0, 0.0]);
        let engine = MatchingEngine::new(&graph);

        let matches = engine.find_direct_matches(&DemandId::new("1"), 0.0);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "First");
        assert_eq!(matches[1].name, "Second");
    }
}
