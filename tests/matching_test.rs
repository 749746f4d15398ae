//! End-to-end matching scenarios with hand-crafted embeddings

use chrono::NaiveDate;
use indexmap::IndexMap;
use staffgraph::{
    Demand, DemandId, EmpId, Embedding, MatchingEngine, PeerScore, Person, ProfileGraph,
};

fn embedding(values: &[f32]) -> Embedding {
    Embedding::new(values.to_vec(), values.len()).unwrap()
}

fn person(emp_id: &str, name: &str, role: &str, values: &[f32]) -> Person {
    Person {
        emp_id: EmpId::new(emp_id),
        name: name.to_string(),
        role: role.to_string(),
        grade: "Senior".to_string(),
        office: "New York".to_string(),
        start_date: None,
        end_date: None,
        description: None,
        embedding: Some(embedding(values)),
    }
}

fn demand(id: &str, role: &str, values: &[f32]) -> Demand {
    Demand {
        id: DemandId::new(id),
        role: role.to_string(),
        grade: "Senior".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
        office: "New York".to_string(),
        job_description: "desc".to_string(),
        description: None,
        embedding: Some(embedding(values)),
    }
}

fn insert(graph: &mut ProfileGraph, p: Person, roles: &[&str]) {
    graph
        .insert_person(
            p,
            roles.iter().map(|r| r.to_string()).collect(),
            IndexMap::new(),
        )
        .unwrap();
}

/// Demand embedding [1, 0, 0]; P1 scores 0.8, P2 scores 0.4. At threshold
/// 0.5 only P1 survives.
#[test]
fn test_one_hop_threshold_scenario() {
    let mut graph = ProfileGraph::new(3);
    insert(
        &mut graph,
        person("001", "P1", "Data Scientist", &[0.8, 0.6, 0.0]),
        &["Data Scientist"],
    );
    insert(
        &mut graph,
        person("002", "P2", "Data Scientist", &[0.4, 0.916_515_1, 0.0]),
        &["Data Scientist"],
    );
    graph
        .insert_demand(demand("1", "Data Scientist", &[1.0, 0.0, 0.0]))
        .unwrap();

    let engine = MatchingEngine::new(&graph);
    let matches = engine.find_direct_matches(&DemandId::new("1"), 0.5);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "P1");
    assert!((matches[0].similarity - 0.8).abs() < 1e-3);
    assert_eq!(matches[0].role, "Data Scientist");
    assert_eq!(matches[0].grade, "Senior");
}

/// A strong peer of a qualified anchor is reachable in two hops even though
/// it cannot play the required role itself.
#[test]
fn test_two_hop_reaches_peer_outside_role() {
    let mut graph = ProfileGraph::new(3);
    insert(
        &mut graph,
        person("001", "Anchor", "Data Scientist", &[0.8, 0.6, 0.0]),
        &["Data Scientist"],
    );
    insert(
        &mut graph,
        person("003", "Peer", "Data Analyst", &[0.55, 0.835_164_9, 0.0]),
        &["Data Analyst"],
    );
    graph
        .insert_demand(demand("1", "Data Scientist", &[1.0, 0.0, 0.0]))
        .unwrap();
    graph
        .add_similar_to(
            &EmpId::new("001"),
            &EmpId::new("003"),
            PeerScore::new(0.6).unwrap(),
        )
        .unwrap();

    let engine = MatchingEngine::new(&graph);

    // Not reachable directly.
    let direct = engine.find_direct_matches(&DemandId::new("1"), 0.5);
    assert_eq!(direct.len(), 1);
    assert_eq!(direct[0].name, "Anchor");

    // Reachable through the peer edge; the anchor itself is not returned.
    let transitive = engine.find_transitive_matches(&DemandId::new("1"), 0.5, 0.5);
    assert_eq!(transitive.len(), 1);
    assert_eq!(transitive[0].name, "Peer");
}

/// Raising the threshold never introduces new matches.
#[test]
fn test_threshold_monotonicity_end_to_end() {
    let mut graph = ProfileGraph::new(2);
    for (i, x) in [0.95f32, 0.7, 0.45, 0.2].iter().enumerate() {
        let y = (1.0 - x * x).sqrt();
        let emp_id = format!("{:03}", i + 1);
        insert(
            &mut graph,
            person(&emp_id, &format!("P{}", i + 1), "Data Scientist", &[*x, y]),
            &["Data Scientist"],
        );
    }
    graph
        .insert_demand(demand("1", "Data Scientist", &[1.0, 0.0]))
        .unwrap();

    let engine = MatchingEngine::new(&graph);
    let id = DemandId::new("1");
    let mut previous = usize::MAX;
    for threshold in [0.0f32, 0.3, 0.5, 0.8, 0.99] {
        let matches = engine.find_direct_matches(&id, threshold);
        assert!(matches.len() <= previous);
        // Ranked descending regardless of the threshold.
        for pair in matches.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
        previous = matches.len();
    }
}

/// Peers reached through several anchors appear once; a peer that happens to
/// hold the required role itself can still be returned.
#[test]
fn test_two_hop_dedup_and_anchor_peers() {
    let mut graph = ProfileGraph::new(2);
    insert(
        &mut graph,
        person("001", "A1", "Data Scientist", &[1.0, 0.0]),
        &["Data Scientist"],
    );
    insert(
        &mut graph,
        person("002", "A2", "Data Scientist", &[0.9, 0.435_889_9]),
        &["Data Scientist"],
    );
    insert(
        &mut graph,
        person("003", "Shared", "Data Analyst", &[0.8, 0.6]),
        &["Data Analyst"],
    );
    graph.insert_demand(demand("1", "Data Scientist", &[1.0, 0.0])).unwrap();

    let shared = EmpId::new("003");
    let score = PeerScore::new(0.9).unwrap();
    graph.add_similar_to(&EmpId::new("001"), &shared, score).unwrap();
    graph.add_similar_to(&EmpId::new("002"), &shared, score).unwrap();
    // A2 is both an anchor and a peer of A1.
    graph
        .add_similar_to(&EmpId::new("001"), &EmpId::new("002"), score)
        .unwrap();

    let engine = MatchingEngine::new(&graph);
    let matches = engine.find_transitive_matches(&DemandId::new("1"), 0.5, 0.5);

    let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names.iter().filter(|n| **n == "Shared").count(), 1);
    assert!(names.contains(&"A2"));
    assert!(!names.contains(&"A1"));
}

/// Searches against a missing demand or one with no embedding come back
/// empty instead of failing.
#[test]
fn test_degenerate_searches_are_empty() {
    let mut graph = ProfileGraph::new(2);
    insert(
        &mut graph,
        person("001", "P1", "Data Scientist", &[1.0, 0.0]),
        &["Data Scientist"],
    );
    let mut blind = demand("1", "Data Scientist", &[1.0, 0.0]);
    blind.embedding = None;
    graph.insert_demand(blind).unwrap();

    let engine = MatchingEngine::new(&graph);
    assert!(engine.find_direct_matches(&DemandId::new("1"), 0.0).is_empty());
    assert!(engine.find_direct_matches(&DemandId::new("404"), 0.0).is_empty());
    assert!(engine
        .find_transitive_matches(&DemandId::new("404"), 0.0, 0.0)
        .is_empty());
}
