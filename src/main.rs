use staffgraph::embed::hashing::HashingEmbedder;
use staffgraph::graph::ProfileGraph;
use staffgraph::ingest::Ingestor;
use staffgraph::matching::{MatchingEngine, DEFAULT_PEER_THRESHOLD, DEFAULT_SIMILARITY_THRESHOLD};
use staffgraph::{peers, samples, schema, RankedMatch};

const DIMENSIONS: usize = 128;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("StaffGraph v{}", staffgraph::version());
    println!("==========================================");
    println!();

    let embedder = HashingEmbedder::new(DIMENSIONS)?;
    let mut graph = ProfileGraph::new(DIMENSIONS);
    let ingestor = Ingestor::new(&embedder);

    schema::apply(&mut graph);
    println!("✓ Schema setup complete");

    for role in samples::ROLES {
        graph.merge_role(role);
    }
    println!("✓ Roles created");

    for tool in samples::TOOLS {
        graph.merge_tool(tool);
    }
    println!("✓ Tools created");

    for record in samples::employees() {
        let name = record.name.clone();
        ingestor.ingest_profile(&mut graph, record).await?;
        println!("✓ Created employee {name} with embedding");
    }

    for record in samples::demands() {
        let id = ingestor.ingest_demand(&mut graph, record).await?;
        println!("✓ Created demand {id} with embedding");
    }

    let edges = peers::recompute_peer_edges(&mut graph, DEFAULT_PEER_THRESHOLD);
    println!("✓ Computed {edges} SIMILAR_TO edges");

    validate(&graph);

    // Walkthrough: ingest a fresh demand and search both ways.
    let demand_id = ingestor
        .ingest_demand(&mut graph, samples::ux_designer_demand())
        .await?;
    println!("\n✓ Created demand {demand_id} with embedding");

    let engine = MatchingEngine::new(&graph);
    let one_hop = engine.find_direct_matches(&demand_id, DEFAULT_SIMILARITY_THRESHOLD);
    print_results(&one_hop, "1");

    let two_hop = engine.find_transitive_matches(
        &demand_id,
        DEFAULT_SIMILARITY_THRESHOLD,
        DEFAULT_PEER_THRESHOLD,
    );
    print_results(&two_hop, "2");

    Ok(())
}

fn validate(graph: &ProfileGraph) {
    let stats = graph.stats();
    println!("\nValidation Results:");
    println!("  Persons: {} ({} embedded)", stats.persons, stats.embedded_persons);
    println!("  Demands: {} ({} embedded)", stats.demands, stats.embedded_demands);
    println!("  Roles: {}, Tools: {}", stats.roles, stats.tools);
    println!(
        "  Edges: {} CAN_PLAY, {} HAS_SKILL, {} REQUIRES, {} SIMILAR_TO",
        stats.can_play_edges, stats.has_skill_edges, stats.requires_edges, stats.similar_to_edges
    );
    println!("  Embedding dimensions: {}", stats.dimensions);
}

fn print_results(results: &[RankedMatch], hop_type: &str) {
    println!("\n=== {hop_type}-Hop Connections ===");
    if results.is_empty() {
        println!("No {hop_type}-hop connections found.");
        return;
    }
    for m in results {
        println!("Person: {}, Role: {}, Grade: {}", m.name, m.role, m.grade);
        println!("Similarity Score: {:.3}\n", m.similarity);
    }
}
