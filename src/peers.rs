//! Batch recomputation of SIMILAR_TO edges
//!
//! Peer similarity is precomputed offline rather than at query time: this
//! pass scores every pair of embedded persons and materializes an edge in
//! both directions whenever the cosine similarity clears the floor. Each run
//! is a full refresh, so stale edges from earlier embeddings never linger.

use crate::embed::Embedding;
use crate::graph::{EmpId, PeerScore, ProfileGraph};

/// Rebuild all SIMILAR_TO edges from the current embeddings.
///
/// Pairs scoring strictly above `floor` get an edge in each direction;
/// everything below, including non-positive similarities, is dropped.
/// Returns the number of directed edges written.
pub fn recompute_peer_edges(graph: &mut ProfileGraph, floor: f32) -> usize {
    let embedded: Vec<(EmpId, Embedding)> = graph
        .persons()
        .filter_map(|p| p.embedding.as_ref().map(|e| (p.emp_id.clone(), e.clone())))
        .collect();

    graph.clear_similar_to();

    let mut written = 0;
    for i in 0..embedded.len() {
        for j in (i + 1)..embedded.len() {
            let (a, va) = &embedded[i];
            let (b, vb) = &embedded[j];
            let similarity = va.cosine_similarity(vb);
            if similarity <= floor || similarity <= 0.0 {
                continue;
            }
            // Float error can push a self-similar pair a hair past 1.0.
            let score = match PeerScore::new(similarity.min(1.0)) {
                Ok(score) => score,
                Err(_) => continue,
            };
            // Both persons exist by construction; the writes cannot fail.
            if graph.add_similar_to(a, b, score).is_ok() {
                written += 1;
            }
            if graph.add_similar_to(b, a, score).is_ok() {
                written += 1;
            }
        }
    }

    tracing::debug!(persons = embedded.len(), edges = written, floor, "peer edges recomputed");
    written
}
