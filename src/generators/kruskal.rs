use rand::{Rng, rngs::StdRng};

use super::disjoint::DisjointSet;
use crate::graph::{Edge, GridGraph};

/// Upper bound (exclusive) for edge weights.
const WEIGHT_RANGE: u16 = 1000;

/// Prunes the full candidate edge set of `graph` into a spanning tree using
/// randomized Kruskal: every directed adjacency gets an independent uniform
/// weight, candidates are scanned in ascending weight order, and an edge is
/// accepted exactly when its endpoints are still in different components.
///
/// Accepting an edge appends it to `from`'s outgoing list together with a
/// fresh reverse edge of the same weight on `to`, so the finished tree holds
/// one forward and one reverse edge per surviving connection.
pub(super) fn randomized_kruskal(graph: &mut GridGraph, rng: &mut StdRng) {
    let mut candidates = collect_candidates(graph, rng);
    candidates.sort_unstable_by_key(|e| e.weight);

    let mut components = DisjointSet::new(graph.positions());
    // A spanning tree over w*h vertices has exactly w*h - 1 connections.
    let spanning_connections = graph.vertex_count() - 1;
    let mut accepted = 0;

    // A single ascending sweep suffices: any candidate joining two components
    // at the moment it is visited is accepted, so the count below always
    // reaches the spanning size before the list is exhausted.
    for edge in candidates {
        if accepted == spanning_connections {
            break;
        }
        if components.find(edge.from) == components.find(edge.to) {
            continue;
        }
        graph.vertex_mut(edge.from).add_edge(edge);
        graph.vertex_mut(edge.to).add_edge(Edge {
            from: edge.to,
            to: edge.from,
            weight: edge.weight,
        });
        components.union(edge.from, edge.to);
        accepted += 1;
    }

    debug_assert_eq!(accepted, spanning_connections);
    tracing::debug!(accepted, "kruskal pruning complete");
}

/// Every directed adjacency on the grid (both directions per neighboring
/// pair), each with its own independently drawn weight.
fn collect_candidates(graph: &GridGraph, rng: &mut StdRng) -> Vec<Edge> {
    let mut candidates = Vec::with_capacity(4 * graph.vertex_count());
    for from in graph.positions() {
        for to in graph.neighbors(from) {
            candidates.push(Edge {
                from,
                to,
                weight: rng.random_range(0..WEIGHT_RANGE),
            });
        }
    }
    candidates
}
