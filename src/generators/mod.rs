use rand::{SeedableRng, rngs::StdRng};

mod disjoint;
mod kruskal;

use kruskal::randomized_kruskal;

use crate::graph::{GraphError, GridGraph};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Builds a perfect maze: a grid graph whose surviving edges form a spanning
/// tree, so exactly one route exists between any two cells.
///
/// Dimensions are validated before anything is allocated. Pass a seed to make
/// the maze shape reproducible.
pub fn build_maze(width: u16, height: u16, seed: Option<u64>) -> Result<GridGraph, GraphError> {
    let mut graph = GridGraph::with_dimensions(width, height)?;
    let mut rng = get_rng(seed);
    randomized_kruskal(&mut graph, &mut rng);
    tracing::info!(width, height, "generated maze");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_maze_rejects_zero_dimensions() {
        assert!(build_maze(0, 3, None).is_err());
        assert!(build_maze(3, 0, None).is_err());
    }

    #[test]
    fn build_maze_produces_a_fully_edged_grid() {
        let graph = build_maze(4, 4, Some(1)).unwrap();
        let directed: usize = graph
            .positions()
            .map(|p| graph.vertex(p).out_edges().len())
            .sum();
        assert_eq!(directed, 2 * (16 - 1));
    }
}
