use mazeweave::{
    generators::build_maze,
    solvers::{SearchMode, search},
};

/// Headless profiling run: generate and solve large mazes without touching
/// the terminal. Takes an optional iteration count as the first argument.
fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let iterations = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);

    for _ in 0..iterations {
        let graph = build_maze(200, 200, None).expect("dimensions are nonzero");
        let outcome = search(
            &graph,
            graph.top_left(),
            graph.bottom_right(),
            SearchMode::BreadthFirst,
        );
        assert!(outcome.found);
    }
}
