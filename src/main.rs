use mazeweave::{app, generators};

fn main() -> std::io::Result<()> {
    let _log_guard = init_logging();

    let mut input = String::new();
    println!("Enter maze dimensions (width height):");
    std::io::stdin().read_line(&mut input)?;

    // Parse the input dimensions
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u16>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for width and height.");
        return Ok(());
    }
    let (width, height) = (dims[0], dims[1]);

    let graph = match generators::build_maze(width, height, None) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    app::run(&graph)
}

/// Sends log lines to a file instead of the terminal, which is busy drawing
/// the maze in raw mode. The guard must stay alive until exit so buffered
/// lines are flushed. Level defaults to `info`, overridable via `RUST_LOG`.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazeweave.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
