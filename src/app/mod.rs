mod cell;
mod renderer;

use std::io::{Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEventKind},
    queue,
    terminal::{self, ClearType},
};

use cell::Cell;
use renderer::Renderer;

use crate::{
    graph::GridGraph,
    solvers::{self, SearchMode},
};

/// How long one replay frame is shown by default.
const DEFAULT_FRAME_TIME: Duration = Duration::from_millis(25);
const MIN_FRAME_TIME: Duration = Duration::from_millis(1);
const MAX_FRAME_TIME: Duration = Duration::from_millis(400);

const IDLE_CONTROLS: &str = "b: breadth-first  d: depth-first  ↑/↓: speed  Esc: exit";

/// Whether a replay keeps going after a frame's key handling.
enum ReplayControl {
    Continue,
    Abort,
}

/// Runs the interactive visualizer over a finished maze: draws the wall grid,
/// then answers key presses with full searches whose visited order and
/// solution path replay frame by frame. The search itself is a single
/// synchronous call; only the drawing of its outputs is spread over frames.
pub fn run(graph: &GridGraph) -> std::io::Result<()> {
    let mut renderer = Renderer::new(graph.width(), graph.height());

    // Refuse to enter raw mode when the maze cannot fit on screen
    let (term_width, term_height) = terminal::size()?;
    if term_width < renderer.grid_width().saturating_mul(Cell::CELL_WIDTH)
        || term_height < renderer.grid_height().saturating_add(1)
    {
        eprintln!(
            "Terminal size ({}x{}) is too small to display a {}x{} maze. \
Resize the terminal or choose smaller dimensions.",
            term_width,
            term_height,
            graph.width(),
            graph.height()
        );
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    setup_terminal(&mut stdout)?;
    tracing::info!("started visualizer loop");
    let outcome = event_loop(graph, &mut renderer);
    restore_terminal(&mut stdout)?;
    tracing::info!("exited visualizer loop");
    outcome
}

/// Set a panic hook to restore terminal state on panic, so a defect never
/// leaves the shell stuck in raw mode or the alternate screen.
fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
        hook(panic_info);
    }));
}

/// Setup terminal in raw mode and enter alternate screen
/// Also sets a panic hook to restore terminal on panic
fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    set_panic_hook();
    queue!(
        stdout,
        terminal::EnterAlternateScreen,
        terminal::Clear(ClearType::All),
        cursor::Hide,
        cursor::MoveTo(0, 0)
    )?;
    stdout.flush()?;
    Ok(())
}

/// Restore terminal to original state
/// Leave alternate screen and disable raw mode
fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
    queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
    stdout.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

fn event_loop(graph: &GridGraph, renderer: &mut Renderer) -> std::io::Result<()> {
    let mut frame_time = DEFAULT_FRAME_TIME;
    reset_view(graph, renderer)?;
    renderer.status(IDLE_CONTROLS)?;

    loop {
        let event::Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('b') => {
                animate(graph, SearchMode::BreadthFirst, renderer, &mut frame_time)?
            }
            KeyCode::Char('d') => {
                animate(graph, SearchMode::DepthFirst, renderer, &mut frame_time)?
            }
            KeyCode::Up => frame_time = faster(frame_time),
            KeyCode::Down => frame_time = slower(frame_time),
            _ => {}
        }
    }
    renderer.finish()
}

/// Redraws the untouched maze with its source and target corners marked.
fn reset_view(graph: &GridGraph, renderer: &mut Renderer) -> std::io::Result<()> {
    renderer.draw_maze(graph)?;
    renderer.mark_cell(graph.top_left(), Cell::Source)?;
    renderer.mark_cell(graph.bottom_right(), Cell::Target)?;
    Ok(())
}

/// Runs one search and replays it: the visited order first, one cell per
/// frame, then the reconstructed route from the target back to the source.
fn animate(
    graph: &GridGraph,
    mode: SearchMode,
    renderer: &mut Renderer,
    frame_time: &mut Duration,
) -> std::io::Result<()> {
    let source = graph.top_left();
    let target = graph.bottom_right();

    reset_view(graph, renderer)?;
    renderer.status(&format!("Running {mode}... Esc cancels the replay"))?;

    let outcome = solvers::search(graph, source, target, mode);
    tracing::info!(
        %mode,
        found = outcome.found,
        discovered = outcome.visited.len(),
        "replaying search"
    );

    for &pos in &outcome.visited {
        if pos != source && pos != target {
            renderer.mark_cell(pos, Cell::Explored)?;
        }
        if let ReplayControl::Abort = frame_pause(frame_time)? {
            renderer.status(IDLE_CONTROLS)?;
            return Ok(());
        }
    }

    if !outcome.found {
        renderer.status(&format!("No path found. {IDLE_CONTROLS}"))?;
        return Ok(());
    }

    let path = solvers::reconstruct_path(target, &outcome.parents, source);
    for pair in path.windows(2) {
        if pair[0] != target {
            renderer.mark_cell(pair[0], Cell::Route)?;
        }
        renderer.mark_passage(pair[0], pair[1], Cell::Route)?;
        if let ReplayControl::Abort = frame_pause(frame_time)? {
            renderer.status(IDLE_CONTROLS)?;
            return Ok(());
        }
    }
    renderer.mark_cell(source, Cell::Source)?;
    renderer.mark_cell(target, Cell::Target)?;
    renderer.status(&format!("Path found, {} cells. {IDLE_CONTROLS}", path.len()))?;
    Ok(())
}

/// Waits out one frame, servicing speed keys; Esc aborts the replay.
fn frame_pause(frame_time: &mut Duration) -> std::io::Result<ReplayControl> {
    if !event::poll(*frame_time)? {
        return Ok(ReplayControl::Continue);
    }
    if let event::Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match key.code {
                KeyCode::Esc => return Ok(ReplayControl::Abort),
                KeyCode::Up => *frame_time = faster(*frame_time),
                KeyCode::Down => *frame_time = slower(*frame_time),
                _ => {}
            }
        }
    }
    Ok(ReplayControl::Continue)
}

fn faster(frame_time: Duration) -> Duration {
    (frame_time / 2).max(MIN_FRAME_TIME)
}

fn slower(frame_time: Duration) -> Duration {
    (frame_time * 2).min(MAX_FRAME_TIME)
}
