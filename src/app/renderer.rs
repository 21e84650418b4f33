use std::io::{Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use super::cell::Cell;
use crate::graph::{GridGraph, Pos};

/// Draws a maze as a wall grid: cells sit at odd slot coordinates, the slots
/// between two adjacent cells are open exactly when the spanning tree joins
/// them, and everything else is wall. One slot is `Cell::CELL_WIDTH` terminal
/// columns wide.
pub struct Renderer {
    stdout: Stdout,
    /// Maze dimensions in cells (the wall grid is `2n + 1` slots per axis).
    width: u16,
    height: u16,
}

impl Renderer {
    pub fn new(width: u16, height: u16) -> Self {
        Renderer {
            stdout: std::io::stdout(),
            width,
            height,
        }
    }

    /// Wall-grid width in slots. Saturates so oversized dimensions fail the
    /// terminal-size check instead of overflowing.
    pub fn grid_width(&self) -> u16 {
        self.width.saturating_mul(2).saturating_add(1)
    }

    /// Wall-grid height in slots.
    pub fn grid_height(&self) -> u16 {
        self.height.saturating_mul(2).saturating_add(1)
    }

    /// The wall-grid slot holding a maze cell.
    fn cell_slot(pos: Pos) -> (u16, u16) {
        (pos.x * 2 + 1, pos.y * 2 + 1)
    }

    /// The wall-grid slot between two adjacent maze cells.
    fn passage_slot(a: Pos, b: Pos) -> (u16, u16) {
        (a.x + b.x + 1, a.y + b.y + 1)
    }

    fn put(&mut self, slot: (u16, u16), cell: Cell) -> std::io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(slot.0 * Cell::CELL_WIDTH, slot.1),
            style::Print(cell)
        )
    }

    /// Draws the whole maze, erasing any traversal markings from earlier runs.
    /// Source and target corners are marked afterwards by the caller.
    pub fn draw_maze(&mut self, graph: &GridGraph) -> std::io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(0, 0))?;
        for sy in 0..self.grid_height() {
            queue!(self.stdout, cursor::MoveTo(0, sy))?;
            for sx in 0..self.grid_width() {
                let cell = self.slot_contents(graph, sx, sy);
                queue!(self.stdout, style::Print(cell))?;
            }
        }
        self.stdout.flush()
    }

    /// What an untouched maze shows at a wall-grid slot.
    fn slot_contents(&self, graph: &GridGraph, sx: u16, sy: u16) -> Cell {
        match (sx % 2, sy % 2) {
            (1, 1) => Cell::Open,
            // Slot between horizontally adjacent cells
            (0, 1) if sx > 0 && sx < self.grid_width() - 1 => {
                let left = Pos::new(sx / 2 - 1, sy / 2);
                let right = Pos::new(sx / 2, sy / 2);
                if graph.connected(left, right) {
                    Cell::Open
                } else {
                    Cell::Wall
                }
            }
            // Slot between vertically adjacent cells
            (1, 0) if sy > 0 && sy < self.grid_height() - 1 => {
                let above = Pos::new(sx / 2, sy / 2 - 1);
                let below = Pos::new(sx / 2, sy / 2);
                if graph.connected(above, below) {
                    Cell::Open
                } else {
                    Cell::Wall
                }
            }
            _ => Cell::Wall,
        }
    }

    /// Repaints a single maze cell and flushes immediately, one animation frame.
    pub fn mark_cell(&mut self, pos: Pos, cell: Cell) -> std::io::Result<()> {
        self.put(Self::cell_slot(pos), cell)?;
        self.stdout.flush()
    }

    /// Paints the passage between two adjacent cells as part of the solution.
    pub fn mark_passage(&mut self, a: Pos, b: Pos, cell: Cell) -> std::io::Result<()> {
        self.put(Self::passage_slot(a, b), cell)?;
        self.stdout.flush()
    }

    /// Replaces the status line below the maze.
    pub fn status(&mut self, message: &str) -> std::io::Result<()> {
        let row = self.grid_height();
        queue!(
            self.stdout,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::CurrentLine),
            style::PrintStyledContent(message.with(Color::Yellow).attribute(Attribute::Bold))
        )?;
        self.stdout.flush()
    }

    /// Leaves the cursor on the line after the status row so shell output
    /// resumes below the maze.
    pub fn finish(&mut self) -> std::io::Result<()> {
        let row = self.grid_height().saturating_add(1);
        queue!(self.stdout, cursor::MoveTo(0, row))?;
        self.stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_slots_are_odd_coordinates() {
        assert_eq!(Renderer::cell_slot(Pos::new(0, 0)), (1, 1));
        assert_eq!(Renderer::cell_slot(Pos::new(3, 2)), (7, 5));
    }

    #[test]
    fn passage_slot_is_the_midpoint_of_the_two_cell_slots() {
        let a = Pos::new(1, 1);
        let right = Pos::new(2, 1);
        let below = Pos::new(1, 2);
        assert_eq!(Renderer::passage_slot(a, right), (4, 3));
        assert_eq!(Renderer::passage_slot(a, below), (3, 4));
        // Symmetric in argument order
        assert_eq!(
            Renderer::passage_slot(right, a),
            Renderer::passage_slot(a, right)
        );
    }

    #[test]
    fn wall_grid_dimensions_double_and_add_one() {
        let renderer = Renderer::new(4, 3);
        assert_eq!(renderer.grid_width(), 9);
        assert_eq!(renderer.grid_height(), 7);
    }

    #[test]
    fn untouched_slots_classify_as_cells_walls_and_passages() {
        let mut graph = crate::graph::GridGraph::with_dimensions(2, 2).unwrap();
        let (a, b) = (Pos::new(0, 0), Pos::new(1, 0));
        graph.vertex_mut(a).add_edge(crate::graph::Edge {
            from: a,
            to: b,
            weight: 0,
        });
        let renderer = Renderer::new(2, 2);

        // Lattice points and the outer border are always wall
        assert_eq!(renderer.slot_contents(&graph, 0, 0), Cell::Wall);
        assert_eq!(renderer.slot_contents(&graph, 2, 2), Cell::Wall);
        assert_eq!(renderer.slot_contents(&graph, 0, 1), Cell::Wall);
        // Cell slots are open
        assert_eq!(renderer.slot_contents(&graph, 1, 1), Cell::Open);
        // Passage between the connected pair is open, the unconnected one walled
        assert_eq!(renderer.slot_contents(&graph, 2, 1), Cell::Open);
        assert_eq!(renderer.slot_contents(&graph, 1, 2), Cell::Wall);
    }
}
