use std::fmt;

use thiserror::Error;

/// Errors reported when a maze cannot be constructed from the given configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("maze dimensions must be at least 1x1, got {width}x{height}")]
    EmptyDimensions { width: u16, height: u16 },
}

/// Grid coordinates identifying a vertex. Unique per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub fn new(x: u16, y: u16) -> Self {
        Pos { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A directed edge between two adjacent vertices, weighted for spanning-tree selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: Pos,
    pub to: Pos,
    pub weight: u16,
}

/// A grid cell together with the outgoing edges that survived maze construction.
/// The edge list is empty until the generator prunes the candidate set.
#[derive(Debug)]
pub struct Vertex {
    pos: Pos,
    out_edges: Vec<Edge>,
}

impl Vertex {
    fn new(pos: Pos) -> Self {
        Vertex {
            pos,
            out_edges: Vec::new(),
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Outgoing edges in insertion order. After generation this is the vertex's
    /// degree in the spanning tree (1 to 4).
    pub fn out_edges(&self) -> &[Edge] {
        &self.out_edges
    }

    pub(crate) fn add_edge(&mut self, edge: Edge) {
        self.out_edges.push(edge);
    }
}

/// A rectangular grid of vertices stored row-major. Topology is fixed once the
/// generator has run; searches only read it.
#[derive(Debug)]
pub struct GridGraph {
    width: u16,
    height: u16,
    vertices: Vec<Vertex>,
}

impl GridGraph {
    /// Allocates the vertex grid with no edges. The generator fills the edges in.
    pub(crate) fn with_dimensions(width: u16, height: u16) -> Result<Self, GraphError> {
        if width == 0 || height == 0 {
            return Err(GraphError::EmptyDimensions { width, height });
        }
        let mut vertices = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                vertices.push(Vertex::new(Pos::new(x, y)));
            }
        }
        Ok(GridGraph {
            width,
            height,
            vertices,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The top-left corner, used as the search source.
    pub fn top_left(&self) -> Pos {
        Pos::new(0, 0)
    }

    /// The bottom-right corner, used as the search target.
    pub fn bottom_right(&self) -> Pos {
        Pos::new(self.width - 1, self.height - 1)
    }

    pub fn is_in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn ravel_index(&self, pos: Pos) -> usize {
        // Overflow-safe since coordinates are u16 (assuming usize is at least 32 bits)
        pos.y as usize * self.width as usize + pos.x as usize
    }

    pub fn vertex(&self, pos: Pos) -> &Vertex {
        &self[pos]
    }

    pub(crate) fn vertex_mut(&mut self, pos: Pos) -> &mut Vertex {
        if !self.is_in_bounds(pos) {
            panic!("The given coordinate {pos} is out of bounds");
        }
        let index = self.ravel_index(pos);
        &mut self.vertices[index]
    }

    /// All vertex positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos::new(x, y)))
    }

    /// In-bounds cardinal neighbors of a cell, in left/right/up/down order.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        let Pos { x, y } = pos;
        // Wrapping x - 1 or y - 1 to u16::MAX underflow-safely falls out of the
        // bounds filter below; saturating x + 1 or y + 1 does the same at the top end.
        [
            Pos::new(x.wrapping_sub(1), y),
            Pos::new(x.saturating_add(1), y),
            Pos::new(x, y.wrapping_sub(1)),
            Pos::new(x, y.saturating_add(1)),
        ]
        .into_iter()
        .filter(move |&p| self.is_in_bounds(p) && p != pos)
    }

    /// Whether the spanning tree carries an edge from `a` to `b`.
    pub fn connected(&self, a: Pos, b: Pos) -> bool {
        self[a].out_edges.iter().any(|e| e.to == b)
    }
}

impl std::ops::Index<Pos> for GridGraph {
    type Output = Vertex;

    fn index(&self, pos: Pos) -> &Self::Output {
        if !self.is_in_bounds(pos) {
            panic!("The given coordinate {pos} is out of bounds");
        }
        &self.vertices[self.ravel_index(pos)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_are_laid_out_row_major() {
        let graph = GridGraph::with_dimensions(3, 2).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        let positions: Vec<Pos> = graph.positions().collect();
        assert_eq!(positions[0], Pos::new(0, 0));
        assert_eq!(positions[1], Pos::new(1, 0));
        assert_eq!(positions[3], Pos::new(0, 1));
        for pos in positions {
            assert_eq!(graph.vertex(pos).pos(), pos);
            assert!(graph.vertex(pos).out_edges().is_empty());
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            GridGraph::with_dimensions(0, 4).unwrap_err(),
            GraphError::EmptyDimensions { width: 0, height: 4 }
        );
        assert_eq!(
            GridGraph::with_dimensions(4, 0).unwrap_err(),
            GraphError::EmptyDimensions { width: 4, height: 0 }
        );
    }

    #[test]
    fn corner_and_interior_neighbor_counts() {
        let graph = GridGraph::with_dimensions(3, 3).unwrap();
        assert_eq!(graph.neighbors(Pos::new(0, 0)).count(), 2);
        assert_eq!(graph.neighbors(Pos::new(1, 0)).count(), 3);
        assert_eq!(graph.neighbors(Pos::new(1, 1)).count(), 4);
        assert_eq!(graph.neighbors(Pos::new(2, 2)).count(), 2);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let graph = GridGraph::with_dimensions(1, 1).unwrap();
        assert_eq!(graph.neighbors(Pos::new(0, 0)).count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_vertex_access_panics() {
        let graph = GridGraph::with_dimensions(2, 2).unwrap();
        let _ = graph.vertex(Pos::new(2, 0));
    }

    #[test]
    fn connectivity_follows_inserted_edges() {
        let mut graph = GridGraph::with_dimensions(2, 1).unwrap();
        let (a, b) = (Pos::new(0, 0), Pos::new(1, 0));
        assert!(!graph.connected(a, b));
        graph.vertex_mut(a).add_edge(Edge {
            from: a,
            to: b,
            weight: 7,
        });
        assert!(graph.connected(a, b));
        assert!(!graph.connected(b, a));
    }
}
