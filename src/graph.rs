use crate::error::EdgeOutOfRange;
use crate::geo::{self, Cost, Point};

pub type VertexId = usize;

/// Undirected graph over points of the plane. Each edge is stored in the
/// neighbor lists of both endpoints; edge weight is derived from coordinates.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    points: Vec<Point>,
    neighbors: Vec<Vec<VertexId>>,
    num_edge: usize,
}

impl Graph {
    pub fn new(points: Vec<Point>) -> Self {
        let neighbors = vec![Vec::new(); points.len()];
        Self {
            points,
            neighbors,
            num_edge: 0,
        }
    }

    pub fn with_edges(points: Vec<Point>, edges: &[(VertexId, VertexId)]) -> Result<Self, EdgeOutOfRange> {
        let mut graph = Graph::new(points);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds `v` to `u`'s neighbors and `u` to `v`'s. Parallel edges and self
    /// loops are kept as given.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), EdgeOutOfRange> {
        let num_vertex = self.num_vertex();
        if u >= num_vertex || v >= num_vertex {
            return Err(EdgeOutOfRange { u, v, num_vertex });
        }
        self.neighbors[u].push(v);
        self.neighbors[v].push(u);
        self.num_edge += 1;
        Ok(())
    }

    pub fn num_vertex(&self) -> usize {
        self.points.len()
    }

    pub fn num_edge(&self) -> usize {
        self.num_edge
    }

    pub fn point(&self, v: VertexId) -> Point {
        self.points[v]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Neighbors of `v`, most recently inserted edge first.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors[v].iter().rev().copied()
    }

    pub fn weight(&self, u: VertexId, v: VertexId) -> Cost {
        geo::euclidean(self.points[u], self.points[v])
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors
            .get(u)
            .map(|adj| adj.contains(&v))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let points = vec![Point::new(0, 0), Point::new(3, 4), Point::new(6, 8)];
        Graph::with_edges(points, &[(0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn edges_are_undirected() {
        let g = triangle();
        assert_eq!(g.num_vertex(), 3);
        assert_eq!(g.num_edge(), 2);
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(1, 0));
        assert!(g.has_edge(2, 1));
        assert!(!g.has_edge(0, 2));
        assert_eq!(g.weight(0, 1), 5);
        assert_eq!(g.weight(2, 1), 5);
    }

    #[test]
    fn newest_neighbor_first() {
        let g = triangle();
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![2, 0]);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = triangle();
        g.add_edge(0, 1).unwrap();
        assert_eq!(g.num_edge(), 3);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![1, 1]);
    }

    #[test]
    fn rejects_unknown_vertex() {
        let mut g = triangle();
        let err = g.add_edge(0, 3).unwrap_err();
        assert_eq!(err, EdgeOutOfRange { u: 0, v: 3, num_vertex: 3 });
        assert_eq!(g.num_edge(), 2);
        assert!(!g.has_edge(7, 0));
    }
}
