use orx_priority_queue::*;
use tracing::debug;

use crate::geo::{Cost, INFINITY};
use crate::graph::{Graph, VertexId};
use crate::heap;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub src: VertexId,
    pub dst: VertexId,
}

impl Query {
    pub fn new(src: VertexId, dst: VertexId) -> Self {
        Self { src, dst }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryResult {
    /// Shortest distance and the vertices from source to destination inclusive.
    Reached { distance: Cost, path: Vec<VertexId> },
    Unreachable { src: VertexId, dst: VertexId },
}

impl QueryResult {
    pub fn distance(&self) -> Option<Cost> {
        match self {
            QueryResult::Reached { distance, .. } => Some(*distance),
            QueryResult::Unreachable { .. } => None,
        }
    }

    pub fn path(&self) -> Option<&[VertexId]> {
        match self {
            QueryResult::Reached { path, .. } => Some(path),
            QueryResult::Unreachable { .. } => None,
        }
    }
}

/// How the set of unfinalized vertices is kept ordered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Frontier {
    /// Array heap rebuilt in full after every relaxation batch.
    #[default]
    Rebuild,
    /// Indexed binary heap with decrease-key.
    DecreaseKey,
}

/// Per-query working arrays. Contents are overwritten at the start of each
/// query, so one workspace serves a whole batch but never two queries at once.
#[derive(Clone, Debug)]
pub struct Workspace {
    dist: Vec<Cost>,
    prev: Vec<VertexId>,
    heap: Vec<VertexId>,
}

impl Workspace {
    pub fn new(num_vertex: usize) -> Self {
        Self {
            dist: vec![INFINITY; num_vertex],
            prev: (0..num_vertex).collect(),
            heap: (0..num_vertex).collect(),
        }
    }

    fn reset(&mut self, src: VertexId) {
        self.dist.fill(INFINITY);
        for (v, (p, h)) in self.prev.iter_mut().zip(self.heap.iter_mut()).enumerate() {
            *p = v;
            *h = v;
        }
        self.dist[src] = 0;
    }

    /// Walks predecessors back from `dst`. The source is the vertex that is
    /// its own predecessor.
    fn path_to(&self, dst: VertexId) -> Vec<VertexId> {
        let mut path = vec![dst];
        let mut cur = dst;
        while self.prev[cur] != cur {
            cur = self.prev[cur];
            path.push(cur);
        }
        path.reverse();
        path
    }
}

pub struct Solver<'g> {
    graph: &'g Graph,
    frontier: Frontier,
    workspace: Workspace,
}

impl<'g> Solver<'g> {
    pub fn new(graph: &'g Graph, frontier: Frontier) -> Self {
        Self {
            graph,
            frontier,
            workspace: Workspace::new(graph.num_vertex()),
        }
    }

    pub fn frontier(&self) -> Frontier {
        self.frontier
    }

    pub fn solve(&mut self, src: VertexId, dst: VertexId) -> QueryResult {
        let n = self.graph.num_vertex();
        if src >= n || dst >= n {
            return QueryResult::Unreachable { src, dst };
        }
        if src == dst {
            return QueryResult::Reached {
                distance: 0,
                path: vec![src],
            };
        }

        self.workspace.reset(src);
        match self.frontier {
            Frontier::Rebuild => run_rebuild(self.graph, &mut self.workspace, dst),
            Frontier::DecreaseKey => run_decrease_key(self.graph, &mut self.workspace, src, dst),
        }

        if self.workspace.prev[dst] == dst {
            QueryResult::Unreachable { src, dst }
        } else {
            QueryResult::Reached {
                distance: self.workspace.dist[dst],
                path: self.workspace.path_to(dst),
            }
        }
    }
}

fn run_rebuild(graph: &Graph, ws: &mut Workspace, dst: VertexId) {
    let Workspace { dist, prev, heap } = ws;
    let mut len = heap.len();
    heap::build(heap, dist, len);

    while let Some(u) = heap::pop_min(heap, &mut len) {
        if u == dst || dist[u] == INFINITY {
            break;
        }
        for v in graph.neighbors(u) {
            let alt = dist[u] + graph.weight(u, v);
            if alt < dist[v] {
                dist[v] = alt;
                prev[v] = u;
            }
        }
        heap::build(heap, dist, len);
    }
}

fn run_decrease_key(graph: &Graph, ws: &mut Workspace, src: VertexId, dst: VertexId) {
    let Workspace { dist, prev, .. } = ws;
    let mut pq = BinaryHeapWithMap::<VertexId, Cost>::new();
    pq.decrease_key_or_push(&src, 0);

    while let Some((u, cost)) = pq.pop() {
        if u == dst {
            break;
        }
        for v in graph.neighbors(u) {
            let alt = cost + graph.weight(u, v);
            if alt < dist[v] {
                dist[v] = alt;
                prev[v] = u;
                pq.decrease_key_or_push(&v, alt);
            }
        }
    }
}

/// Answers `queries` in order, reusing one workspace for the whole batch.
pub fn solve_batch(graph: &Graph, queries: &[Query], frontier: Frontier) -> Vec<QueryResult> {
    let mut solver = Solver::new(graph, frontier);
    queries
        .iter()
        .map(|q| {
            let result = solver.solve(q.src, q.dst);
            debug!(src = q.src, dst = q.dst, distance = ?result.distance(), "query solved");
            result
        })
        .collect()
}
