//! Repeated shortest-path queries over an undirected graph embedded in the
//! integer plane, with truncated Euclidean edge costs.

pub mod dijkstra;
pub mod error;
pub mod geo;
pub mod graph;
pub mod heap;
pub mod input;
pub mod report;

pub use dijkstra::{solve_batch, Frontier, Query, QueryResult, Solver};
pub use error::{LoadError, QueryParseError};
pub use geo::{euclidean, Cost, Point};
pub use graph::{Graph, VertexId};
