//! Fatal input errors. Both kinds abort the run before any result is written.

use std::io;
use thiserror::Error;

/// Failure while reading or building the graph.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{origin}: cannot read graph: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("{origin}:{line}: missing {field}")]
    MissingToken {
        origin: String,
        line: usize,
        field: &'static str,
    },

    #[error("{origin}:{line}: invalid {field} {token:?}")]
    InvalidToken {
        origin: String,
        line: usize,
        field: &'static str,
        token: String,
    },

    #[error("{origin}:{line}: vertex {vertex} is outside 0..{num_vertex}")]
    VertexOutOfRange {
        origin: String,
        line: usize,
        vertex: i64,
        num_vertex: usize,
    },

    #[error("{origin}:{line}: vertex {vertex} declared twice")]
    DuplicateVertex {
        origin: String,
        line: usize,
        vertex: usize,
    },
}

/// Failure while reading the query batch.
#[derive(Debug, Error)]
pub enum QueryParseError {
    #[error("{origin}: cannot read queries: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("{origin}:{line}: missing {field}")]
    MissingToken {
        origin: String,
        line: usize,
        field: &'static str,
    },

    #[error("{origin}:{line}: invalid {field} {token:?}")]
    InvalidToken {
        origin: String,
        line: usize,
        field: &'static str,
        token: String,
    },
}

/// Raised by the graph when an edge names a vertex it does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("edge ({u}, {v}) references a vertex outside 0..{num_vertex}")]
pub struct EdgeOutOfRange {
    pub u: usize,
    pub v: usize,
    pub num_vertex: usize,
}
