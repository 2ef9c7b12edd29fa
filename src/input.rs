//! Readers for the graph and query files. Both are plain whitespace separated
//! integers; line breaks only matter for error messages.

use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use tracing::info;

use crate::dijkstra::Query;
use crate::error::{LoadError, QueryParseError};
use crate::geo::Point;
use crate::graph::{Graph, VertexId};

/// Why a token could not be taken from the input.
enum TokenError {
    Missing { line: usize },
    Invalid { line: usize, token: String },
}

/// Whitespace tokenizer that remembers which line each token came from.
struct Tokens<'a> {
    lines: std::str::Lines<'a>,
    current: SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            current: "".split_whitespace(),
            line: 0,
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        loop {
            if let Some(token) = self.current.next() {
                return Some((self.line, token));
            }
            self.current = self.lines.next()?.split_whitespace();
            self.line += 1;
        }
    }

    fn parse<T: FromStr>(&mut self) -> Result<(usize, T), TokenError> {
        match self.next_token() {
            Some((line, token)) => token
                .parse()
                .map(|value| (line, value))
                .map_err(|_| TokenError::Invalid {
                    line,
                    token: token.to_string(),
                }),
            None => Err(TokenError::Missing {
                line: self.line.max(1),
            }),
        }
    }
}

fn origin_of(path: &Path) -> String {
    path.display().to_string()
}

/// Reads and parses a graph file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let origin = origin_of(path);
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        origin: origin.clone(),
        source,
    })?;
    let graph = parse_graph(&text, &origin)?;
    info!(
        file = %origin,
        vertices = graph.num_vertex(),
        edges = graph.num_edge(),
        "graph loaded"
    );
    Ok(graph)
}

/// Parses `<num_vertex> <num_edge>`, then `num_vertex` lines of `<id> <x> <y>`
/// in any id order, then `num_edge` lines of `<u> <v>`.
pub fn parse_graph(text: &str, origin: &str) -> Result<Graph, LoadError> {
    let mut tokens = Tokens::new(text);
    let mut take = |field: &'static str| -> Result<(usize, i64), LoadError> {
        tokens.parse::<i64>().map_err(|e| match e {
            TokenError::Missing { line } => LoadError::MissingToken {
                origin: origin.to_string(),
                line,
                field,
            },
            TokenError::Invalid { line, token } => LoadError::InvalidToken {
                origin: origin.to_string(),
                line,
                field,
                token,
            },
        })
    };
    let count = |(line, value): (usize, i64), field: &'static str| -> Result<usize, LoadError> {
        usize::try_from(value).map_err(|_| LoadError::InvalidToken {
            origin: origin.to_string(),
            line,
            field,
            token: value.to_string(),
        })
    };
    let coordinate = |(line, value): (usize, i64), field: &'static str| -> Result<i32, LoadError> {
        i32::try_from(value).map_err(|_| LoadError::InvalidToken {
            origin: origin.to_string(),
            line,
            field,
            token: value.to_string(),
        })
    };

    let num_vertex = count(take("vertex count")?, "vertex count")?;
    let num_edge = count(take("edge count")?, "edge count")?;

    let vertex_id = |(line, value): (usize, i64)| -> Result<(usize, VertexId), LoadError> {
        match usize::try_from(value) {
            Ok(vertex) if vertex < num_vertex => Ok((line, vertex)),
            _ => Err(LoadError::VertexOutOfRange {
                origin: origin.to_string(),
                line,
                vertex: value,
                num_vertex,
            }),
        }
    };

    // Arrays are sized only once every declared record has been read, so a
    // huge count in a short file fails on the missing token instead.
    let mut records = Vec::with_capacity(num_vertex.min(1 << 20));
    for _ in 0..num_vertex {
        let (line, id) = vertex_id(take("vertex id")?)?;
        let x = coordinate(take("x coordinate")?, "x coordinate")?;
        let y = coordinate(take("y coordinate")?, "y coordinate")?;
        records.push((line, id, Point::new(x, y)));
    }

    let mut points = vec![Point::default(); num_vertex];
    let mut seen = vec![false; num_vertex];
    for (line, id, point) in records {
        if seen[id] {
            return Err(LoadError::DuplicateVertex {
                origin: origin.to_string(),
                line,
                vertex: id,
            });
        }
        seen[id] = true;
        points[id] = point;
    }

    let mut graph = Graph::new(points);
    for _ in 0..num_edge {
        let (line, u) = vertex_id(take("edge endpoint")?)?;
        let (_, v) = vertex_id(take("edge endpoint")?)?;
        graph
            .add_edge(u, v)
            .map_err(|e| LoadError::VertexOutOfRange {
                origin: origin.to_string(),
                line,
                vertex: e.u.max(e.v) as i64,
                num_vertex: e.num_vertex,
            })?;
    }
    Ok(graph)
}

/// Reads and parses a query file.
pub fn load_queries(path: impl AsRef<Path>) -> Result<Vec<Query>, QueryParseError> {
    let path = path.as_ref();
    let origin = origin_of(path);
    let text = fs::read_to_string(path).map_err(|source| QueryParseError::Io {
        origin: origin.clone(),
        source,
    })?;
    let queries = parse_queries(&text, &origin)?;
    info!(file = %origin, queries = queries.len(), "queries loaded");
    Ok(queries)
}

/// Parses `<num_query>` followed by `num_query` lines of `<src> <dst>`.
pub fn parse_queries(text: &str, origin: &str) -> Result<Vec<Query>, QueryParseError> {
    let mut tokens = Tokens::new(text);
    let mut take = |field: &'static str| -> Result<usize, QueryParseError> {
        tokens.parse::<usize>().map(|(_, v)| v).map_err(|e| match e {
            TokenError::Missing { line } => QueryParseError::MissingToken {
                origin: origin.to_string(),
                line,
                field,
            },
            TokenError::Invalid { line, token } => QueryParseError::InvalidToken {
                origin: origin.to_string(),
                line,
                field,
                token,
            },
        })
    };

    let num_query = take("query count")?;
    let mut queries = Vec::with_capacity(num_query.min(1 << 20));
    for _ in 0..num_query {
        let src = take("query source")?;
        let dst = take("query destination")?;
        queries.push(Query::new(src, dst));
    }
    Ok(queries)
}
