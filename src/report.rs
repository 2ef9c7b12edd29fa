use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use csv::Writer;

use crate::dijkstra::QueryResult;

/// Writes one result as two lines: the distance and the path, or `INF` and
/// the query pair.
pub fn write_result<W: Write>(out: &mut W, result: &QueryResult) -> io::Result<()> {
    match result {
        QueryResult::Unreachable { src, dst } => {
            writeln!(out, "INF")?;
            writeln!(out, "{} {}", src, dst)
        }
        QueryResult::Reached { distance, path } => {
            writeln!(out, "{}", distance)?;
            writeln!(out, "{}", join_path(path))
        }
    }
}

pub fn write_results<W: Write>(out: &mut W, results: &[QueryResult]) -> io::Result<()> {
    for result in results {
        write_result(out, result)?;
    }
    out.flush()
}

fn join_path(path: &[usize]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// CSV export with one row per query: `src,dst,distance,path`.
/// Unreachable rows carry `inf` and an empty path.
pub fn write_csv(out_path: &Path, results: &[QueryResult]) -> Result<()> {
    let mut wtr = Writer::from_path(out_path)
        .with_context(|| format!("creating CSV {}", out_path.display()))?;
    wtr.write_record(["src", "dst", "distance", "path"])?;
    for result in results {
        match result {
            QueryResult::Unreachable { src, dst } => {
                wtr.write_record(&[src.to_string(), dst.to_string(), String::from("inf"), String::new()])?;
            }
            QueryResult::Reached { distance, path } => {
                // Reached paths are never empty.
                let src = path.first().copied().unwrap_or_default();
                let dst = path.last().copied().unwrap_or_default();
                wtr.write_record(&[
                    src.to_string(),
                    dst.to_string(),
                    distance.to_string(),
                    join_path(path),
                ])?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Wall-clock durations of the run phases.
#[derive(Copy, Clone, Debug, Default)]
pub struct Timings {
    pub input: Duration,
    pub query: Duration,
    pub total: Duration,
}

impl Timings {
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "input time: {:e}", self.input.as_secs_f64())?;
        writeln!(out, "query time: {:e}", self.query.as_secs_f64())?;
        writeln!(out, "total time: {:e}", self.total.as_secs_f64())
    }
}
