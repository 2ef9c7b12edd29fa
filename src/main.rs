use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use planar_paths::report::{self, Timings};
use planar_paths::{input, solve_batch, Frontier};

#[derive(Parser, Debug)]
#[command(name = "planar-paths")]
#[command(about = "Load a planar graph and answer a batch of shortest-path queries.", long_about = None)]
struct Cli {
    /// Graph file: counts, `id x y` lines, then `u v` edge lines
    graph: PathBuf,

    /// Query file: count, then `src dst` lines
    queries: PathBuf,

    /// Priority queue used for the frontier
    #[arg(short, long, value_enum, default_value_t = Frontier::Rebuild)]
    frontier: Frontier,

    /// Also write results as CSV (src, dst, distance, path)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print input, query and total times after the results
    #[arg(long, default_value_t = false)]
    timings: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    let input_start = Instant::now();
    let graph = input::load_graph(&cli.graph)
        .with_context(|| format!("loading graph {}", cli.graph.display()))?;
    let queries = input::load_queries(&cli.queries)
        .with_context(|| format!("reading queries {}", cli.queries.display()))?;
    let input_time = input_start.elapsed();

    let query_start = Instant::now();
    let results = solve_batch(&graph, &queries, cli.frontier);
    let query_time = query_start.elapsed();
    info!(
        queries = results.len(),
        frontier = ?cli.frontier,
        seconds = query_time.as_secs_f64(),
        "batch solved"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::write_results(&mut out, &results).context("writing results")?;

    if let Some(out_path) = &cli.out {
        report::write_csv(out_path, &results)?;
        info!(file = %out_path.display(), rows = results.len(), "wrote CSV");
    }

    if cli.timings {
        let timings = Timings {
            input: input_time,
            query: query_time,
            total: total_start.elapsed(),
        };
        timings.write(&mut out).context("writing timings")?;
        out.flush()?;
    }

    Ok(())
}
