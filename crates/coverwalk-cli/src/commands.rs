//! Command handlers: solve one map or a whole directory of maps.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;

use coverwalk_core::{parse_graph, CoreConfig, SearchConfig, Solution, Solver, Vertex};

use crate::inputs::{discover, MapInputs};

/// Layers the config file and the `--threads` flag over the defaults.
pub fn resolve_search_config(
    config_path: Option<&Path>,
    threads: Option<usize>,
) -> Result<SearchConfig> {
    let mut config = CoreConfig::load(config_path).context("failed to load configuration")?;
    if threads.is_some() {
        config.threads = threads;
    }
    Ok(config.search_config())
}

/// Solves a single map file and prints the result.
pub fn cmd_run(file: &Path, search: &SearchConfig, as_json: bool) -> Result<()> {
    let inputs = MapInputs::from_path(file)?;
    run_one(&inputs, search, as_json)
}

/// Solves every date-prefixed map file in `dir`, in name order.
pub fn cmd_run_all(dir: &Path, search: &SearchConfig, as_json: bool) -> Result<()> {
    for path in discover(dir)? {
        let inputs = MapInputs::from_path(&path)?;
        run_one(&inputs, search, as_json)?;
    }
    Ok(())
}

fn run_one(inputs: &MapInputs, search: &SearchConfig, as_json: bool) -> Result<()> {
    let graph = parse_graph(inputs.definition())
        .with_context(|| format!("invalid graph definition in {}", inputs.name()))?;
    let start = Vertex::new(inputs.start())
        .with_context(|| format!("invalid start vertex in {}", inputs.name()))?;
    tracing::info!(file = inputs.name(), edges = graph.edge_count(), "map loaded");

    if !as_json {
        println!();
        println!("{} {} -- {}", inputs.name().bold(), start, graph);
    }

    let solver = Solver::with_config(graph, search.clone());
    let started = Instant::now();
    let solution = solver
        .solve(&start)
        .with_context(|| format!("search failed for {}", inputs.name()))?;
    let elapsed = started.elapsed();

    if as_json {
        print_json(inputs, &solution, elapsed.as_secs_f64())?;
    } else {
        println!("Finished in {:.3} seconds", elapsed.as_secs_f64());
        print_trace(&solution);
        println!("{} {}", "weight =".bold(), solution.weight().to_string().green());
    }
    Ok(())
}

fn print_trace(solution: &Solution) {
    let trace: Vec<String> = solution
        .trace()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("  {}", trace.join(" -> "));
}

fn print_json(inputs: &MapInputs, solution: &Solution, elapsed_secs: f64) -> Result<()> {
    let trace: Vec<String> = solution
        .trace()
        .iter()
        .map(ToString::to_string)
        .collect();
    let value = json!({
        "file": inputs.name(),
        "start": inputs.start(),
        "weight": solution.weight(),
        "trace": trace,
        "elapsed_secs": elapsed_secs,
    });
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}
