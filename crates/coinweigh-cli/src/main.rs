//! `coinweigh`: print a minimal weighing strategy for one counterfeit coin.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use coinweigh_core::{solve_sequential_with, solve_static_with, SolveError, SolverConfig};
use coinweigh_render::{render_json, render_static, render_tree};

#[derive(Parser, Debug)]
#[command(name = "coinweigh")]
#[command(about = "Shortest balance-scale strategy to find one counterfeit coin among n")]
#[command(version)]
struct Cli {
    /// Number of coins (more than 2)
    #[arg(short = 'n', long = "coins", default_value_t = 12)]
    coins: u32,

    /// Fixed weighings decoded by table instead of an adaptive tree
    #[arg(short = 's', long = "static")]
    static_strategy: bool,

    /// Only print the number of weighings
    #[arg(short, long)]
    quiet: bool,

    /// Print the strategy as JSON
    #[arg(long)]
    json: bool,

    /// Solver configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Worker threads for the sequential solver (default: one per core)
    #[arg(long)]
    threads: Option<usize>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SolverConfig> {
    let Some(path) = path else {
        return Ok(SolverConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Strategy text plus the weighing count.
fn run(cli: &Cli, config: &SolverConfig) -> anyhow::Result<(String, usize)> {
    if cli.static_strategy {
        let solution = solve_static_with(cli.coins, config)?;
        let body = if cli.json {
            render_json(&solution)?
        } else {
            format!(
                "Static weigh strategy for {} coins:\n\n{}",
                cli.coins,
                render_static(&solution.table)?
            )
        };
        Ok((body, solution.weighings))
    } else {
        let solution = solve_sequential_with(cli.coins, config)?;
        let body = if cli.json {
            render_json(&solution)?
        } else {
            format!(
                "Weigh strategy for {} coins:\n\n{}",
                cli.coins,
                render_tree(&solution.tree)
            )
        };
        Ok((body, solution.weighings))
    }
}

fn is_input_error(e: &anyhow::Error) -> bool {
    e.downcast_ref::<SolveError>()
        .is_some_and(SolveError::is_input_error)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_ref())?;
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring worker threads")?;
    }

    let started = Instant::now();
    let (body, weighings) = match run(&cli, &config) {
        Ok(result) => result,
        Err(e) if is_input_error(&e) => {
            println!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.context("solver failed")),
    };
    let elapsed = started.elapsed();
    tracing::info!(
        coins = cli.coins,
        weighings,
        elapsed_ms = elapsed.as_millis() as u64,
        "strategy computed"
    );

    if !cli.quiet {
        println!("{body}");
    }
    println!(
        "\nRequired {weighings} weighings. Time: {} seconds.",
        elapsed.as_secs()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["coinweigh", "-n", "15", "-s", "-q"]).unwrap();
        assert_eq!(cli.coins, 15);
        assert!(cli.static_strategy);
        assert!(cli.quiet);
    }

    #[test]
    fn test_run_reports_weighings() {
        let cli = Cli::try_parse_from(["coinweigh", "-n", "13"]).unwrap();
        let (body, weighings) = run(&cli, &SolverConfig::default()).unwrap();
        assert_eq!(weighings, 4);
        assert!(body.starts_with("Weigh strategy for 13 coins:"));
    }

    #[test]
    fn test_run_rejects_two_coins() {
        let cli = Cli::try_parse_from(["coinweigh", "-n", "2", "-s"]).unwrap();
        let err = run(&cli, &SolverConfig::default()).unwrap_err();
        assert!(is_input_error(&err));
    }
}
