//! GridBayes CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use gb_grid::{marginal, HierarchicalBinomialModel};
use gb_viz::PosteriorReportArtifact;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridbayes")]
#[command(about = "GridBayes - grid-based hierarchical Bayesian updates")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the grid update and print a posterior summary
    Update {
        /// Grid resolution (cells per axis)
        #[arg(short, long, default_value = "100")]
        n: usize,

        /// Observed success count
        #[arg(long)]
        heads: u64,

        /// Observed failure count
        #[arg(long)]
        tails: u64,

        /// First shape of the Beta hyperprior on mu
        #[arg(long, default_value = "2.0")]
        hyper_a: f64,

        /// Second shape of the Beta hyperprior on mu
        #[arg(long, default_value = "2.0")]
        hyper_b: f64,

        /// Confidence scale linking theta to mu
        #[arg(long, default_value = "100.0")]
        confidence: f64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the grid update and emit the full plot artifact (grids + marginals)
    Report {
        /// Grid resolution (cells per axis)
        #[arg(short, long, default_value = "100")]
        n: usize,

        /// Observed success count
        #[arg(long)]
        heads: u64,

        /// Observed failure count
        #[arg(long)]
        tails: u64,

        /// First shape of the Beta hyperprior on mu
        #[arg(long, default_value = "2.0")]
        hyper_a: f64,

        /// Second shape of the Beta hyperprior on mu
        #[arg(long, default_value = "2.0")]
        hyper_b: f64,

        /// Confidence scale linking theta to mu
        #[arg(long, default_value = "100.0")]
        confidence: f64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match &cli.command {
        Commands::Update { n, heads, tails, hyper_a, hyper_b, confidence, output } => {
            cmd_update(*n, *heads, *tails, *hyper_a, *hyper_b, *confidence, output.as_ref())
        }
        Commands::Report { n, heads, tails, hyper_a, hyper_b, confidence, output } => {
            cmd_report(*n, *heads, *tails, *hyper_a, *hyper_b, *confidence, output.as_ref())
        }
    }
}

fn run_update(
    n: usize,
    heads: u64,
    tails: u64,
    hyper_a: f64,
    hyper_b: f64,
    confidence: f64,
) -> Result<gb_grid::PosteriorUpdate> {
    let model = HierarchicalBinomialModel::new(hyper_a, hyper_b, confidence, heads, tails)?;
    tracing::info!(n, heads, tails, "running grid update");
    let update = model.update(n)?;
    tracing::info!(evidence = update.evidence, "update complete");
    Ok(update)
}

fn cmd_update(
    n: usize,
    heads: u64,
    tails: u64,
    hyper_a: f64,
    hyper_b: f64,
    confidence: f64,
    output: Option<&PathBuf>,
) -> Result<()> {
    let u = run_update(n, heads, tails, hyper_a, hyper_b, confidence)?;

    let output_json = serde_json::json!({
        "n": n,
        "heads": heads,
        "tails": tails,
        "evidence": u.evidence,
        "posterior_theta_mode": marginal::mode(&u.theta_axis, &u.posterior_theta)?,
        "posterior_theta_mean": marginal::mean(&u.theta_axis, &u.posterior_theta)?,
        "posterior_mu_mode": marginal::mode(&u.mu_axis, &u.posterior_mu)?,
        "posterior_mu_mean": marginal::mean(&u.mu_axis, &u.posterior_mu)?,
        "prior_mu_mode": marginal::mode(&u.mu_axis, &u.prior_mu)?,
        "prior_mu_mean": marginal::mean(&u.mu_axis, &u.prior_mu)?,
    });

    write_json(output, output_json)
}

fn cmd_report(
    n: usize,
    heads: u64,
    tails: u64,
    hyper_a: f64,
    hyper_b: f64,
    confidence: f64,
    output: Option<&PathBuf>,
) -> Result<()> {
    let u = run_update(n, heads, tails, hyper_a, hyper_b, confidence)?;
    let artifact = PosteriorReportArtifact::from_update(&u)?;
    write_json(output, serde_json::to_value(artifact)?)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(&value)?;
    match output {
        Some(path) => {
            std::fs::write(path, pretty)?;
            tracing::info!(path = %path.display(), "results written");
        }
        None => println!("{}", pretty),
    }
    Ok(())
}
