//! LinkRank CLI — ranks the pages of an HTML corpus with both PageRank estimators

use anyhow::Context;
use clap::Parser;
use comfy_table::{ContentArrangement, Table};
use linkrank::{iterate_rank, sample_rank, Corpus, RankConfig, RankReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank for a directory of HTML pages")]
struct Cli {
    /// Directory containing the .html pages
    corpus: PathBuf,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Damping factor, strictly between 0 and 1
    #[arg(long)]
    damping: Option<f64>,

    /// Random-walk length for the sampling estimator
    #[arg(long)]
    samples: Option<usize>,

    /// Convergence threshold for the iterative estimator
    #[arg(long)]
    tolerance: Option<f64>,

    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    // Quiet by default so reports stay clean; raise with RUST_LOG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> anyhow::Result<RankConfig> {
    let mut config = match &cli.config {
        Some(path) => RankConfig::from_yaml_file(path)?,
        None => RankConfig::default(),
    };

    if let Some(damping) = cli.damping {
        config.damping_factor = damping;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;
    let graph = Corpus::crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?
        .into_graph();
    info!("Ranking {} pages with damping {}", graph.node_count(), config.damping_factor);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sampled = sample_rank(&graph, &config.sampling_config(), &mut rng)?;
    let iterated = iterate_rank(&graph, &config.pagerank_config())?;

    let reports = [
        RankReport::sampling(config.samples, &sampled),
        RankReport::iteration(&iterated),
    ];

    match cli.format {
        OutputFormat::Text => {
            for report in &reports {
                print!("{}", report.render_text());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Table => {
            for report in &reports {
                print_table(report);
            }
        }
    }

    Ok(())
}

fn print_table(report: &RankReport) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["page", "rank"]);

    for entry in &report.entries {
        table.add_row(vec![entry.page.clone(), format!("{:.4}", entry.rank)]);
    }

    println!("{}", report.title);
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "linkrank", "corpus", "--damping", "0.5", "--samples", "200", "--seed", "3",
        ]);
        let config = resolve_config(&cli).unwrap();

        assert_eq!(config.damping_factor, 0.5);
        assert_eq!(config.samples, 200);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.tolerance, 0.001);
    }

    #[test]
    fn test_invalid_damping_rejected() {
        let cli = Cli::parse_from(["linkrank", "corpus", "--damping", "1.2"]);
        assert!(resolve_config(&cli).is_err());
    }
}
