//! Monte-Carlo PageRank estimator
//!
//! Walks the graph with the random-surfer transition model and reports each
//! page's share of visits. Each step is drawn in two stages (follow a link
//! with probability `damping`, otherwise jump anywhere), which gives the same
//! distribution as `transition_weights` without materialising it.

use super::common::{LinkGraph, RankMap};
use super::error::{check_damping, check_samples, AlgoError, AlgoResult};
use rand::Rng;
use tracing::debug;

/// Sampling configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Length of the walk, counting the starting page
    pub samples: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            samples: 10_000,
        }
    }
}

impl SamplingConfig {
    pub fn validate(&self) -> AlgoResult<()> {
        check_damping(self.damping_factor)?;
        check_samples(self.samples)
    }
}

/// Estimate PageRank as visit frequencies of a random walk of `config.samples` pages.
///
/// Every page of the graph appears in the result; pages the walk never
/// reached carry 0.0.
pub fn sample_rank<R: Rng + ?Sized>(
    graph: &LinkGraph,
    config: &SamplingConfig,
    rng: &mut R,
) -> AlgoResult<RankMap> {
    config.validate()?;
    let n = graph.node_count();
    if n == 0 {
        return Err(AlgoError::EmptyGraph);
    }

    let mut visits = vec![0usize; n];

    let mut current = rng.gen_range(0..n);
    visits[current] += 1;

    for _ in 1..config.samples {
        current = next_page(graph, current, config.damping_factor, rng)?;
        visits[current] += 1;
    }

    debug!(
        samples = config.samples,
        visited = visits.iter().filter(|&&v| v > 0).count(),
        pages = n,
        "Random walk finished"
    );

    let total = config.samples as f64;
    let scores: Vec<f64> = visits.into_iter().map(|v| v as f64 / total).collect();
    Ok(graph.to_rank_map(&scores))
}

/// Draw the page visited after `current`.
fn next_page<R: Rng + ?Sized>(
    graph: &LinkGraph,
    current: usize,
    damping: f64,
    rng: &mut R,
) -> AlgoResult<usize> {
    let links = graph.successors(current);
    if links.is_empty() || !rng.gen_bool(damping) {
        return Ok(rng.gen_range(0..graph.node_count()));
    }

    links
        .get(rng.gen_range(0..links.len()))
        .copied()
        .ok_or_else(|| {
            AlgoError::InvariantViolation(format!(
                "link draw outside the links of {}",
                graph.page(current)
            ))
        })
}
