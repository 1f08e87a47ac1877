//! PageRank by fixed-point iteration
//!
//! Solves `rank(p) = (1 - d) / N + d * sum(rank(q) / out(q))` over the pages
//! `q` linking to `p`. Dangling pages are treated as linking to every page,
//! themselves included, so each one hands `rank / N` to all pages.

use super::common::{LinkGraph, RankMap};
use super::distribution::{within_tolerance, DEFAULT_TOLERANCE};
use super::error::{check_damping, check_tolerance, AlgoError, AlgoResult};
use tracing::debug;

/// PageRank configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Largest per-page change between two sweeps that counts as converged
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> AlgoResult<()> {
        check_damping(self.damping_factor)?;
        check_tolerance(self.tolerance)
    }
}

/// Calculate PageRank for the graph, iterating until no page moves by more
/// than `config.tolerance` in one sweep.
pub fn iterate_rank(graph: &LinkGraph, config: &PageRankConfig) -> AlgoResult<RankMap> {
    config.validate()?;
    let n = graph.node_count();
    if n == 0 {
        return Err(AlgoError::EmptyGraph);
    }

    let mut scores = vec![1.0 / n as f64; n];
    let mut next_scores = vec![0.0; n];
    let mut iterations = 0usize;

    loop {
        iterations += 1;
        relax(graph, &scores, &mut next_scores, config.damping_factor);

        let converged = within_tolerance(&scores, &next_scores, config.tolerance);
        std::mem::swap(&mut scores, &mut next_scores);

        if converged {
            break;
        }
    }

    debug!(iterations, pages = n, "PageRank iteration converged");

    Ok(graph.to_rank_map(&scores))
}

/// Apply one synchronous relaxation sweep to an existing rank mapping.
///
/// `ranks` must hold a value for every page of the graph.
pub fn pagerank_step(graph: &LinkGraph, ranks: &RankMap, damping: f64) -> AlgoResult<RankMap> {
    check_damping(damping)?;
    if graph.is_empty() {
        return Err(AlgoError::EmptyGraph);
    }

    let scores = graph
        .pages()
        .iter()
        .map(|page| {
            ranks
                .get(page)
                .copied()
                .ok_or_else(|| AlgoError::UnknownPage(page.clone()))
        })
        .collect::<AlgoResult<Vec<f64>>>()?;

    let mut next_scores = vec![0.0; scores.len()];
    relax(graph, &scores, &mut next_scores, damping);
    Ok(graph.to_rank_map(&next_scores))
}

/// Compute every entry of `next` from `scores` only, never from values
/// written earlier in the same sweep.
fn relax(graph: &LinkGraph, scores: &[f64], next: &mut [f64], damping: f64) {
    let n = graph.node_count();
    let n_f64 = n as f64;
    let base_score = (1.0 - damping) / n_f64;

    let dangling_share: f64 = (0..n)
        .filter(|&i| graph.is_dangling(i))
        .map(|i| scores[i])
        .sum::<f64>()
        / n_f64;

    for (i, slot) in next.iter_mut().enumerate() {
        let mut sum_incoming = dangling_share;

        // Iterate over incoming links
        for &source_idx in graph.predecessors(i) {
            sum_incoming += scores[source_idx] / graph.out_degree(source_idx) as f64;
        }

        *slot = base_score + damping * sum_incoming;
    }
}
