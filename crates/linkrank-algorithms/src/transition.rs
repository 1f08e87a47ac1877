//! Random-surfer transition model
//!
//! With probability `damping` the surfer follows one of the current page's
//! links chosen uniformly; otherwise it jumps to any page uniformly. A
//! dangling page behaves as if it linked to every page, itself included.

use super::common::{LinkGraph, RankMap};
use super::error::{check_damping, AlgoError, AlgoResult};

/// One-step probability distribution from `page`, keyed by page name.
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> AlgoResult<RankMap> {
    check_damping(damping)?;
    if graph.is_empty() {
        return Err(AlgoError::EmptyGraph);
    }
    let idx = graph
        .index_of(page)
        .ok_or_else(|| AlgoError::UnknownPage(page.to_string()))?;

    Ok(graph.to_rank_map(&transition_weights(graph, idx, damping)))
}

/// Dense form of [`transition_model`]: entry `i` is the probability of moving
/// from `idx` to page `i`. Callers must pass a valid index and damping.
pub fn transition_weights(graph: &LinkGraph, idx: usize, damping: f64) -> Vec<f64> {
    let n = graph.node_count();
    let n_f64 = n as f64;

    if graph.is_dangling(idx) {
        return vec![1.0 / n_f64; n];
    }

    let mut weights = vec![(1.0 - damping) / n_f64; n];
    let share = damping / graph.out_degree(idx) as f64;
    for &target in graph.successors(idx) {
        weights[target] += share;
    }
    weights
}
