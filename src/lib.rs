//! LinkRank
//!
//! Estimates the relative importance of pages in a hyperlink corpus with
//! PageRank, computed two independent ways:
//!
//! - a Monte-Carlo random surfer ([`sample_rank`]), and
//! - a deterministic fixed-point iteration ([`iterate_rank`]).
//!
//! The estimators live in the `linkrank-algorithms` crate. This crate adds
//! the outer layers: crawling a directory of HTML pages into a graph,
//! loading run configuration, and rendering sorted reports.
//!
//! ## Example Usage
//!
//! ```rust
//! use linkrank::{iterate_rank, Corpus, PageRankConfig};
//! use std::collections::BTreeSet;
//!
//! let mut corpus = Corpus::default();
//! corpus.insert("a.html", BTreeSet::from(["b.html".to_string()]));
//! corpus.insert("b.html", BTreeSet::from(["a.html".to_string()]));
//!
//! let graph = corpus.into_graph();
//! let ranks = iterate_rank(&graph, &PageRankConfig::default()).unwrap();
//! assert!((ranks["a.html"] - 0.5).abs() < 1e-9);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod report;

pub use config::RankConfig;
pub use corpus::Corpus;
pub use error::{LinkRankError, LinkRankResult};
pub use report::{RankEntry, RankReport};

// Re-export estimators
pub use linkrank_algorithms::{
    approx_equal, iterate_rank, pagerank_step, sample_rank, transition_model, AlgoError,
    LinkGraph, PageRankConfig, RankMap, SamplingConfig,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
