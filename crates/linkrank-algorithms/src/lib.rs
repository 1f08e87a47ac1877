pub mod common;
pub mod distribution;
pub mod error;
pub mod pagerank;
pub mod sampling;
pub mod transition;

pub use common::{LinkGraph, PageId, RankMap};
pub use distribution::{approx_equal, within_tolerance, DEFAULT_TOLERANCE};
pub use error::{AlgoError, AlgoResult};
pub use pagerank::{iterate_rank, pagerank_step, PageRankConfig};
pub use sampling::{sample_rank, SamplingConfig};
pub use transition::{transition_model, transition_weights};
