//! Errors surfaced by the corpus, configuration and reporting layers

use linkrank_algorithms::AlgoError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkRankError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corpus {0:?} contains no .html pages")]
    EmptyCorpus(PathBuf),

    #[error("Invalid configuration in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    #[error(transparent)]
    Algo(#[from] AlgoError),
}

pub type LinkRankResult<T> = Result<T, LinkRankError>;

impl LinkRankError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LinkRankError::Io {
            path: path.into(),
            source,
        }
    }
}
