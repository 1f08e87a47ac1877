//! Corpus crawling
//!
//! Reads a directory of HTML documents into the raw page → links collection
//! the rank estimators are built from. Every `.html` file is a page named by
//! its file name; its links are the anchor targets found in the document.

pub mod parser;

use crate::error::{LinkRankError, LinkRankResult};
use linkrank_algorithms::LinkGraph;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub use parser::extract_links;

/// Raw crawl result: each page with its unfiltered link targets (minus itself)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Crawl `dir` (non-recursively) for `.html` pages.
    pub fn crawl(dir: impl AsRef<Path>) -> LinkRankResult<Self> {
        let dir = dir.as_ref();
        info!("Crawling corpus at {:?}", dir);

        let entries = fs::read_dir(dir).map_err(|e| LinkRankError::io(dir, e))?;
        let mut corpus = Corpus::default();

        for entry in entries {
            let entry = entry.map_err(|e| LinkRankError::io(dir, e))?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(".html") {
                continue;
            }

            // Follows symlinks, so linked pages count as pages
            let metadata = fs::metadata(&path).map_err(|e| LinkRankError::io(&path, e))?;
            if !metadata.is_file() {
                continue;
            }

            let contents = fs::read_to_string(&path).map_err(|e| LinkRankError::io(&path, e))?;
            let links = extract_links(&contents);
            debug!("Page {} has {} raw links", name, links.len());
            corpus.insert(name, links);
        }

        if corpus.is_empty() {
            return Err(LinkRankError::EmptyCorpus(dir.to_path_buf()));
        }

        info!("Crawled {} pages", corpus.len());
        Ok(corpus)
    }

    /// Add a page; a link from the page to itself is dropped.
    pub fn insert(&mut self, page: impl Into<String>, links: impl IntoIterator<Item = String>) {
        let page = page.into();
        let mut links: BTreeSet<String> = links.into_iter().collect();
        links.remove(&page);
        self.pages.entry(page).or_default().extend(links);
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Raw links of a page, including targets outside the corpus
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(page)
    }

    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Restrict links to pages of the corpus and build the rank graph.
    pub fn into_graph(self) -> LinkGraph {
        LinkGraph::from_links(self.pages)
    }
}

impl FromIterator<(String, BTreeSet<String>)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (String, BTreeSet<String>)>>(iter: I) -> Self {
        let mut corpus = Corpus::default();
        for (page, links) in iter {
            corpus.insert(page, links);
        }
        corpus
    }
}
