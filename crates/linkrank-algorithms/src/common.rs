//! Shared graph model for the rank estimators
//!
//! Provides a read-only, index-based view of a hyperlink graph. Pages are
//! addressed by dense indices assigned in sorted-name order so every
//! computation over the same input visits pages in the same order.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Page identifier type
pub type PageId = String;

/// Mapping from page to its estimated rank
pub type RankMap = HashMap<PageId, f64>;

/// A dense, integer-indexed hyperlink graph using Compressed Sparse Row (CSR) format.
///
/// Invariants: every link target is a page of the graph, no page links to
/// itself, and each target appears at most once per source.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkGraph {
    /// Mapping from dense index (0..N) back to the page name
    index_to_page: Vec<PageId>,
    /// Mapping from page name to dense index
    page_to_index: HashMap<PageId, usize>,

    /// Outgoing links CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    out_offsets: Vec<usize>,
    /// Contiguous array of target page indices
    out_targets: Vec<usize>,

    /// Incoming links CSR structure
    /// Offsets into `in_sources`. Size = node_count + 1
    in_offsets: Vec<usize>,
    /// Contiguous array of source page indices
    in_sources: Vec<usize>,
}

impl LinkGraph {
    /// Build a graph from raw, unfiltered page links.
    ///
    /// Self-links and links to pages outside the collection are dropped.
    /// Pages left without links become dangling; they are not patched here.
    pub fn from_links<I, P, L, T>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<PageId>,
        L: IntoIterator<Item = T>,
        T: Into<PageId>,
    {
        let mut raw: BTreeMap<PageId, BTreeSet<PageId>> = BTreeMap::new();
        for (page, links) in pages {
            raw.entry(page.into())
                .or_default()
                .extend(links.into_iter().map(Into::into));
        }

        let index_to_page: Vec<PageId> = raw.keys().cloned().collect();
        let page_to_index: HashMap<PageId, usize> = index_to_page
            .iter()
            .enumerate()
            .map(|(idx, page)| (page.clone(), idx))
            .collect();

        let node_count = index_to_page.len();
        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];

        for (u_idx, links) in raw.values().enumerate() {
            for target in links {
                match page_to_index.get(target) {
                    Some(&v_idx) if v_idx != u_idx => {
                        outgoing[u_idx].push(v_idx);
                        incoming[v_idx].push(u_idx);
                    }
                    _ => {}
                }
            }
        }

        let (out_offsets, out_targets) = flatten(outgoing);
        let (in_offsets, in_sources) = flatten(incoming);

        LinkGraph {
            index_to_page,
            page_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        }
    }

    /// Number of pages
    pub fn node_count(&self) -> usize {
        self.index_to_page.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_page.is_empty()
    }

    /// Dense index of a page
    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.page_to_index.get(page).copied()
    }

    /// Page name at a dense index
    pub fn page(&self, idx: usize) -> &str {
        &self.index_to_page[idx]
    }

    /// All pages in index order (sorted by name)
    pub fn pages(&self) -> &[PageId] {
        &self.index_to_page
    }

    /// Get the out-degree of a page (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// A page with no outgoing links
    pub fn is_dangling(&self, idx: usize) -> bool {
        self.out_degree(idx) == 0
    }

    /// Get outgoing links (successors) of a page
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming links (predecessors) of a page
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Outgoing link targets of a page, by name
    pub fn links_of(&self, page: &str) -> Option<Vec<&str>> {
        self.index_of(page)
            .map(|idx| self.successors(idx).iter().map(|&t| self.page(t)).collect())
    }

    /// Map a dense score vector back to page names
    pub fn to_rank_map(&self, scores: &[f64]) -> RankMap {
        let mut result = HashMap::with_capacity(self.node_count());
        for (idx, &score) in scores.iter().enumerate() {
            result.insert(self.index_to_page[idx].clone(), score);
        }
        result
    }
}

fn flatten(lists: Vec<Vec<usize>>) -> (Vec<usize>, Vec<usize>) {
    let mut offsets = Vec::with_capacity(lists.len() + 1);
    let mut flat = Vec::new();

    offsets.push(0);
    for mut neighbors in lists {
        neighbors.sort_unstable();
        flat.extend(neighbors);
        offsets.push(flat.len());
    }

    (offsets, flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_self_and_external_links() {
        let graph = LinkGraph::from_links(vec![
            ("a.html", vec!["a.html", "b.html", "missing.html"]),
            ("b.html", vec!["a.html", "c.html"]),
            ("c.html", vec!["c.html"]),
        ]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.links_of("a.html"), Some(vec!["b.html"]));
        assert_eq!(graph.links_of("b.html"), Some(vec!["a.html", "c.html"]));
        assert_eq!(graph.links_of("c.html"), Some(vec![]));
        assert!(graph.links_of("missing.html").is_none());

        let c = graph.index_of("c.html").unwrap();
        assert!(graph.is_dangling(c));
    }

    #[test]
    fn test_predecessors_mirror_successors() {
        let graph = LinkGraph::from_links(vec![
            ("1", vec!["2", "3"]),
            ("2", vec!["3"]),
            ("3", vec!["1"]),
        ]);

        let three = graph.index_of("3").unwrap();
        let sources: Vec<&str> = graph
            .predecessors(three)
            .iter()
            .map(|&i| graph.page(i))
            .collect();
        assert_eq!(sources, vec!["1", "2"]);
        assert_eq!(graph.out_degree(graph.index_of("1").unwrap()), 2);
    }

    #[test]
    fn test_pages_are_sorted_and_deduplicated() {
        let graph = LinkGraph::from_links(vec![
            ("z", vec!["a", "a"]),
            ("a", vec!["z"]),
            ("a", vec!["m"]),
        ]);

        assert_eq!(graph.pages(), &["a".to_string(), "z".to_string()]);
        assert_eq!(graph.links_of("z"), Some(vec!["a"]));
        assert!(!graph.is_empty());
    }
}
