//! Rank report rendering

use crate::error::LinkRankResult;
use linkrank_algorithms::RankMap;
use serde::Serialize;
use std::fmt::Write as _;

/// One page and its estimated rank
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub page: String,
    pub rank: f64,
}

/// Ranks of one estimator, sorted by page identifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankReport {
    pub title: String,
    pub entries: Vec<RankEntry>,
}

impl RankReport {
    pub fn new(title: impl Into<String>, ranks: &RankMap) -> Self {
        let mut entries: Vec<RankEntry> = ranks
            .iter()
            .map(|(page, &rank)| RankEntry {
                page: page.clone(),
                rank,
            })
            .collect();
        entries.sort_by(|a, b| a.page.cmp(&b.page));

        Self {
            title: title.into(),
            entries,
        }
    }

    pub fn sampling(samples: usize, ranks: &RankMap) -> Self {
        Self::new(format!("PageRank Results from Sampling (n = {})", samples), ranks)
    }

    pub fn iteration(ranks: &RankMap) -> Self {
        Self::new("PageRank Results from Iteration", ranks)
    }

    /// Sum of all ranks in the report
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.rank).sum()
    }

    /// Title line followed by one `  page: rank` line per page, four decimals.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        for entry in &self.entries {
            let _ = writeln!(out, "  {}: {:.4}", entry.page, entry.rank);
        }
        out
    }

    pub fn to_json(&self) -> LinkRankResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
