use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A keyword a domain ranks for in unpaid search results.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganicKeyword {
    pub keyword: String,
    pub position: u32,
    pub volume: u64,
    pub cpc: f64,
}

/// A keyword a domain bids on in paid search ads. `source` is the
/// competitor domain the record came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PaidKeyword {
    pub keyword: String,
    pub volume: u64,
    pub cpc: f64,
    pub source: String,
}

/// Metrics for a single looked-up phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMetrics {
    pub keyword: String,
    pub volume: u64,
    pub cpc: f64,
    pub competition: f64,
}

/// A keyword related to one of the seed phrases.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedKeyword {
    pub keyword: String,
    pub volume: u64,
    pub cpc: f64,
}

/// Everything collected for one competitor domain.
#[derive(Debug, Clone, Default)]
pub struct CompetitorKeywords {
    pub organic: Vec<OrganicKeyword>,
    pub paid: Vec<PaidKeyword>,
}

/// Raw extraction output: everything fetched from the API in one run.
/// `paid_pool` repeats the per-competitor paid keywords in fetch order,
/// since merge semantics depend on which competitor was queried first.
#[derive(Debug, Clone, Default)]
pub struct Harvest {
    pub competitors: HashMap<String, CompetitorKeywords>,
    pub paid_pool: Vec<PaidKeyword>,
    pub seed_metrics: Vec<KeywordMetrics>,
    pub related: Vec<RelatedKeyword>,
}

/// One candidate keyword after cross-source deduplication. The first-seen
/// casing, volume and cpc are kept; `competitors_using` counts how many
/// competitor paid-keyword lists contained it (0 for related-only keywords).
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedKeyword {
    pub keyword: String,
    pub volume: u64,
    pub cpc: f64,
    pub competitors_using: u32,
}

/// A candidate that survived filtering, with its priority score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    pub keyword: String,
    pub volume: u64,
    pub cpc: f64,
    pub competitors_using: u32,
    pub priority: f64,
}

/// Thresholds and denylist applied to aggregated keywords. Boundary values
/// pass: the comparisons are strict (`volume < min_volume` drops, so
/// `volume == min_volume` survives; likewise `cpc == max_cpc`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRules {
    #[serde(default = "default_min_volume")]
    pub min_volume: u64,
    #[serde(default = "default_max_cpc")]
    pub max_cpc: f64,
    #[serde(default = "default_min_cpc")]
    pub min_cpc: f64,
    #[serde(default = "default_negative_terms")]
    pub negative_terms: Vec<String>,
}

fn default_min_volume() -> u64 {
    50
}

fn default_max_cpc() -> f64 {
    15.0
}

fn default_min_cpc() -> f64 {
    3.0
}

fn default_negative_terms() -> Vec<String> {
    [
        "diy",
        "paint",
        "kit",
        "youtube",
        "home depot",
        "lowes",
        "rental",
        "free",
        "how to",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            min_volume: default_min_volume(),
            max_cpc: default_max_cpc(),
            min_cpc: default_min_cpc(),
            negative_terms: default_negative_terms(),
        }
    }
}

/// Final report: serialized to JSON as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub timestamp: String,
    pub competitors_analyzed: Vec<String>,
    pub total_keywords: usize,
    pub top_keywords: Vec<ScoredKeyword>,
    pub all_keywords: Vec<ScoredKeyword>,
}
