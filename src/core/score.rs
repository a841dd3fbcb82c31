//! Deduplication, threshold filtering and priority scoring of the
//! harvested keywords.

use crate::domain::model::{AggregatedKeyword, FilterRules, PaidKeyword, RelatedKeyword, ScoredKeyword};
use std::collections::HashMap;

/// Merge paid and related keywords into one insertion-ordered candidate
/// list, deduplicated by lowercased keyword text.
///
/// Paid records seed the list: the first occurrence keeps its casing,
/// volume and cpc and starts at `competitors_using = 1`; every further
/// occurrence of the same lowercased keyword only bumps the counter.
/// Related records fold in afterwards and never touch an existing entry;
/// new ones start at `competitors_using = 0`.
pub fn merge_keywords(paid: &[PaidKeyword], related: &[RelatedKeyword]) -> Vec<AggregatedKeyword> {
    let mut merged: Vec<AggregatedKeyword> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in paid {
        let key = record.keyword.to_lowercase();
        match index.get(&key) {
            Some(&i) => merged[i].competitors_using += 1,
            None => {
                index.insert(key, merged.len());
                merged.push(AggregatedKeyword {
                    keyword: record.keyword.clone(),
                    volume: record.volume,
                    cpc: record.cpc,
                    competitors_using: 1,
                });
            }
        }
    }

    for record in related {
        let key = record.keyword.to_lowercase();
        if !index.contains_key(&key) {
            index.insert(key, merged.len());
            merged.push(AggregatedKeyword {
                keyword: record.keyword.clone(),
                volume: record.volume,
                cpc: record.cpc,
                competitors_using: 0,
            });
        }
    }

    merged
}

/// Rewards search volume, penalizes cost-per-click, rewards keywords
/// multiple competitors already bid on.
pub fn priority_score(volume: u64, cpc: f64, competitors_using: u32) -> f64 {
    (volume as f64 / 100.0) * (1.0 / cpc.max(1.0)) * f64::from(competitors_using + 1)
}

/// Apply the volume/cpc thresholds and the negative-term denylist, score
/// the survivors and rank them by descending priority. The sort is stable:
/// entries with equal priority keep their merge order, so runs over the
/// same data produce the same ranking.
pub fn filter_and_score(
    candidates: Vec<AggregatedKeyword>,
    rules: &FilterRules,
) -> Vec<ScoredKeyword> {
    let mut scored = Vec::new();

    for entry in candidates {
        if entry.volume < rules.min_volume {
            continue;
        }
        if entry.cpc > rules.max_cpc {
            continue;
        }
        if entry.cpc < rules.min_cpc {
            continue;
        }
        let lowered = entry.keyword.to_lowercase();
        if rules
            .negative_terms
            .iter()
            .any(|neg| lowered.contains(&neg.to_lowercase()))
        {
            continue;
        }

        let priority = priority_score(entry.volume, entry.cpc, entry.competitors_using);
        scored.push(ScoredKeyword {
            keyword: entry.keyword,
            volume: entry.volume,
            cpc: entry.cpc,
            competitors_using: entry.competitors_using,
            priority,
        });
    }

    scored.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    scored
}
