//! Parsers for the four SEMrush report layouts. Responses are
//! semicolon-delimited text; the first line is a column header and is
//! discarded. Rows with fewer fields than the layout requires are dropped,
//! and numeric fields that fail to parse default to zero rather than
//! rejecting the row.

use crate::domain::model::{KeywordMetrics, OrganicKeyword, PaidKeyword, RelatedKeyword};
use crate::utils::error::Result;
use csv::ReaderBuilder;

fn reader(body: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes())
}

fn parse_count(field: &str) -> u64 {
    field.trim().parse().unwrap_or(0)
}

fn parse_money(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}

// SEMrush occasionally reports positions as "1.0".
fn parse_rank(field: &str) -> u32 {
    field.trim().parse::<f64>().map(|v| v as u32).unwrap_or(0)
}

fn is_relevant(keyword: &str, relevance_terms: &[String]) -> bool {
    let lowered = keyword.to_lowercase();
    relevance_terms
        .iter()
        .any(|term| lowered.contains(&term.to_lowercase()))
}

/// `domain_organic` report: `Ph;Po;Nq;Cp;Co;Tr`. Only keywords containing a
/// relevance term are kept.
pub fn parse_organic(body: &str, relevance_terms: &[String]) -> Result<Vec<OrganicKeyword>> {
    let mut keywords = Vec::new();

    for result in reader(body).records() {
        let record = result?;
        if record.len() < 4 {
            continue;
        }
        let keyword = record[0].to_string();
        if !is_relevant(&keyword, relevance_terms) {
            continue;
        }
        keywords.push(OrganicKeyword {
            keyword,
            position: parse_rank(&record[1]),
            volume: parse_count(&record[2]),
            cpc: parse_money(&record[3]),
        });
    }

    Ok(keywords)
}

/// `domain_adwords` report: `Ph;Po;Nq;Cp;Co`. Only keywords containing a
/// relevance term are kept; `source` records which competitor bid on them.
pub fn parse_adwords(
    body: &str,
    domain: &str,
    relevance_terms: &[String],
) -> Result<Vec<PaidKeyword>> {
    let mut keywords = Vec::new();

    for result in reader(body).records() {
        let record = result?;
        if record.len() < 4 {
            continue;
        }
        let keyword = record[0].to_string();
        if !is_relevant(&keyword, relevance_terms) {
            continue;
        }
        keywords.push(PaidKeyword {
            keyword,
            volume: parse_count(&record[2]),
            cpc: parse_money(&record[3]),
            source: domain.to_string(),
        });
    }

    Ok(keywords)
}

/// `phrase_this` report: `Ph;Nq;Cp;Co;Nr;Td`, one data row. The queried
/// phrase is used as the keyword; the results-count and trend columns are
/// ignored downstream.
pub fn parse_phrase_metrics(body: &str, phrase: &str) -> Result<Option<KeywordMetrics>> {
    let record = match reader(body).into_records().next() {
        Some(result) => result?,
        None => return Ok(None),
    };
    if record.len() < 3 {
        return Ok(None);
    }

    Ok(Some(KeywordMetrics {
        keyword: phrase.to_string(),
        volume: parse_count(&record[1]),
        cpc: parse_money(&record[2]),
        competition: if record.len() > 3 {
            parse_money(&record[3])
        } else {
            0.0
        },
    }))
}

/// `phrase_related` report: `Ph;Nq;Cp;Co;Nr`. No relevance filter: related
/// phrases are candidates regardless of vocabulary.
pub fn parse_related(body: &str) -> Result<Vec<RelatedKeyword>> {
    let mut keywords = Vec::new();

    for result in reader(body).records() {
        let record = result?;
        if record.len() < 3 {
            continue;
        }
        keywords.push(RelatedKeyword {
            keyword: record[0].to_string(),
            volume: parse_count(&record[1]),
            cpc: parse_money(&record[2]),
        });
    }

    Ok(keywords)
}
