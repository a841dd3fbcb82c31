use crate::domain::model::ScoredKeyword;

/// Fixed-width ranking table for console display.
pub fn format_table(keywords: &[ScoredKeyword]) -> String {
    let mut lines = Vec::with_capacity(keywords.len() + 2);
    lines.push(format!(
        "{:<50} {:<10} {:<10} {:<10}",
        "Keyword", "Volume", "CPC", "Priority"
    ));
    lines.push("=".repeat(80));

    for kw in keywords {
        lines.push(format!(
            "{:<50} {:<10} ${:<9.2} {:<10.2}",
            kw.keyword, kw.volume, kw.cpc, kw.priority
        ));
    }

    lines.join("\n")
}
