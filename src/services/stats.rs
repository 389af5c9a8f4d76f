use crate::domain::models::{Document, KeywordCount, StatsReport};
use std::collections::BTreeMap;

/// Count, per keyword, the number of distinct documents containing it and
/// report the top `top` entries, descending by count with lexicographic
/// tie-break for determinism.
pub fn keyword_stats(documents: &[Document], top: usize) -> StatsReport {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for doc in documents {
        // a document's keyword set is already deduplicated, so each keyword
        // counts the document at most once
        for keyword in &doc.keywords {
            *counts.entry(keyword.clone()).or_insert(0) += 1;
        }
    }

    let unique_keywords = counts.len();
    let mut ranked: Vec<KeywordCount> = counts
        .into_iter()
        .map(|(keyword, documents)| KeywordCount { keyword, documents })
        .collect();
    ranked.sort_by(|a, b| b.documents.cmp(&a.documents).then(a.keyword.cmp(&b.keyword)));
    ranked.truncate(top);

    StatsReport {
        total_documents: documents.len(),
        unique_keywords,
        top: ranked,
    }
}
