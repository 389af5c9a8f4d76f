use crate::domain::models::Suggestion;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

const MAX_SUGGESTIONS: usize = 10;
const MIN_WORD_LEN: usize = 3;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z][a-zA-Z0-9_-]*").unwrap());

static STOP_WORDS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
        "can", "need", "this", "that", "these", "those", "it", "we", "they", "what", "which",
        "who", "where", "when", "why", "how", "all", "each", "every", "both", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
        "than", "too", "very", "just", "also", "now", "here", "using", "used", "use", "new",
        "first", "last", "next", "then", "see", "get", "set", "run", "add", "create", "update",
        "delete",
    ]
    .into_iter()
    .collect()
});

/// Scoring is heuristic with no single canonical algorithm, so it hangs
/// behind a trait: alternate heuristics can be swapped without touching the
/// command layer. Implementations must stay pure and deterministic for a
/// given (content, taxonomy, existing) input.
pub trait SuggestStrategy {
    fn suggest(
        &self,
        content: &str,
        taxonomy: Option<&BTreeSet<String>>,
        existing: &BTreeSet<String>,
    ) -> Vec<Suggestion>;
}

/// Baseline strategy: stopword-filtered word counts over the document text.
/// Candidates already annotated on the document are excluded; ranking is by
/// occurrence count, taxonomy members first among equals, then lexicographic.
pub struct FrequencyStrategy {
    pub taxonomy_only: bool,
    pub with_confidence: bool,
}

impl SuggestStrategy for FrequencyStrategy {
    fn suggest(
        &self,
        content: &str,
        taxonomy: Option<&BTreeSet<String>>,
        existing: &BTreeSet<String>,
    ) -> Vec<Suggestion> {
        let existing_lower: BTreeSet<String> =
            existing.iter().map(|k| k.to_lowercase()).collect();

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for m in WORD_RE.find_iter(content) {
            let word = m.as_str().to_lowercase();
            if word.len() < MIN_WORD_LEN || STOP_WORDS.contains(word.as_str()) {
                continue;
            }
            if existing_lower.contains(&word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }

        if self.taxonomy_only {
            if let Some(terms) = taxonomy {
                counts.retain(|word, _| terms.contains(word));
            }
        }

        let max_count = counts.values().copied().max().unwrap_or(0);
        let mut ranked: Vec<Suggestion> = counts
            .into_iter()
            .map(|(keyword, occurrences)| {
                let in_taxonomy = taxonomy.map(|t| t.contains(&keyword)).unwrap_or(false);
                let confidence = if self.with_confidence && max_count > 0 {
                    Some(occurrences as f64 / max_count as f64)
                } else {
                    None
                };
                Suggestion {
                    keyword,
                    occurrences,
                    in_taxonomy,
                    confidence,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then(b.in_taxonomy.cmp(&a.in_taxonomy))
                .then(a.keyword.cmp(&b.keyword))
        });
        ranked.truncate(MAX_SUGGESTIONS);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::{FrequencyStrategy, SuggestStrategy};
    use std::collections::BTreeSet;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn frequent_terms_rank_first_and_stopwords_are_dropped() {
        let strategy = FrequencyStrategy {
            taxonomy_only: false,
            with_confidence: false,
        };
        let content = "The authentication flow. Authentication uses tokens. Tokens expire.";
        let out = strategy.suggest(content, None, &set(&[]));

        assert_eq!(out[0].keyword, "authentication");
        assert_eq!(out[0].occurrences, 2);
        assert!(out.iter().all(|s| s.keyword != "the"));
    }

    #[test]
    fn already_present_keywords_are_not_proposed() {
        let strategy = FrequencyStrategy {
            taxonomy_only: false,
            with_confidence: false,
        };
        let out = strategy.suggest(
            "[:authentication] authentication everywhere",
            None,
            &set(&["authentication"]),
        );
        assert!(out.iter().all(|s| s.keyword != "authentication"));
    }

    #[test]
    fn taxonomy_only_restricts_candidates() {
        let strategy = FrequencyStrategy {
            taxonomy_only: true,
            with_confidence: false,
        };
        let taxonomy = set(&["tokens"]);
        let out = strategy.suggest(
            "authentication tokens tokens",
            Some(&taxonomy),
            &set(&[]),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].keyword, "tokens");
        assert!(out[0].in_taxonomy);
    }

    #[test]
    fn confidence_is_normalized_against_the_top_candidate() {
        let strategy = FrequencyStrategy {
            taxonomy_only: false,
            with_confidence: true,
        };
        let out = strategy.suggest("tokens tokens expiry", None, &set(&[]));
        let top = out.iter().find(|s| s.keyword == "tokens").expect("tokens");
        let other = out.iter().find(|s| s.keyword == "expiry").expect("expiry");
        assert_eq!(top.confidence, Some(1.0));
        assert_eq!(other.confidence, Some(0.5));
    }

    #[test]
    fn identical_input_yields_identical_ranking() {
        let strategy = FrequencyStrategy {
            taxonomy_only: false,
            with_confidence: false,
        };
        let content = "alpha beta beta gamma gamma";
        let first: Vec<String> = strategy
            .suggest(content, None, &set(&[]))
            .into_iter()
            .map(|s| s.keyword)
            .collect();
        let second: Vec<String> = strategy
            .suggest(content, None, &set(&[]))
            .into_iter()
            .map(|s| s.keyword)
            .collect();
        assert_eq!(first, second);
    }
}
