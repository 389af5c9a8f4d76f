use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// `[:keyword-one keyword-two]` annotation spans.
static KEYWORD_SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[:([^\]]+)\]").unwrap());

/// `[ADR-00042]` or bare `ADR-00042`; only the digits are captured.
static ADR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[?ADR-(\d{5})\]?").unwrap());

/// `REQ-<CATEGORY>-<SUFFIX>`, captured with its prefix.
static REQ_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[?(REQ-[A-Z]+-[A-Za-z0-9-]+)\]?").unwrap());

/// `RunNotes-YYYY-MM-DD-<Topic>`, captured with its prefix. The topic stops
/// at the first non word/hyphen character so trailing prose punctuation is
/// never part of the id.
static RUNNOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[?(RunNotes-\d{4}-\d{2}-\d{2}-[A-Za-z0-9_-]+)\]?").unwrap());

#[derive(Debug, Default, Clone, Serialize, PartialEq, Eq)]
pub struct CrossRefs {
    pub adr: BTreeSet<String>,
    pub req: BTreeSet<String>,
    pub runnote: BTreeSet<String>,
}

impl CrossRefs {
    pub fn is_empty(&self) -> bool {
        self.adr.is_empty() && self.req.is_empty() && self.runnote.is_empty()
    }
}

/// Extract the deduplicated keyword set from bracketed annotation spans.
///
/// Tokens inside a span are whitespace-separated and may carry their own
/// leading colon (`[:architecture :security]`); all colon characters are
/// stripped and empty tokens discarded. Source casing is preserved.
/// Unterminated spans simply do not match.
pub fn extract_keywords(content: &str) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();
    for caps in KEYWORD_SPAN_RE.captures_iter(content) {
        let span = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        for token in span.split_whitespace() {
            let cleaned = token.trim().replace(':', "");
            if !cleaned.is_empty() {
                keywords.insert(cleaned);
            }
        }
    }
    keywords
}

/// Run the three independent cross-reference scans over `content`.
/// Duplicates collapse per variant.
pub fn extract_cross_refs(content: &str) -> CrossRefs {
    let mut refs = CrossRefs::default();
    for caps in ADR_RE.captures_iter(content) {
        if let Some(id) = caps.get(1) {
            refs.adr.insert(id.as_str().to_string());
        }
    }
    for caps in REQ_RE.captures_iter(content) {
        if let Some(id) = caps.get(1) {
            refs.req.insert(id.as_str().to_string());
        }
    }
    for caps in RUNNOTE_RE.captures_iter(content) {
        if let Some(id) = caps.get(1) {
            refs.runnote.insert(id.as_str().to_string());
        }
    }
    refs
}

/// Read a document for extraction. Failures (missing file, permissions,
/// bad encoding) are warned and swallowed so extraction never raises to
/// the caller; the caller proceeds with empty data for that unit.
pub fn read_content(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!("skipping unreadable file {}: {}", path.display(), e);
            None
        }
    }
}
