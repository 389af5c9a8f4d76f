use crate::extract::CrossRefs;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One scanned markdown file with its extracted structure. Recomputed on
/// every scan; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub path: PathBuf,
    pub keywords: BTreeSet<String>,
    pub refs: CrossRefs,
}

#[derive(Serialize)]
pub struct ValidationReport {
    pub files_scanned: usize,
    /// Number of recognized taxonomy terms; absent when validation is
    /// disabled (no taxonomy could be loaded).
    pub taxonomy_terms: Option<usize>,
    pub all_valid: bool,
    pub findings: Vec<InvalidFinding>,
}

#[derive(Serialize)]
pub struct InvalidFinding {
    pub path: String,
    pub invalid: Vec<String>,
}

#[derive(Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub documents: usize,
}

#[derive(Serialize)]
pub struct StatsReport {
    pub total_documents: usize,
    pub unique_keywords: usize,
    pub top: Vec<KeywordCount>,
}

#[derive(Serialize)]
pub struct Suggestion {
    pub keyword: String,
    pub occurrences: usize,
    pub in_taxonomy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Serialize)]
pub struct GraphExport {
    pub nodes: Vec<String>,
    pub edges: Vec<GraphEdge>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GraphEdge {
    pub a: String,
    pub b: String,
    pub weight: usize,
}
