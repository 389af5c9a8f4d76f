use crate::domain::models::Document;
use crate::extract::{extract_cross_refs, extract_keywords, read_content};
use crate::services::config::{Config, ConfigResolver};
use crate::services::scanner::scan;
use crate::services::taxonomy::load_taxonomy;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ContextError {
    #[error("taxonomy required by configuration but not found: {0}")]
    TaxonomyRequired(PathBuf),
}

/// Resolved snapshot for one project root: config, paths, taxonomy and
/// exclusion rules. Built fresh per invocation, never mutated afterwards.
/// Document discovery stays lazy — `documents()` re-scans on every call,
/// which is acceptable because invocation lifetime is a single command.
pub struct ProjectContext {
    pub root: PathBuf,
    pub config: Config,
    pub doc_root: PathBuf,
    pub taxonomy_path: PathBuf,
    pub taxonomy: Option<BTreeSet<String>>,
    pub excluded_patterns: Vec<String>,
}

impl ProjectContext {
    pub fn documents(&self) -> Vec<Document> {
        scan(&self.doc_root, &self.excluded_patterns)
            .into_iter()
            .map(|path| self.load_document(path))
            .collect()
    }

    fn load_document(&self, path: PathBuf) -> Document {
        let content = read_content(&path).unwrap_or_default();
        let keywords = extract_keywords(&content);
        let mut refs = extract_cross_refs(&content);
        if !self.config.enable_adr {
            refs.adr = BTreeSet::new();
        }
        if !self.config.enable_req {
            refs.req = BTreeSet::new();
        }
        if !self.config.enable_runnote {
            refs.runnote = BTreeSet::new();
        }
        Document {
            path,
            keywords,
            refs,
        }
    }
}

/// Builds `ProjectContext` values from a resolver handed in by the caller —
/// the resolver is an explicit dependency, not a process-wide singleton.
pub struct ContextBuilder {
    resolver: ConfigResolver,
}

impl ContextBuilder {
    pub fn new(resolver: ConfigResolver) -> Self {
        Self { resolver }
    }

    pub fn build(&self, root: &Path) -> anyhow::Result<ProjectContext> {
        let config = self.resolver.resolve(root)?;
        let doc_root = self.resolver.resolve_doc_path(root, &config);
        let taxonomy_path = self.resolver.resolve_taxonomy_path(root, &config);
        let taxonomy = load_taxonomy(&taxonomy_path);
        let excluded_patterns = config.excluded_patterns.clone();
        Ok(ProjectContext {
            root: root.to_path_buf(),
            config,
            doc_root,
            taxonomy_path,
            taxonomy,
            excluded_patterns,
        })
    }
}
