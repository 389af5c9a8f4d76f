use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "doctags",
    version,
    about = "Keyword and cross-reference analysis for markdown documentation"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Override the configured documentation root for this run"
    )]
    pub doc_path: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Override the configured taxonomy document for this run"
    )]
    pub taxonomy: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check extracted keywords against the project taxonomy
    Validate {
        #[arg(help = "Project roots to analyze (default: current project)")]
        roots: Vec<PathBuf>,
    },
    /// Find documents by keyword, content or cross-reference
    Search {
        #[arg(value_enum)]
        kind: SearchKind,
        query: String,
        roots: Vec<PathBuf>,
    },
    /// Build the keyword -> documents index
    Index {
        #[arg(long, help = "Write the index to a file instead of stdout")]
        output: Option<PathBuf>,
        roots: Vec<PathBuf>,
    },
    /// Emit the keyword co-occurrence graph
    Graph {
        #[arg(long, default_value_t = false, help = "Annotate edges with weights")]
        weights: bool,
        #[arg(long, default_value_t = 1, help = "Drop edges below this weight")]
        min_weight: usize,
        #[arg(long, help = "Write the graph to a file instead of stdout")]
        output: Option<PathBuf>,
        roots: Vec<PathBuf>,
    },
    /// Propose keywords for a document that does not yet carry them
    Suggest {
        file: PathBuf,
        #[arg(
            long,
            default_value_t = false,
            help = "Report a 0-1 confidence per suggestion"
        )]
        confidence: bool,
        #[arg(long, default_value_t = false, help = "Only propose taxonomy members")]
        taxonomy_only: bool,
        roots: Vec<PathBuf>,
    },
    /// Keyword frequency statistics across the documentation set
    Stats {
        #[arg(long, default_value_t = 10, help = "Number of keywords to report")]
        top: usize,
        roots: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Keyword,
    Content,
    Adr,
    Req,
    Runnote,
}
