use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;
mod domain;
mod extract;
mod services;

pub use cli::{Cli, Commands, SearchKind};
pub use commands::{handle_analyze_commands, handle_query_commands};
pub use domain::models::{
    Document, ErrorBody, ErrorOut, GraphEdge, GraphExport, InvalidFinding, JsonOut, KeywordCount,
    StatsReport, Suggestion, ValidationReport,
};
pub use extract::{extract_cross_refs, extract_keywords, read_content, CrossRefs};
pub use services::config::{discover_project_root, ConfigError, ConfigResolver, RuntimeOverrides};
pub use services::context::{ContextBuilder, ContextError, ProjectContext};
pub use services::graph::{build_graph, render_dot};
pub use services::index::build_index;
pub use services::output::{emit, print_one, print_out};
pub use services::search::{
    find_by_adr, find_by_content, find_by_keyword, find_by_req, find_by_runnote,
};
pub use services::stats::keyword_stats;
pub use services::suggest::{FrequencyStrategy, SuggestStrategy};
pub use services::validate::{validate, ValidationResult};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help/version land on stdout and exit 0; real argument errors
            // are fatal with exit 1 and no partial output
            let fatal = e.use_stderr();
            let _ = e.print();
            std::process::exit(if fatal { 1 } else { 0 });
        }
    };

    if let Err(e) = run(&cli) {
        if cli.json {
            let out = ErrorOut {
                ok: false,
                error: ErrorBody {
                    code: error_code(&e).to_string(),
                    message: format!("{:#}", e),
                },
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{\"ok\":false}".into())
            );
        } else {
            eprintln!("error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let resolver = ConfigResolver::new(RuntimeOverrides {
        doc_path: cli.doc_path.clone(),
        taxonomy: cli.taxonomy.clone(),
    });
    let builder = ContextBuilder::new(resolver);

    let mut roots = requested_roots(&cli.command).to_vec();
    if roots.is_empty() {
        roots.push(discover_project_root());
    }

    let mut contexts = Vec::with_capacity(roots.len());
    for root in &roots {
        contexts.push(builder.build(root)?);
    }

    if handle_query_commands(cli, &contexts)? {
        return Ok(());
    }
    handle_analyze_commands(cli, &contexts)
}

fn requested_roots(command: &Commands) -> &[PathBuf] {
    match command {
        Commands::Validate { roots }
        | Commands::Search { roots, .. }
        | Commands::Index { roots, .. }
        | Commands::Graph { roots, .. }
        | Commands::Suggest { roots, .. }
        | Commands::Stats { roots, .. } => roots,
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<ConfigError>().is_some() {
        "CONFIG_INVALID"
    } else if err.downcast_ref::<ContextError>().is_some() {
        "TAXONOMY_REQUIRED"
    } else {
        "ERROR"
    }
}
