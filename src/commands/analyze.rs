use crate::*;
use std::collections::BTreeSet;

pub fn handle_analyze_commands(cli: &Cli, contexts: &[ProjectContext]) -> anyhow::Result<()> {
    let documents: Vec<Document> = contexts.iter().flat_map(|ctx| ctx.documents()).collect();

    match &cli.command {
        Commands::Index { output, .. } => {
            let index = build_index(&documents);
            if let Some(path) = output {
                emit(Some(path.as_path()), &serde_json::to_string_pretty(&index)?)?;
                print_one(cli.json, path.to_string_lossy().to_string(), |p| {
                    format!("index written to {} ({} keywords)", p, index.len())
                })?;
            } else if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &index
                    })?
                );
            } else {
                for (keyword, paths) in &index {
                    println!("{}\t{}", keyword, paths.join(", "));
                }
            }
        }
        Commands::Graph {
            weights,
            min_weight,
            output,
            ..
        } => {
            let graph = build_graph(&documents, *min_weight);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &graph
                    })?
                );
                if let Some(path) = output {
                    emit(Some(path.as_path()), &render_dot(&graph, *weights))?;
                }
            } else {
                emit(output.as_deref(), &render_dot(&graph, *weights))?;
                if let Some(path) = output {
                    println!(
                        "graph written to {} ({} nodes, {} edges)",
                        path.display(),
                        graph.nodes.len(),
                        graph.edges.len()
                    );
                }
            }
        }
        Commands::Suggest {
            file,
            confidence,
            taxonomy_only,
            ..
        } => {
            let content = std::fs::read_to_string(file)
                .map_err(|e| anyhow::anyhow!("cannot read {}: {}", file.display(), e))?;
            let existing = extract_keywords(&content);
            let taxonomy = merged_taxonomy(contexts);
            let strategy = FrequencyStrategy {
                taxonomy_only: *taxonomy_only,
                with_confidence: *confidence,
            };
            let suggestions = strategy.suggest(&content, taxonomy.as_ref(), &existing);
            print_out(cli.json, &suggestions, |s| match s.confidence {
                Some(c) => format!("{}\t{}\t{:.2}", s.keyword, s.occurrences, c),
                None => format!("{}\t{}", s.keyword, s.occurrences),
            })?;
        }
        Commands::Stats { top, .. } => {
            let report = keyword_stats(&documents, *top);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &report
                    })?
                );
            } else {
                println!("documents: {}", report.total_documents);
                println!("unique keywords: {}", report.unique_keywords);
                for entry in &report.top {
                    println!("{}\t{}", entry.keyword, entry.documents);
                }
            }
        }
        Commands::Validate { .. } | Commands::Search { .. } => {
            unreachable!("handled by the query command layer")
        }
    }

    Ok(())
}

/// Union of every loaded taxonomy in scope; `None` only when no root could
/// load one, preserving the validation-disabled state across projects.
fn merged_taxonomy(contexts: &[ProjectContext]) -> Option<BTreeSet<String>> {
    let mut merged: Option<BTreeSet<String>> = None;
    for ctx in contexts {
        if let Some(terms) = &ctx.taxonomy {
            merged.get_or_insert_with(BTreeSet::new).extend(terms.iter().cloned());
        }
    }
    merged
}
