use crate::*;

pub fn handle_query_commands(cli: &Cli, contexts: &[ProjectContext]) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Validate { .. } => {
            let mut files_scanned = 0usize;
            let mut taxonomy_terms: Option<usize> = None;
            let mut findings = Vec::new();
            let mut should_fail = false;

            for ctx in contexts {
                if ctx.config.require_taxonomy && ctx.taxonomy.is_none() {
                    return Err(ContextError::TaxonomyRequired(ctx.taxonomy_path.clone()).into());
                }
                if let Some(terms) = &ctx.taxonomy {
                    taxonomy_terms = Some(taxonomy_terms.unwrap_or(0) + terms.len());
                }
                for doc in ctx.documents() {
                    files_scanned += 1;
                    let result = validate(&doc.keywords, ctx.taxonomy.as_ref());
                    if !result.all_valid {
                        if ctx.config.strict {
                            should_fail = true;
                        }
                        findings.push(InvalidFinding {
                            path: doc.path.to_string_lossy().to_string(),
                            invalid: result.invalid.into_iter().collect(),
                        });
                    }
                }
            }

            let report = ValidationReport {
                files_scanned,
                taxonomy_terms,
                all_valid: findings.is_empty(),
                findings,
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: report.all_valid,
                        data: &report
                    })?
                );
            } else if report.all_valid {
                println!(
                    "validated {} files: all keywords recognized",
                    report.files_scanned
                );
            } else {
                for f in &report.findings {
                    println!("{}\t{}", f.path, f.invalid.join(", "));
                }
                println!(
                    "validated {} files: {} with unrecognized keywords",
                    report.files_scanned,
                    report.findings.len()
                );
            }
            if should_fail {
                std::process::exit(1);
            }
        }
        Commands::Search { kind, query, .. } => {
            let documents: Vec<Document> =
                contexts.iter().flat_map(|ctx| ctx.documents()).collect();
            let paths = match kind {
                SearchKind::Keyword => find_by_keyword(&documents, query),
                SearchKind::Content => find_by_content(&documents, query),
                SearchKind::Adr => find_by_adr(&documents, query),
                SearchKind::Req => find_by_req(&documents, query),
                SearchKind::Runnote => find_by_runnote(&documents, query),
            };
            print_out(cli.json, &paths, |p| p.to_string())?;
        }
        Commands::Index { .. }
        | Commands::Graph { .. }
        | Commands::Suggest { .. }
        | Commands::Stats { .. } => return Ok(false),
    }

    Ok(true)
}
