use crate::*;

pub fn handle_runtime_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Analyze { scenario, context } => {
            let mut log = AnalysisLog::new();
            let result = log.analyze(scenario, context);
            audit("analyze", serde_json::json!({ "context": context }));
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: result
                    })?
                );
            } else {
                render_analysis(&result, context, &settings.display);
            }
        }
        Commands::Policy { domain, scenario } => {
            let kind = PolicyDomain::from_label(domain);
            let report = PolicyReport {
                domain: kind.label(),
                scenario: scenario.clone(),
                document: kind.document(),
            };
            audit("policy", serde_json::json!({ "domain": report.domain }));
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!("domain: {}", report.domain);
                println!("scenario: {}", report.scenario);
                println!();
                render_policy(&report.document);
            }
        }
        Commands::Contexts => {
            let items = context_templates();
            print_out(cli.json, &items, |t| format!("{}\t{}", t.context, t.focus))?;
        }
        Commands::Frameworks => {
            let items = framework_templates();
            print_out(cli.json, &items, |t| {
                format!("{}\t{}", t.framework, t.scope)
            })?;
        }
        Commands::Score => {
            let breakdown = score_breakdown();
            print_one(cli.json, breakdown, |b| {
                format!(
                    "base={} collaboration={} innovation={} access={} complexity={} total={:.2}",
                    b.base, b.collaboration, b.innovation, b.access, b.complexity, b.total
                )
            })?;
        }
        Commands::Demo => {
            let mut log = AnalysisLog::new();
            let first = log.analyze(
                "AI-assisted collaborative research paper with multiple institutions",
                "academic",
            );
            let second = log.analyze(
                "AI-enhanced product development with cross-functional teams",
                "corporate",
            );
            let policy = PolicyDomain::Academic.document();
            audit("demo", serde_json::json!({ "analyses": log.len() }));
            if cli.json {
                let report = DemoReport {
                    analyses: vec![first, second],
                    policy,
                    recorded: log.len(),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!("demonstration 1: academic research collaboration");
                println!();
                render_analysis(&first, "academic", &settings.display);
                println!();
                println!("demonstration 2: corporate innovation project");
                println!();
                render_analysis(&second, "corporate", &settings.display);
                println!();
                println!("demonstration 3: academic policy generation");
                println!();
                render_policy(&policy);
                println!();
                println!("recorded {} analyses", log.len());
            }
        }
    }

    Ok(())
}
