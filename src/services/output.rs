use crate::domain::models::{AnalysisResult, JsonOut, PolicyDocument};
use crate::services::settings::DisplaySettings;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Text rendering of an analysis. Challenge/recommendation lists are cut to
/// the configured maxima; JSON output carries them in full.
pub fn render_analysis(result: &AnalysisResult, context: &str, display: &DisplaySettings) {
    println!("scenario: {}", result.scenario);
    println!("context: {}", context);

    let t = &result.traditional_model;
    println!();
    println!("traditional model");
    println!("  paradigm: {}", t.paradigm);
    println!("  ownership basis: {}", t.ownership_basis);
    println!("  attribution: {}", t.attribution);
    println!("  economic model: {}", t.economic_model);
    println!("  sustainability: {}", t.sustainability);
    println!("  collaboration: {}", t.collaboration);
    println!("  ai integration: {}", t.ai_integration);
    println!("  social impact: {}", t.social_impact);

    let s = &result.stewardship_model;
    println!();
    println!("stewardship model");
    println!("  paradigm: {}", s.paradigm);
    println!("  stewardship basis: {}", s.stewardship_basis);
    println!("  attribution: {}", s.attribution);
    println!("  economic model: {}", s.economic_model);
    println!("  sustainability: {}", s.sustainability);
    println!("  collaboration: {}", s.collaboration);
    println!("  ai integration: {}", s.ai_integration);
    println!("  social impact: {}", s.social_impact);
    println!("  governance: {}", s.governance);
    println!("  adaptation: {}", s.adaptation);

    println!();
    println!(
        "sustainability score: {:.2}%",
        result.sustainability_score * 100.0
    );

    println!();
    println!("challenges:");
    for (i, challenge) in result
        .challenges
        .iter()
        .take(display.max_challenges)
        .enumerate()
    {
        println!("  {}. {}", i + 1, challenge);
    }

    println!();
    println!("recommendations:");
    for (i, rec) in result
        .recommendations
        .iter()
        .take(display.max_recommendations)
        .enumerate()
    {
        println!("  {}. {}", i + 1, rec);
    }

    println!();
    println!("stakeholders:");
    for c in &result.stakeholder_impacts {
        println!(
            "  {}\t{:.0}%\t{}",
            c.stakeholder.label(),
            c.weight * 100.0,
            c.description
        );
    }
}

pub fn render_policy(doc: &PolicyDocument) {
    println!("title: {}", doc.title);
    println!("scope: {}", doc.scope);
    println!("principles:");
    for p in &doc.principles {
        println!("  - {}", p);
    }
    println!("implementation:");
    for step in &doc.implementation {
        println!("  - {}", step);
    }
    println!("governance: {}", doc.governance);
    println!("enforcement: {}", doc.enforcement);
}
