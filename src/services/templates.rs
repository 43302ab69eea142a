use crate::domain::models::{ContextTemplate, FrameworkTemplate};

/// Per-context analysis templates. Static data; contexts outside this list
/// are still accepted by the analyzer, they just have no template entry.
pub fn context_templates() -> Vec<ContextTemplate> {
    vec![
        ContextTemplate {
            context: "academic",
            focus: "Knowledge sharing and collaborative research",
            stakeholders: vec!["researchers", "institutions", "students", "ai_systems"],
            priorities: vec!["attribution", "access", "innovation"],
        },
        ContextTemplate {
            context: "corporate",
            focus: "Innovation and competitive advantage",
            stakeholders: vec!["employees", "companies", "customers", "ai_systems"],
            priorities: vec!["value_creation", "attribution", "sustainability"],
        },
        ContextTemplate {
            context: "legal",
            focus: "Regulatory framework and compliance",
            stakeholders: vec!["lawmakers", "courts", "citizens", "institutions"],
            priorities: vec!["fairness", "enforceability", "adaptation"],
        },
    ]
}

pub fn framework_templates() -> Vec<FrameworkTemplate> {
    vec![
        FrameworkTemplate {
            framework: "legislation",
            scope: "National and international IP law reform",
            mechanisms: vec![
                "statutory_changes",
                "treaty_modifications",
                "regulatory_updates",
            ],
        },
        FrameworkTemplate {
            framework: "institutional",
            scope: "Organizational policy development",
            mechanisms: vec![
                "internal_policies",
                "certification_systems",
                "best_practices",
            ],
        },
        FrameworkTemplate {
            framework: "economic",
            scope: "Economic incentive structures",
            mechanisms: vec!["tax_policies", "funding_models", "market_mechanisms"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{context_templates, framework_templates};

    #[test]
    fn template_listings_are_fixed() {
        let contexts = context_templates();
        assert_eq!(contexts.len(), 3);
        assert_eq!(contexts[0].context, "academic");
        assert_eq!(contexts[0].stakeholders.len(), 4);

        let frameworks = framework_templates();
        assert_eq!(frameworks.len(), 3);
        assert_eq!(frameworks[0].framework, "legislation");
        assert_eq!(frameworks[0].mechanisms.len(), 3);
    }
}
