use crate::domain::models::PolicyDocument;
use serde::Serialize;

/// Closed set of policy domains. Labels that match none of the named
/// domains select `General`; parsing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyDomain {
    Academic,
    Corporate,
    Legal,
    Government,
    General,
}

impl PolicyDomain {
    /// Case-insensitive exact match. No trimming, no fuzziness.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "academic" => PolicyDomain::Academic,
            "corporate" => PolicyDomain::Corporate,
            "legal" => PolicyDomain::Legal,
            "government" => PolicyDomain::Government,
            _ => PolicyDomain::General,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PolicyDomain::Academic => "academic",
            PolicyDomain::Corporate => "corporate",
            PolicyDomain::Legal => "legal",
            PolicyDomain::Government => "government",
            PolicyDomain::General => "general",
        }
    }

    pub fn document(&self) -> PolicyDocument {
        match self {
            PolicyDomain::Academic => academic_policy(),
            PolicyDomain::Corporate => corporate_policy(),
            PolicyDomain::Legal => legal_policy(),
            PolicyDomain::Government => government_policy(),
            PolicyDomain::General => general_policy(),
        }
    }
}

fn academic_policy() -> PolicyDocument {
    PolicyDocument {
        title: "Academic Intellectual Stewardship Policy",
        scope: "University research and educational content creation",
        principles: vec![
            "Collaborative attribution for all research outputs",
            "AI contribution transparency and acknowledgment",
            "Open access with proper stewardship attribution",
            "Student-faculty-AI collaborative recognition",
        ],
        implementation: vec![
            "Mandatory stewardship training for all researchers",
            "Updated publication and thesis guidelines",
            "AI contribution disclosure requirements",
            "Collaborative attribution tracking systems",
        ],
        governance: "Faculty senate and student representative oversight",
        enforcement: "Academic integrity office with stewardship specialization",
    }
}

fn corporate_policy() -> PolicyDocument {
    PolicyDocument {
        title: "Corporate Intellectual Stewardship Framework",
        scope: "Internal innovation and external collaboration",
        principles: vec![
            "Multi-stakeholder contribution recognition",
            "Sustainable innovation through shared stewardship",
            "Fair value distribution among contributors",
            "AI-human collaboration transparency",
        ],
        implementation: vec![
            "Employee stewardship agreements",
            "AI contribution tracking systems",
            "Cross-team collaboration incentives",
            "External partner stewardship protocols",
        ],
        governance: "Innovation committee with legal and ethics representation",
        enforcement: "HR policies with stewardship compliance metrics",
    }
}

fn legal_policy() -> PolicyDocument {
    PolicyDocument {
        title: "Intellectual Stewardship Legal Framework",
        scope: "IP law modification for the AI age",
        principles: vec![
            "Multi-agent contribution legal recognition",
            "Stewardship rights vs. ownership rights distinction",
            "AI contribution legal status clarification",
            "International harmonization of stewardship law",
        ],
        implementation: vec![
            "IP law amendment proposals",
            "Court precedent development support",
            "International treaty modification initiatives",
            "Legal education curriculum updates",
        ],
        governance: "Multi-stakeholder legal reform commission",
        enforcement: "Specialized IP courts with stewardship jurisdiction",
    }
}

fn government_policy() -> PolicyDocument {
    PolicyDocument {
        title: "National Intellectual Stewardship Strategy",
        scope: "National knowledge economy transformation",
        principles: vec![
            "Public interest in knowledge commons development",
            "International competitiveness through collaboration",
            "Citizen benefit from shared intellectual resources",
            "Innovation incentives aligned with stewardship",
        ],
        implementation: vec![
            "National stewardship legislation",
            "Public-private partnership frameworks",
            "International cooperation agreements",
            "Education system integration",
        ],
        governance: "Ministry of innovation with multi-stakeholder advisory board",
        enforcement: "National intellectual stewardship agency",
    }
}

fn general_policy() -> PolicyDocument {
    PolicyDocument {
        title: "General Intellectual Stewardship Framework",
        scope: "Adaptable framework for various contexts",
        principles: vec![
            "Stakeholder-inclusive decision making",
            "Contribution-based attribution and compensation",
            "Sustainable knowledge ecosystem development",
            "Technology-adaptive governance structures",
        ],
        implementation: vec![
            "Context-specific policy development",
            "Stakeholder engagement protocols",
            "Attribution and compensation mechanisms",
            "Continuous adaptation procedures",
        ],
        governance: "Context-appropriate multi-stakeholder governance",
        enforcement: "Situation-specific compliance and dispute resolution",
    }
}

#[cfg(test)]
mod tests {
    use super::PolicyDomain;

    #[test]
    fn label_parsing_is_case_insensitive() {
        assert_eq!(PolicyDomain::from_label("academic"), PolicyDomain::Academic);
        assert_eq!(PolicyDomain::from_label("Academic"), PolicyDomain::Academic);
        assert_eq!(PolicyDomain::from_label("ACADEMIC"), PolicyDomain::Academic);
        assert_eq!(
            PolicyDomain::from_label("GoVeRnMeNt"),
            PolicyDomain::Government
        );
    }

    #[test]
    fn unknown_labels_fall_back_to_general() {
        assert_eq!(
            PolicyDomain::from_label("unknown-domain"),
            PolicyDomain::General
        );
        assert_eq!(PolicyDomain::from_label(""), PolicyDomain::General);
        // exact match only: surrounding whitespace is not stripped
        assert_eq!(PolicyDomain::from_label(" academic "), PolicyDomain::General);
    }

    #[test]
    fn each_domain_has_its_own_document() {
        assert_eq!(
            PolicyDomain::Academic.document().title,
            "Academic Intellectual Stewardship Policy"
        );
        assert_eq!(
            PolicyDomain::Corporate.document().title,
            "Corporate Intellectual Stewardship Framework"
        );
        assert_eq!(
            PolicyDomain::Legal.document().title,
            "Intellectual Stewardship Legal Framework"
        );
        assert_eq!(
            PolicyDomain::Government.document().title,
            "National Intellectual Stewardship Strategy"
        );
        assert_eq!(
            PolicyDomain::General.document().title,
            "General Intellectual Stewardship Framework"
        );
    }

    #[test]
    fn corporate_governance_names_innovation_committee() {
        assert_eq!(
            PolicyDomain::Corporate.document().governance,
            "Innovation committee with legal and ethics representation"
        );
    }

    #[test]
    fn documents_carry_four_principles_and_four_steps() {
        for domain in [
            PolicyDomain::Academic,
            PolicyDomain::Corporate,
            PolicyDomain::Legal,
            PolicyDomain::Government,
            PolicyDomain::General,
        ] {
            let doc = domain.document();
            assert_eq!(doc.principles.len(), 4, "{}", domain.label());
            assert_eq!(doc.implementation.len(), 4, "{}", domain.label());
        }
    }
}
