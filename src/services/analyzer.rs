use crate::domain::constants::{
    ACCESS_FACTOR, AI_SYSTEM_WEIGHT, BASE_SCORE, COLLABORATION_FACTOR, COMPLEXITY_FACTOR,
    HUMAN_COLLECTIVE_WEIGHT, HUMAN_INDIVIDUAL_WEIGHT, INNOVATION_FACTOR, INSTITUTIONAL_WEIGHT,
};
use crate::domain::models::{
    AnalysisResult, ContributionRecord, HistoryEntry, ScoreBreakdown, StakeholderKind,
    StewardshipModel, TraditionalModel,
};

/// Compare the traditional ownership description against the stewardship
/// model for a scenario. Template content does not vary with input; the
/// scenario is echoed back so reports can quote it.
pub fn analyze(scenario: &str) -> AnalysisResult {
    AnalysisResult {
        scenario: scenario.to_string(),
        traditional_model: traditional_model(),
        stewardship_model: stewardship_model(),
        sustainability_score: sustainability_score(),
        challenges: implementation_challenges(),
        recommendations: policy_recommendations(),
        stakeholder_impacts: stakeholder_contributions(),
    }
}

/// Append-only record of analyses run by the caller. Owned explicitly;
/// nothing process-wide. In-memory only, never evicted.
#[derive(Debug, Default)]
pub struct AnalysisLog {
    entries: Vec<HistoryEntry>,
}

impl AnalysisLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run an analysis and record it with the context label and a timestamp.
    /// The context is not validated against a known set.
    pub fn analyze(&mut self, scenario: &str, context: &str) -> AnalysisResult {
        let result = analyze(scenario);
        self.entries.push(HistoryEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            context: context.to_string(),
            result: result.clone(),
        });
        result
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn sustainability_score() -> f64 {
    let score =
        BASE_SCORE + COLLABORATION_FACTOR + INNOVATION_FACTOR + ACCESS_FACTOR + COMPLEXITY_FACTOR;
    score.clamp(0.0, 1.0)
}

pub fn score_breakdown() -> ScoreBreakdown {
    ScoreBreakdown {
        base: BASE_SCORE,
        collaboration: COLLABORATION_FACTOR,
        innovation: INNOVATION_FACTOR,
        access: ACCESS_FACTOR,
        complexity: COMPLEXITY_FACTOR,
        total: sustainability_score(),
    }
}

pub fn traditional_model() -> TraditionalModel {
    TraditionalModel {
        paradigm: "Individual Ownership",
        ownership_basis: "Creator as sole owner",
        attribution: "Single author/creator",
        economic_model: "Exclusive rights and licensing",
        sustainability: "Limited by individual capacity",
        collaboration: "Restricted by ownership boundaries",
        ai_integration: "Problematic - AI as tool vs. contributor",
        social_impact: "Knowledge silos and access barriers",
    }
}

pub fn stewardship_model() -> StewardshipModel {
    StewardshipModel {
        paradigm: "Collective Stewardship",
        stewardship_basis: "Responsible custodianship with attribution",
        attribution: "Multi-agent contribution recognition",
        economic_model: "Shared value creation and distribution",
        sustainability: "Enhanced through collaborative evolution",
        collaboration: "Enabled and incentivized",
        ai_integration: "Recognized as collaborative partner",
        social_impact: "Enhanced knowledge accessibility and innovation",
        governance: "Stakeholder-inclusive decision making",
        adaptation: "Dynamic framework responsive to technological change",
    }
}

pub fn implementation_challenges() -> Vec<&'static str> {
    vec![
        "Legal framework adaptation - existing IP laws need modification",
        "Stakeholder coordination - managing multiple interests and contributions",
        "Attribution complexity - determining fair contribution weights",
        "Economic transition - shifting from ownership to stewardship models",
        "Cultural resistance - overcoming traditional ownership mindsets",
        "International harmonization - coordinating across different legal systems",
        "Technology integration - developing systems for multi-agent attribution",
        "Conflict resolution - establishing mechanisms for disputes",
    ]
}

pub fn policy_recommendations() -> Vec<&'static str> {
    vec![
        "Establish pilot programs in academic institutions for stewardship testing",
        "Develop legal templates for multi-stakeholder intellectual stewardship",
        "Create tax incentives for organizations adopting stewardship frameworks",
        "Implement mandatory AI contribution disclosure in relevant sectors",
        "Establish international working groups for stewardship standardization",
        "Develop education programs on intellectual stewardship principles",
        "Create certification systems for stewardship-compliant organizations",
        "Implement graduated transition periods for existing IP holders",
    ]
}

pub fn stakeholder_contributions() -> Vec<ContributionRecord> {
    vec![
        ContributionRecord {
            stakeholder: StakeholderKind::HumanIndividual,
            weight: HUMAN_INDIVIDUAL_WEIGHT,
            description: "Creative vision, domain expertise, judgment",
            attribution: "Primary creator recognition",
            compensation: "Base stewardship rights",
        },
        ContributionRecord {
            stakeholder: StakeholderKind::AiSystem,
            weight: AI_SYSTEM_WEIGHT,
            description: "Computational processing, pattern recognition, optimization",
            attribution: "AI collaboration acknowledgment",
            compensation: "Technology provider compensation",
        },
        ContributionRecord {
            stakeholder: StakeholderKind::HumanCollective,
            weight: HUMAN_COLLECTIVE_WEIGHT,
            description: "Prior knowledge, cultural context, feedback",
            attribution: "Community contribution recognition",
            compensation: "Commons benefit sharing",
        },
        ContributionRecord {
            stakeholder: StakeholderKind::Institutional,
            weight: INSTITUTIONAL_WEIGHT,
            description: "Infrastructure, resources, platform provision",
            attribution: "Institutional support acknowledgment",
            compensation: "Institutional benefit allocation",
        },
    ]
}
