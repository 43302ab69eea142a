use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Traditional individual-ownership description. Fixed content; only the
/// surrounding `AnalysisResult` echoes caller input.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TraditionalModel {
    pub paradigm: &'static str,
    pub ownership_basis: &'static str,
    pub attribution: &'static str,
    pub economic_model: &'static str,
    pub sustainability: &'static str,
    pub collaboration: &'static str,
    pub ai_integration: &'static str,
    pub social_impact: &'static str,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StewardshipModel {
    pub paradigm: &'static str,
    pub stewardship_basis: &'static str,
    pub attribution: &'static str,
    pub economic_model: &'static str,
    pub sustainability: &'static str,
    pub collaboration: &'static str,
    pub ai_integration: &'static str,
    pub social_impact: &'static str,
    pub governance: &'static str,
    pub adaptation: &'static str,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderKind {
    HumanIndividual,
    HumanCollective,
    AiSystem,
    Institutional,
    Societal,
}

impl StakeholderKind {
    pub fn label(&self) -> &'static str {
        match self {
            StakeholderKind::HumanIndividual => "human individual",
            StakeholderKind::HumanCollective => "human collective",
            StakeholderKind::AiSystem => "ai system",
            StakeholderKind::Institutional => "institutional",
            StakeholderKind::Societal => "societal",
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ContributionRecord {
    pub stakeholder: StakeholderKind,
    pub weight: f64,
    pub description: &'static str,
    pub attribution: &'static str,
    pub compensation: &'static str,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AnalysisResult {
    pub scenario: String,
    pub traditional_model: TraditionalModel,
    pub stewardship_model: StewardshipModel,
    pub sustainability_score: f64,
    pub challenges: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    pub stakeholder_impacts: Vec<ContributionRecord>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub collaboration: f64,
    pub innovation: f64,
    pub access: f64,
    pub complexity: f64,
    pub total: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PolicyDocument {
    pub title: &'static str,
    pub scope: &'static str,
    pub principles: Vec<&'static str>,
    pub implementation: Vec<&'static str>,
    pub governance: &'static str,
    pub enforcement: &'static str,
}

#[derive(Serialize)]
pub struct PolicyReport {
    pub domain: &'static str,
    pub scenario: String,
    pub document: PolicyDocument,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ContextTemplate {
    pub context: &'static str,
    pub focus: &'static str,
    pub stakeholders: Vec<&'static str>,
    pub priorities: Vec<&'static str>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FrameworkTemplate {
    pub framework: &'static str,
    pub scope: &'static str,
    pub mechanisms: Vec<&'static str>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub context: String,
    pub result: AnalysisResult,
}

#[derive(Serialize)]
pub struct DemoReport {
    pub analyses: Vec<AnalysisResult>,
    pub policy: PolicyDocument,
    pub recorded: usize,
}
