// AgentDeck - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::error::DispatchError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Agent kind
// =============================================================================

/// The four simulated agents, in dashboard layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Narrative,
    Compliance,
    Segmentation,
    Competitor,
}

impl AgentKind {
    /// Returns all variants in layout order (row-major across the 2x2 grid).
    pub fn all() -> &'static [AgentKind] {
        &[
            AgentKind::Narrative,
            AgentKind::Compliance,
            AgentKind::Segmentation,
            AgentKind::Competitor,
        ]
    }

    /// Panel title.
    pub fn label(&self) -> &'static str {
        match self {
            AgentKind::Narrative => "Narrative Agent",
            AgentKind::Compliance => "Compliance Agent",
            AgentKind::Segmentation => "Segmentation Agent",
            AgentKind::Competitor => "Competitor Agent",
        }
    }

    /// One-line description shown under the panel title.
    pub fn tagline(&self) -> &'static str {
        match self {
            AgentKind::Narrative => "Draft a brand story for a target audience",
            AgentKind::Compliance => "Review copy against a regulation or policy",
            AgentKind::Segmentation => "Split a market into addressable segments",
            AgentKind::Competitor => "Compare a company against its competitors",
        }
    }

    /// Substring the mock dispatcher looks for to route a prompt here.
    pub fn keyword(&self) -> &'static str {
        match self {
            AgentKind::Narrative => "narrative",
            AgentKind::Compliance => "compliance",
            AgentKind::Segmentation => "segment",
            AgentKind::Competitor => "competitor",
        }
    }

    /// Position in `all()`, used to index per-panel arrays.
    pub fn index(&self) -> usize {
        match self {
            AgentKind::Narrative => 0,
            AgentKind::Compliance => 1,
            AgentKind::Segmentation => 2,
            AgentKind::Competitor => 3,
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Tone options offered by the narrative form.
pub const NARRATIVE_TONES: &[&str] = &["Inspiring", "Professional", "Playful", "Urgent"];

/// Inputs for the narrative agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeForm {
    pub brand: String,
    pub audience: String,
    /// Free text, one key point per line.
    pub key_points: String,
    pub tone: String,
}

impl Default for NarrativeForm {
    fn default() -> Self {
        Self {
            brand: String::new(),
            audience: String::new(),
            key_points: String::new(),
            tone: NARRATIVE_TONES[0].to_string(),
        }
    }
}

/// Inputs for the compliance agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceForm {
    /// The copy under review.
    pub content: String,
    /// Regulation or internal policy name, e.g. "GDPR". Optional.
    pub regulation: String,
}

/// Inputs for the segmentation agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationForm {
    pub product: String,
    pub market: String,
    pub notes: String,
}

/// Inputs for the competitor agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorForm {
    pub company: String,
    /// Comma-separated competitor names.
    pub competitors: String,
    pub industry: String,
}

/// Any one of the four forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "agent", rename_all = "lowercase")]
pub enum AgentForm {
    Narrative(NarrativeForm),
    Compliance(ComplianceForm),
    Segmentation(SegmentationForm),
    Competitor(CompetitorForm),
}

impl AgentForm {
    /// An empty form for the given agent.
    pub fn empty(kind: AgentKind) -> Self {
        match kind {
            AgentKind::Narrative => AgentForm::Narrative(NarrativeForm::default()),
            AgentKind::Compliance => AgentForm::Compliance(ComplianceForm::default()),
            AgentKind::Segmentation => AgentForm::Segmentation(SegmentationForm::default()),
            AgentKind::Competitor => AgentForm::Competitor(CompetitorForm::default()),
        }
    }

    pub fn kind(&self) -> AgentKind {
        match self {
            AgentForm::Narrative(_) => AgentKind::Narrative,
            AgentForm::Compliance(_) => AgentKind::Compliance,
            AgentForm::Segmentation(_) => AgentKind::Segmentation,
            AgentForm::Competitor(_) => AgentKind::Competitor,
        }
    }

    /// `(field name, value)` pairs in display order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            AgentForm::Narrative(f) => vec![
                ("brand", f.brand.as_str()),
                ("audience", f.audience.as_str()),
                ("key points", f.key_points.as_str()),
                ("tone", f.tone.as_str()),
            ],
            AgentForm::Compliance(f) => {
                vec![("content", f.content.as_str()), ("regulation", f.regulation.as_str())]
            }
            AgentForm::Segmentation(f) => vec![
                ("product", f.product.as_str()),
                ("market", f.market.as_str()),
                ("notes", f.notes.as_str()),
            ],
            AgentForm::Competitor(f) => vec![
                ("company", f.company.as_str()),
                ("competitors", f.competitors.as_str()),
                ("industry", f.industry.as_str()),
            ],
        }
    }

    /// True when every free-text field is blank. Narrative tone is a
    /// selection, not free text, so it is ignored here.
    pub fn is_blank(&self) -> bool {
        self.fields()
            .iter()
            .filter(|(name, _)| *name != "tone")
            .all(|(_, v)| v.trim().is_empty())
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Output of the narrative agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeResult {
    pub headline: String,
    pub story: String,
    pub key_messages: Vec<String>,
    pub tone: String,
}

/// Overall compliance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Compliant,
    NeedsReview,
    NonCompliant,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Compliant => "Compliant",
            Verdict::NeedsReview => "Needs review",
            Verdict::NonCompliant => "Non-compliant",
        }
    }
}

/// Severity of a single compliance finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    High,
    Medium,
    Low,
}

impl IssueSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            IssueSeverity::High => "High",
            IssueSeverity::Medium => "Medium",
            IssueSeverity::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceIssue {
    pub severity: IssueSeverity,
    pub finding: String,
    pub suggestion: String,
}

/// Output of the compliance agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceResult {
    pub verdict: Verdict,
    /// 0-100, higher is safer.
    pub score: u8,
    pub issues: Vec<ComplianceIssue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub name: String,
    pub share_pct: u8,
    pub traits: Vec<String>,
    pub channels: Vec<String>,
}

/// Output of the segmentation agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentationResult {
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitorProfile {
    pub name: String,
    pub market_share_pct: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Output of the competitor agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitorResult {
    pub competitors: Vec<CompetitorProfile>,
    pub opportunities: Vec<String>,
}

/// Any one of the four canned responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "agent", content = "result", rename_all = "lowercase")]
pub enum AgentResponse {
    Narrative(NarrativeResult),
    Compliance(ComplianceResult),
    Segmentation(SegmentationResult),
    Competitor(CompetitorResult),
}

impl AgentResponse {
    pub fn kind(&self) -> AgentKind {
        match self {
            AgentResponse::Narrative(_) => AgentKind::Narrative,
            AgentResponse::Compliance(_) => AgentKind::Compliance,
            AgentResponse::Segmentation(_) => AgentKind::Segmentation,
            AgentResponse::Competitor(_) => AgentKind::Competitor,
        }
    }
}

// =============================================================================
// Dispatch messages (background worker → UI thread)
// =============================================================================

/// Result of one simulated agent call, delivered over the dispatch channel.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Request ID returned by `DispatchManager::submit`.
    pub request_id: u64,

    /// Panel that issued the request.
    pub kind: AgentKind,

    /// When the worker produced the outcome.
    pub generated_at: DateTime<Utc>,

    pub result: Result<AgentResponse, DispatchError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_layout_order() {
        for (i, kind) in AgentKind::all().iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_empty_form_kind_round_trips() {
        for kind in AgentKind::all() {
            assert_eq!(AgentForm::empty(*kind).kind(), *kind);
        }
    }

    #[test]
    fn test_new_form_is_blank_despite_default_tone() {
        let form = AgentForm::empty(AgentKind::Narrative);
        assert!(form.is_blank());

        let filled = AgentForm::Narrative(NarrativeForm {
            brand: "Acme".to_string(),
            ..Default::default()
        });
        assert!(!filled.is_blank());
    }

    #[test]
    fn test_form_deserialises_with_missing_fields() {
        let form: AgentForm =
            serde_json::from_str(r#"{"agent":"competitor","company":"Acme"}"#).unwrap();
        match form {
            AgentForm::Competitor(f) => {
                assert_eq!(f.company, "Acme");
                assert!(f.competitors.is_empty());
            }
            other => panic!("expected competitor form, got {other:?}"),
        }
    }
}
