// AgentDeck - core/dispatch.rs
//
// Mock dispatch: routes a prompt to one of four canned responses by
// case-insensitive substring match. No model, no network.
//
// Routing rule: among the agent keywords present in the prompt, the one that
// occurs earliest wins. Prompts built by core::prompt open with their own
// agent's keyword, so user text later in the prompt cannot re-route them.
// Ties (impossible with the current keyword set) fall back to layout order.

use crate::core::model::{
    AgentKind, AgentResponse, CompetitorProfile, CompetitorResult, ComplianceIssue,
    ComplianceResult, IssueSeverity, NarrativeResult, Segment, SegmentationResult, Verdict,
};
use crate::util::error::DispatchError;

/// Characters of the prompt quoted back in an `Unrecognised` error.
const EXCERPT_CHARS: usize = 40;

/// Decide which agent a prompt is addressed to, if any.
pub fn route(prompt: &str) -> Option<AgentKind> {
    let lowered = prompt.to_lowercase();
    AgentKind::all()
        .iter()
        .filter_map(|kind| lowered.find(kind.keyword()).map(|pos| (pos, *kind)))
        .min_by_key(|(pos, kind)| (*pos, kind.index()))
        .map(|(_, kind)| kind)
}

/// Answer a prompt with the canned response for the agent it names.
pub fn mock_dispatch(prompt: &str) -> Result<AgentResponse, DispatchError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(DispatchError::EmptyPrompt);
    }

    match route(trimmed) {
        Some(kind) => {
            tracing::debug!(agent = ?kind, prompt_len = trimmed.len(), "Prompt routed");
            Ok(canned_response(kind))
        }
        None => {
            let mut excerpt: String = trimmed.chars().take(EXCERPT_CHARS).collect();
            if trimmed.chars().count() > EXCERPT_CHARS {
                excerpt.push('\u{2026}');
            }
            tracing::debug!(prompt_len = trimmed.len(), "Prompt matched no agent");
            Err(DispatchError::Unrecognised { excerpt })
        }
    }
}

/// The fixed literal response for an agent.
pub fn canned_response(kind: AgentKind) -> AgentResponse {
    match kind {
        AgentKind::Narrative => AgentResponse::Narrative(narrative()),
        AgentKind::Compliance => AgentResponse::Compliance(compliance()),
        AgentKind::Segmentation => AgentResponse::Segmentation(segmentation()),
        AgentKind::Competitor => AgentResponse::Competitor(competitor()),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn narrative() -> NarrativeResult {
    NarrativeResult {
        headline: "Built for the Moments That Matter".to_string(),
        story: "Every great day starts with a small decision. Our brand exists to make \
                that decision effortless: dependable quality, honest pricing, and a team \
                that shows up when it counts. We don't chase trends; we earn trust one \
                customer at a time, and we let that trust carry the story forward."
            .to_string(),
        key_messages: strings(&[
            "Reliability you can plan around",
            "Transparent pricing with no surprises",
            "A team that answers when you call",
        ]),
        tone: "Inspiring".to_string(),
    }
}

fn compliance() -> ComplianceResult {
    ComplianceResult {
        verdict: Verdict::NeedsReview,
        score: 72,
        issues: vec![
            ComplianceIssue {
                severity: IssueSeverity::High,
                finding: "Absolute claim (\"guaranteed results\") without substantiation"
                    .to_string(),
                suggestion: "Qualify the claim or cite supporting evidence".to_string(),
            },
            ComplianceIssue {
                severity: IssueSeverity::Medium,
                finding: "Promotional offer lacks terms and expiry date".to_string(),
                suggestion: "Add a link to full terms and state the offer end date"
                    .to_string(),
            },
            ComplianceIssue {
                severity: IssueSeverity::Low,
                finding: "No data-collection notice near the sign-up call to action"
                    .to_string(),
                suggestion: "Reference the privacy policy next to the form".to_string(),
            },
        ],
    }
}

fn segmentation() -> SegmentationResult {
    SegmentationResult {
        segments: vec![
            Segment {
                name: "Value Seekers".to_string(),
                share_pct: 38,
                traits: strings(&["Price-sensitive", "Compares alternatives", "Coupon users"]),
                channels: strings(&["Email", "Search ads"]),
            },
            Segment {
                name: "Early Adopters".to_string(),
                share_pct: 27,
                traits: strings(&["Tech-savvy", "Trend-driven", "Shares on social"]),
                channels: strings(&["Social media", "Influencer partnerships"]),
            },
            Segment {
                name: "Loyal Regulars".to_string(),
                share_pct: 35,
                traits: strings(&["Repeat purchasers", "Brand-trusting", "Low churn"]),
                channels: strings(&["Loyalty programme", "In-app messaging"]),
            },
        ],
    }
}

fn competitor() -> CompetitorResult {
    CompetitorResult {
        competitors: vec![
            CompetitorProfile {
                name: "Market Leader Co.".to_string(),
                market_share_pct: 34,
                strengths: strings(&["Brand recognition", "Distribution reach"]),
                weaknesses: strings(&["Slow product cycles", "Premium pricing"]),
            },
            CompetitorProfile {
                name: "Challenger Inc.".to_string(),
                market_share_pct: 21,
                strengths: strings(&["Aggressive pricing", "Modern UX"]),
                weaknesses: strings(&["Limited support", "Narrow product line"]),
            },
        ],
        opportunities: strings(&[
            "Underserved mid-market customers",
            "Bundled onboarding and support",
            "Faster release cadence than the incumbent",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_routes_to_its_agent() {
        for kind in AgentKind::all() {
            let prompt = format!("Please run the {} agent", kind.keyword());
            let response = mock_dispatch(&prompt).unwrap();
            assert_eq!(response.kind(), *kind);
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let response = mock_dispatch("COMPLIANCE CHECK").unwrap();
        assert_eq!(response.kind(), AgentKind::Compliance);
    }

    #[test]
    fn test_earliest_keyword_wins() {
        // User text mentioning another agent's keyword must not re-route.
        let prompt = "Prepare a competitor analysis.\nIndustry: compliance software";
        assert_eq!(route(prompt), Some(AgentKind::Competitor));

        let prompt = "Segment the audience.\nNotes: they love a good narrative";
        assert_eq!(route(prompt), Some(AgentKind::Segmentation));
    }

    #[test]
    fn test_segment_matches_inside_segmentation() {
        assert_eq!(route("audience segmentation"), Some(AgentKind::Segmentation));
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert_eq!(mock_dispatch("  \n "), Err(DispatchError::EmptyPrompt));
    }

    #[test]
    fn test_unrecognised_prompt_quotes_excerpt() {
        let prompt = "a".repeat(100);
        match mock_dispatch(&prompt) {
            Err(DispatchError::Unrecognised { excerpt }) => {
                assert_eq!(excerpt.chars().count(), EXCERPT_CHARS + 1);
                assert!(excerpt.ends_with('\u{2026}'));
            }
            other => panic!("expected Unrecognised, got {other:?}"),
        }
    }

    #[test]
    fn test_canned_responses_are_stable() {
        for kind in AgentKind::all() {
            assert_eq!(canned_response(*kind), canned_response(*kind));
        }
    }

    #[test]
    fn test_segment_shares_sum_to_100() {
        let total: u32 = segmentation()
            .segments
            .iter()
            .map(|s| u32::from(s.share_pct))
            .sum();
        assert_eq!(total, 100);
    }
}
