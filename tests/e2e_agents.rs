// AgentDeck - tests/e2e_agents.rs
//
// End-to-end tests for the agent pipeline: form -> validation -> prompt ->
// background dispatch -> panel state -> export and draft persistence.
//
// These exercise the real background worker thread, the real mpsc channel,
// real serde_json output and the real filesystem (via tempfile).

use agentdeck::app::dispatcher::DispatchManager;
use agentdeck::app::session::{self, DraftSession};
use agentdeck::app::state::AppState;
use agentdeck::core::export;
use agentdeck::core::model::{
    AgentForm, AgentKind, AgentResponse, CompetitorForm, ComplianceForm, NarrativeForm,
    SegmentationForm, Verdict,
};
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

/// A valid, filled-in form for every agent.
fn filled_form(kind: AgentKind) -> AgentForm {
    match kind {
        AgentKind::Narrative => AgentForm::Narrative(NarrativeForm {
            brand: "Acme Coffee".to_string(),
            audience: "Urban commuters".to_string(),
            key_points: "Fair trade\nOpen at 6am".to_string(),
            tone: "Playful".to_string(),
        }),
        AgentKind::Compliance => AgentForm::Compliance(ComplianceForm {
            content: "Guaranteed results in 7 days or your money back!".to_string(),
            regulation: "FTC".to_string(),
        }),
        AgentKind::Segmentation => AgentForm::Segmentation(SegmentationForm {
            product: "Meal kits".to_string(),
            market: "UK".to_string(),
            notes: "Mostly families".to_string(),
        }),
        AgentKind::Competitor => AgentForm::Competitor(CompetitorForm {
            company: "Acme".to_string(),
            competitors: "Globex, Initech".to_string(),
            // Another agent's keyword in user text must not re-route the prompt.
            industry: "Compliance software".to_string(),
        }),
    }
}

/// Submit `kind` the way the GUI does and return the request ID.
fn submit(state: &mut AppState, dispatcher: &mut DispatchManager, kind: AgentKind) -> u64 {
    let prompt = state
        .prepare_submission(kind)
        .expect("filled form should validate");
    let id = dispatcher.submit(kind, prompt, state.latency);
    state.panel_mut(kind).begin(id);
    id
}

/// Poll the dispatcher the way the GUI frame loop does until nothing is
/// loading or the deadline passes.
fn pump_until_idle(state: &mut AppState, dispatcher: &DispatchManager) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while state.any_loading() && Instant::now() < deadline {
        for outcome in dispatcher.poll() {
            state.apply_outcome(outcome);
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}

// =============================================================================
// Dispatch E2E
// =============================================================================

/// All four panels submitted together each receive their own canned response.
#[test]
fn e2e_all_panels_receive_their_own_response() {
    let mut state = AppState::new(Duration::from_millis(20), false);
    let mut dispatcher = DispatchManager::new();

    for kind in AgentKind::all() {
        state.panel_mut(*kind).form = filled_form(*kind);
        submit(&mut state, &mut dispatcher, *kind);
        assert!(state.panel(*kind).loading, "{kind:?} should be loading");
    }

    pump_until_idle(&mut state, &dispatcher);

    for kind in AgentKind::all() {
        let panel = state.panel(*kind);
        assert!(!panel.loading);
        assert!(panel.error.is_none(), "{kind:?} error: {:?}", panel.error);
        let result = panel.result.as_ref().expect("result should be present");
        assert_eq!(result.kind(), *kind);
    }
}

/// The compliance panel shows the canned verdict and findings.
#[test]
fn e2e_compliance_result_fields() {
    let mut state = AppState::new(Duration::ZERO, false);
    let mut dispatcher = DispatchManager::new();
    state.panel_mut(AgentKind::Compliance).form = filled_form(AgentKind::Compliance);
    submit(&mut state, &mut dispatcher, AgentKind::Compliance);
    pump_until_idle(&mut state, &dispatcher);

    match &state.panel(AgentKind::Compliance).result {
        Some(AgentResponse::Compliance(r)) => {
            assert_eq!(r.verdict, Verdict::NeedsReview);
            assert_eq!(r.score, 72);
            assert_eq!(r.issues.len(), 3);
        }
        other => panic!("expected compliance result, got {other:?}"),
    }
}

/// Invalid forms never reach the dispatcher and show a static error string.
#[test]
fn e2e_invalid_form_shows_error_without_loading() {
    let mut state = AppState::new(Duration::ZERO, false);
    assert!(state.prepare_submission(AgentKind::Competitor).is_none());

    let panel = state.panel(AgentKind::Competitor);
    assert!(!panel.loading);
    assert_eq!(
        panel.error.as_deref(),
        Some("Please fill in the 'company' field.")
    );
}

/// Resetting a panel mid-flight discards the late response.
#[test]
fn e2e_reset_while_loading_discards_response() {
    let mut state = AppState::new(Duration::from_millis(50), false);
    let mut dispatcher = DispatchManager::new();
    state.panel_mut(AgentKind::Narrative).form = filled_form(AgentKind::Narrative);
    submit(&mut state, &mut dispatcher, AgentKind::Narrative);

    state.panel_mut(AgentKind::Narrative).reset();

    // Wait for the worker to deliver, then apply whatever arrived.
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut delivered = 0;
    while delivered == 0 && Instant::now() < deadline {
        for outcome in dispatcher.poll() {
            state.apply_outcome(outcome);
            delivered += 1;
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(delivered, 1);
    let panel = state.panel(AgentKind::Narrative);
    assert!(panel.result.is_none());
    assert!(!panel.loading);
}

/// A resubmission supersedes the earlier request; only the latest applies.
#[test]
fn e2e_resubmit_after_reset_uses_latest_request() {
    let mut state = AppState::new(Duration::from_millis(10), false);
    let mut dispatcher = DispatchManager::new();
    let kind = AgentKind::Segmentation;

    state.panel_mut(kind).form = filled_form(kind);
    let first = submit(&mut state, &mut dispatcher, kind);
    state.panel_mut(kind).reset();
    state.panel_mut(kind).form = filled_form(kind);
    let second = submit(&mut state, &mut dispatcher, kind);
    assert!(second > first);

    pump_until_idle(&mut state, &dispatcher);
    assert!(state.panel(kind).result.is_some());
    assert!(state.panel(kind).pending_request.is_none());
}

// =============================================================================
// Export and persistence E2E
// =============================================================================

/// A delivered result exports to a JSON file on disk.
#[test]
fn e2e_export_delivered_result_to_file() {
    let mut state = AppState::new(Duration::ZERO, false);
    let mut dispatcher = DispatchManager::new();
    state.panel_mut(AgentKind::Competitor).form = filled_form(AgentKind::Competitor);
    submit(&mut state, &mut dispatcher, AgentKind::Competitor);
    pump_until_idle(&mut state, &dispatcher);

    let panel = state.panel(AgentKind::Competitor);
    let response = panel.result.as_ref().expect("competitor result");
    let generated_at = panel.generated_at.expect("timestamp");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("competitor.json");
    let file = std::fs::File::create(&path).unwrap();
    export::export_json(response, generated_at, file, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["agent"], "competitor");
    assert_eq!(value["result"]["competitors"].as_array().unwrap().len(), 2);
}

/// Drafts saved on exit are restored into a fresh dashboard.
#[test]
fn e2e_drafts_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = session::session_path(dir.path());

    let mut before = AppState::new(Duration::ZERO, false);
    before.panel_mut(AgentKind::Narrative).form = filled_form(AgentKind::Narrative);
    before.panel_mut(AgentKind::Segmentation).form = filled_form(AgentKind::Segmentation);
    session::save(&DraftSession::from_forms(before.drafts()), &path).unwrap();

    let mut after = AppState::new(Duration::ZERO, false);
    let loaded = session::load(&path).expect("drafts should load");
    assert_eq!(loaded.drafts.len(), 2);
    after.restore_drafts(loaded.drafts);

    assert_eq!(
        after.panel(AgentKind::Narrative).form,
        filled_form(AgentKind::Narrative)
    );
    assert!(after.panel(AgentKind::Compliance).form.is_blank());
    assert!(after.panel(AgentKind::Narrative).result.is_none());
}
