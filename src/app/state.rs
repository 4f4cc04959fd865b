// AgentDeck - app/state.rs
//
// Application state management. Holds the per-panel form, loading flag,
// result and error string, plus dashboard-wide settings.
// Owned by the eframe::App implementation.

use crate::core::model::{AgentForm, AgentKind, AgentResponse, DispatchOutcome};
use crate::core::{prompt, validate};
use crate::util::error::ValidationError;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// State of one agent panel.
#[derive(Debug, Clone)]
pub struct PanelState {
    /// Current form inputs (edited in place by the UI).
    pub form: AgentForm,

    /// True between submission and the matching outcome.
    pub loading: bool,

    /// Most recent successful response.
    pub result: Option<AgentResponse>,

    /// Error string to show instead of a result.
    pub error: Option<String>,

    /// Request ID the panel is waiting on, if loading.
    pub pending_request: Option<u64>,

    /// When `result` was produced.
    pub generated_at: Option<DateTime<Utc>>,
}

impl PanelState {
    pub fn new(kind: AgentKind) -> Self {
        Self {
            form: AgentForm::empty(kind),
            loading: false,
            result: None,
            error: None,
            pending_request: None,
            generated_at: None,
        }
    }

    pub fn kind(&self) -> AgentKind {
        self.form.kind()
    }

    /// Enter the loading state for `request_id`, clearing any previous
    /// result or error.
    pub fn begin(&mut self, request_id: u64) {
        self.loading = true;
        self.pending_request = Some(request_id);
        self.result = None;
        self.error = None;
        self.generated_at = None;
    }

    /// Apply an outcome from the dispatcher.
    ///
    /// Returns false (and changes nothing) when the outcome is not for the
    /// request this panel is waiting on.
    pub fn complete(&mut self, outcome: DispatchOutcome) -> bool {
        if self.pending_request != Some(outcome.request_id) {
            tracing::debug!(
                request_id = outcome.request_id,
                pending = ?self.pending_request,
                "Discarding stale dispatch outcome"
            );
            return false;
        }

        self.loading = false;
        self.pending_request = None;

        match outcome.result {
            Ok(response) if response.kind() == self.kind() => {
                self.result = Some(response);
                self.generated_at = Some(outcome.generated_at);
                self.error = None;
            }
            Ok(response) => {
                tracing::warn!(
                    panel = ?self.kind(),
                    response = ?response.kind(),
                    "Dispatcher answered with another agent's response"
                );
                self.error = Some(format!(
                    "Received a {} response; please rephrase and try again.",
                    response.kind().label()
                ));
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Record a validation failure without entering the loading state.
    pub fn fail_validation(&mut self, err: &ValidationError) {
        self.error = Some(err.to_string());
        self.result = None;
        self.generated_at = None;
    }

    /// Clear inputs, result, error and any in-flight request.
    pub fn reset(&mut self) {
        *self = Self::new(self.kind());
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// One panel per `AgentKind`, indexed by `AgentKind::index()`.
    pub panels: Vec<PanelState>,

    /// Simulated dispatch latency.
    pub latency: Duration,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings from config loading, shown in the warnings window.
    pub warnings: Vec<String>,

    /// Whether to show the warnings window.
    pub show_warnings: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether to show the Options dialog.
    pub show_options: bool,

    /// Dark (true) or light visuals.
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state with empty forms.
    pub fn new(latency: Duration, debug_mode: bool) -> Self {
        Self {
            panels: AgentKind::all().iter().map(|k| PanelState::new(*k)).collect(),
            latency,
            status_message: "Ready. Fill in a panel and press Generate.".to_string(),
            warnings: Vec::new(),
            show_warnings: false,
            show_about: false,
            show_options: false,
            dark_mode: true,
            font_size: crate::util::constants::DEFAULT_FONT_SIZE,
            debug_mode,
        }
    }

    pub fn panel(&self, kind: AgentKind) -> &PanelState {
        &self.panels[kind.index()]
    }

    pub fn panel_mut(&mut self, kind: AgentKind) -> &mut PanelState {
        &mut self.panels[kind.index()]
    }

    /// True if any panel is waiting on a response.
    pub fn any_loading(&self) -> bool {
        self.panels.iter().any(|p| p.loading)
    }

    /// Validate the panel's form and build its prompt.
    ///
    /// Returns `None` when validation fails (the error is recorded on the
    /// panel) or when the panel is already loading.
    pub fn prepare_submission(&mut self, kind: AgentKind) -> Option<String> {
        let panel = self.panel_mut(kind);
        if panel.loading {
            return None;
        }
        if let Err(e) = validate::validate(&panel.form) {
            tracing::debug!(agent = ?kind, error = %e, "Form validation failed");
            panel.fail_validation(&e);
            return None;
        }
        Some(prompt::build_prompt(&panel.form))
    }

    /// Route an outcome to its panel and update the status bar.
    pub fn apply_outcome(&mut self, outcome: DispatchOutcome) {
        let kind = outcome.kind;
        let ok = outcome.result.is_ok();
        if !self.panel_mut(kind).complete(outcome) {
            return;
        }
        self.status_message = if ok {
            format!("{} finished.", kind.label())
        } else {
            format!("{} failed.", kind.label())
        };
    }

    /// Reset every panel.
    pub fn reset_all(&mut self) {
        for panel in &mut self.panels {
            panel.reset();
        }
        self.status_message = "All panels reset.".to_string();
    }

    /// Snapshot of the current forms, for draft persistence.
    pub fn drafts(&self) -> Vec<AgentForm> {
        self.panels.iter().map(|p| p.form.clone()).collect()
    }

    /// Restore saved forms. When a list holds two drafts for the same
    /// agent, the last one wins.
    pub fn restore_drafts(&mut self, drafts: Vec<AgentForm>) {
        let mut restored = 0usize;
        for form in drafts {
            let kind = form.kind();
            self.panel_mut(kind).form = form;
            restored += 1;
        }
        tracing::debug!(restored, "Drafts restored");
    }
}
