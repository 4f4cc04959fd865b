// AgentDeck - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the four agent panels and the dispatch lifecycle.

use crate::app::dispatcher::DispatchManager;
use crate::app::session::{self, DraftSession};
use crate::app::state::AppState;
use crate::core::model::AgentKind;
use crate::ui;
use crate::ui::components::PanelAction;
use std::path::PathBuf;

/// The AgentDeck application.
pub struct AgentDeckApp {
    pub state: AppState,
    pub dispatcher: DispatchManager,
    /// Where drafts are saved on exit; `None` disables saving.
    pub session_path: Option<PathBuf>,
    /// Set when theme or font size changed and the style must be re-applied.
    style_dirty: bool,
}

impl AgentDeckApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, session_path: Option<PathBuf>) -> Self {
        Self {
            state,
            dispatcher: DispatchManager::new(),
            session_path,
            style_dirty: true,
        }
    }

    /// Validate, build the prompt, and hand it to the dispatcher.
    fn generate(&mut self, kind: AgentKind) {
        let Some(prompt) = self.state.prepare_submission(kind) else {
            self.state.status_message = format!("{}: check the form.", kind.label());
            return;
        };
        let request_id = self.dispatcher.submit(kind, prompt, self.state.latency);
        self.state.panel_mut(kind).begin(request_id);
        self.state.status_message = format!("{} is working\u{2026}", kind.label());
    }

    /// Save the result of `kind` to a user-chosen JSON file.
    fn export_result(&mut self, kind: AgentKind) {
        let panel = self.state.panel(kind);
        let (Some(response), Some(generated_at)) = (panel.result.clone(), panel.generated_at)
        else {
            return;
        };

        let default_name = format!("{}-result.json", kind.keyword());
        let Some(dest) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };

        self.state.status_message = match std::fs::File::create(&dest) {
            Ok(f) => match crate::core::export::export_json(&response, generated_at, f, &dest) {
                Ok(()) => format!("Exported {} result to {}.", kind.label(), dest.display()),
                Err(e) => {
                    tracing::warn!(error = %e, "Export failed");
                    format!("Export failed: {e}")
                }
            },
            Err(e) => format!("Cannot create file: {e}"),
        };
    }

    /// Render one agent card and return the action the user took.
    fn render_card(ui: &mut egui::Ui, panel: &mut crate::app::state::PanelState) -> PanelAction {
        let kind = panel.kind();
        ui::components::card(ui, kind.label(), kind.tagline(), |ui| match kind {
            AgentKind::Narrative => ui::panels::narrative::render(ui, panel),
            AgentKind::Compliance => ui::panels::compliance::render(ui, panel),
            AgentKind::Segmentation => ui::panels::segmentation::render(ui, panel),
            AgentKind::Competitor => ui::panels::competitor::render(ui, panel),
        })
    }
}

impl eframe::App for AgentDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.style_dirty {
            ui::theme::apply_style(ctx, self.state.dark_mode, self.state.font_size);
            self.style_dirty = false;
        }

        // Poll for dispatch outcomes.
        for outcome in self.dispatcher.poll() {
            self.state.apply_outcome(outcome);
        }
        // Keep the spinners turning and pick up outcomes promptly.
        if self.state.any_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                crate::util::constants::LOADING_REPAINT_MS,
            ));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    ui.menu_button("Export Result", |ui| {
                        for kind in AgentKind::all() {
                            let has_result = self.state.panel(*kind).result.is_some();
                            if ui
                                .add_enabled(has_result, egui::Button::new(kind.label()))
                                .clicked()
                            {
                                self.export_result(*kind);
                                ui.close_menu();
                            }
                        }
                    });
                    if ui.button("Reset All Panels").clicked() {
                        self.state.reset_all();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.menu_button("Copy Result", |ui| {
                        for kind in AgentKind::all() {
                            let report = self
                                .state
                                .panel(*kind)
                                .result
                                .as_ref()
                                .map(crate::core::export::text_report);
                            if ui
                                .add_enabled(report.is_some(), egui::Button::new(kind.label()))
                                .clicked()
                            {
                                if let Some(report) = report {
                                    ctx.copy_text(report);
                                    self.state.status_message =
                                        format!("Copied {} result to clipboard.", kind.label());
                                }
                                ui.close_menu();
                            }
                        }
                    });
                    ui.separator();
                    if ui.button("Options\u{2026}").clicked() {
                        self.state.show_options = true;
                        ui.close_menu();
                    }
                    let has_warnings = !self.state.warnings.is_empty();
                    ui.add_enabled_ui(has_warnings, |ui| {
                        let label = format!("Warnings ({})", self.state.warnings.len());
                        if ui.button(label).clicked() {
                            self.state.show_warnings = true;
                            ui.close_menu();
                        }
                    });
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "latency {} ms",
                            self.state.latency.as_millis()
                        ))
                        .weak(),
                    );
                    let running = self.state.panels.iter().filter(|p| p.loading).count();
                    if running > 0 {
                        ui.separator();
                        ui.label(format!("{running} running"));
                    }
                    if self.state.debug_mode {
                        ui.separator();
                        ui.label(egui::RichText::new("DEBUG").weak());
                    }
                });
            });
        });

        // Central 2x2 grid of agent cards.
        let mut actions: Vec<(AgentKind, PanelAction)> = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let panels = &mut self.state.panels;
                    for row in AgentKind::all().chunks(2) {
                        ui.columns(2, |cols| {
                            for (col, kind) in cols.iter_mut().zip(row) {
                                let action = Self::render_card(col, &mut panels[kind.index()]);
                                actions.push((*kind, action));
                            }
                        });
                        ui.add_space(ui::theme::GRID_SPACING);
                    }
                });
        });

        for (kind, action) in actions {
            match action {
                PanelAction::None => {}
                PanelAction::Generate => self.generate(kind),
                PanelAction::Reset => {
                    self.state.panel_mut(kind).reset();
                    self.state.status_message = format!("{} reset.", kind.label());
                }
            }
        }

        // Dialogs
        if ui::panels::options::render(ctx, &mut self.state) {
            self.style_dirty = true;
        }
        ui::panels::warnings::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the form drafts so the next launch can restore them.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let Some(ref path) = self.session_path else {
            return;
        };
        let data = DraftSession::from_forms(self.state.drafts());
        if let Err(e) = session::save(&data, path) {
            tracing::warn!(error = %e, "Failed to save drafts");
        }
    }
}
