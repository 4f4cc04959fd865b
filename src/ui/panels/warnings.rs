// AgentDeck - ui/panels/warnings.rs
//
// Startup warnings window: lists non-fatal config problems so a typo in
// config.toml is visible without reading the log.

use crate::app::state::AppState;

/// Render the warnings window (if `state.show_warnings` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_warnings || state.warnings.is_empty() {
        return;
    }

    let mut open = true;
    egui::Window::new("Configuration Warnings")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .min_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(240.0)
                .show(ui, |ui| {
                    for warning in &state.warnings {
                        ui.label(format!("\u{26a0} {warning}"));
                        ui.add_space(2.0);
                    }
                });
        });

    if !open {
        state.show_warnings = false;
    }
}
