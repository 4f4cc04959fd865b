// AgentDeck - ui/panels/options.rs
//
// Options dialog: runtime-adjustable appearance and simulated latency.
// Shown from View > Options. Changes apply immediately and last for the
// session; persistent defaults live in config.toml.

use crate::app::state::AppState;
use crate::util::constants::{
    DEFAULT_FONT_SIZE, DEFAULT_LATENCY_MS, MAX_FONT_SIZE, MAX_LATENCY_MS, MIN_FONT_SIZE,
};
use std::time::Duration;

/// Render the Options dialog (if `state.show_options` is true).
///
/// Returns true when an appearance setting changed and the style must be
/// re-applied.
pub fn render(ctx: &egui::Context, state: &mut AppState) -> bool {
    if !state.show_options {
        return false;
    }

    let mut style_changed = false;
    let mut open = true;
    egui::Window::new("Options")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .show(ctx, |ui| {
            ui.heading("Appearance");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Theme:");
                style_changed |= ui.radio_value(&mut state.dark_mode, true, "Dark").changed();
                style_changed |= ui.radio_value(&mut state.dark_mode, false, "Light").changed();
            });
            ui.horizontal(|ui| {
                ui.label("Font size:");
                let response = ui.add(
                    egui::Slider::new(&mut state.font_size, MIN_FONT_SIZE..=MAX_FONT_SIZE)
                        .step_by(0.5)
                        .suffix(" pt"),
                );
                style_changed |= response.changed();
                if (state.font_size - DEFAULT_FONT_SIZE).abs() > 0.1
                    && ui.small_button("Reset").clicked()
                {
                    state.font_size = DEFAULT_FONT_SIZE;
                    style_changed = true;
                }
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            ui.heading("Dispatch");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Simulated latency:");
                let mut ms = state.latency.as_millis() as u64;
                if ui
                    .add(egui::Slider::new(&mut ms, 0..=MAX_LATENCY_MS).suffix(" ms"))
                    .changed()
                {
                    state.latency = Duration::from_millis(ms);
                }
                if ms != DEFAULT_LATENCY_MS && ui.small_button("Reset").clicked() {
                    state.latency = Duration::from_millis(DEFAULT_LATENCY_MS);
                }
            });
            ui.label(
                egui::RichText::new("Applies to the next Generate.")
                    .small()
                    .weak(),
            );
        });

    if !open {
        state.show_options = false;
    }
    style_changed
}
