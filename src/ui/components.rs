// AgentDeck - ui/components.rs
//
// Presentational building blocks shared by the four agent panels:
// the card wrapper, the spinner, labelled form fields, and the
// Generate/Reset footer.

use crate::app::state::PanelState;
use crate::ui::theme;
use crate::util::constants::MULTILINE_ROWS;

/// What the user asked a panel to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    None,
    Generate,
    Reset,
}

/// Framed card with a heading and a weak subtitle.
pub fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    subtitle: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let dark_mode = ui.visuals().dark_mode;
    egui::Frame::group(ui.style())
        .fill(theme::card_fill(dark_mode))
        .show(ui, |ui| {
            ui.set_min_height(theme::CARD_MIN_HEIGHT);
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).heading().color(theme::ACCENT));
            ui.label(egui::RichText::new(subtitle).small().weak());
            ui.separator();
            add_contents(ui)
        })
        .inner
}

/// Spinner with a caption.
pub fn loading_indicator(ui: &mut egui::Ui, label: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(egui::RichText::new(label).weak());
    });
}

/// Single-line labelled text field.
pub fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.end_row();
}

/// Multi-line labelled text field.
pub fn text_area(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(MULTILINE_ROWS)
            .desired_width(f32::INFINITY),
    );
    ui.end_row();
}

/// Two-column grid for a panel's form fields.
pub fn form_grid(ui: &mut egui::Ui, id: &str, add_rows: impl FnOnce(&mut egui::Ui)) {
    egui::Grid::new(id)
        .num_columns(2)
        .min_col_width(theme::FIELD_LABEL_WIDTH)
        .spacing([8.0, 6.0])
        .striped(false)
        .show(ui, add_rows);
}

/// Generate/Reset buttons, then the spinner or error string.
///
/// Generate is disabled while the panel is loading; Reset is always
/// available and abandons any in-flight request.
pub fn panel_footer(ui: &mut egui::Ui, panel: &PanelState) -> PanelAction {
    let mut action = PanelAction::None;

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let generate = ui.add_enabled(!panel.loading, egui::Button::new("Generate"));
        if generate.clicked() {
            action = PanelAction::Generate;
        }
        if ui.button("Reset").clicked() {
            action = PanelAction::Reset;
        }
        if let Some(ts) = panel.generated_at {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(ts.format("%H:%M:%S UTC").to_string())
                        .small()
                        .weak(),
                );
            });
        }
    });

    if panel.loading {
        loading_indicator(ui, "Generating\u{2026}");
    } else if let Some(ref err) = panel.error {
        ui.colored_label(theme::error_colour(ui.visuals().dark_mode), err);
    }

    action
}

/// Bulleted list of strings.
pub fn bullet_list(ui: &mut egui::Ui, items: &[String]) {
    for item in items {
        ui.label(format!("\u{2022} {item}"));
    }
}

/// Horizontal percentage bar with a caption.
pub fn share_bar(ui: &mut egui::Ui, pct: u8) {
    ui.add(
        egui::ProgressBar::new(f32::from(pct.min(100)) / 100.0)
            .text(format!("{pct}%"))
            .fill(theme::ACCENT),
    );
}
