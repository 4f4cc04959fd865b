// AgentDeck - ui/panels/compliance.rs
//
// Compliance agent panel: content under review and the regulation it is
// checked against. Results show a verdict, score, and findings.

use crate::app::state::PanelState;
use crate::core::model::{AgentForm, AgentResponse};
use crate::ui::components::{self, PanelAction};
use crate::ui::theme;

/// Render the compliance panel body (inside its card).
pub fn render(ui: &mut egui::Ui, panel: &mut PanelState) -> PanelAction {
    ui.add_enabled_ui(!panel.loading, |ui| {
        if let AgentForm::Compliance(form) = &mut panel.form {
            components::form_grid(ui, "compliance_form", |ui| {
                components::text_area(
                    ui,
                    "Content",
                    &mut form.content,
                    "Paste the copy to review",
                );
                components::text_field(
                    ui,
                    "Regulation",
                    &mut form.regulation,
                    "e.g. GDPR, FTC, internal brand policy",
                );
            });
        }
    });

    let action = components::panel_footer(ui, panel);

    if let Some(AgentResponse::Compliance(r)) = &panel.result {
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(r.verdict.label())
                    .strong()
                    .color(theme::verdict_colour(r.verdict)),
            );
            ui.label(format!("Score: {}/100", r.score));
        });
        egui::Grid::new("compliance_issues")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                for issue in &r.issues {
                    ui.label(
                        egui::RichText::new(issue.severity.label())
                            .strong()
                            .color(theme::issue_colour(issue.severity)),
                    );
                    ui.vertical(|ui| {
                        ui.label(&issue.finding);
                        ui.label(
                            egui::RichText::new(format!("\u{2192} {}", issue.suggestion))
                                .small()
                                .weak(),
                        );
                    });
                    ui.end_row();
                }
            });
    }

    action
}
