// AgentDeck - ui/panels/competitor.rs
//
// Competitor agent panel: company, competitor list, industry.

use crate::app::state::PanelState;
use crate::core::model::{AgentForm, AgentResponse};
use crate::ui::components::{self, PanelAction};

/// Render the competitor panel body (inside its card).
pub fn render(ui: &mut egui::Ui, panel: &mut PanelState) -> PanelAction {
    ui.add_enabled_ui(!panel.loading, |ui| {
        if let AgentForm::Competitor(form) = &mut panel.form {
            components::form_grid(ui, "competitor_form", |ui| {
                components::text_field(ui, "Company", &mut form.company, "Your company");
                components::text_field(
                    ui,
                    "Competitors",
                    &mut form.competitors,
                    "Comma-separated names",
                );
                components::text_field(ui, "Industry", &mut form.industry, "e.g. Fintech");
            });
        }
    });

    let action = components::panel_footer(ui, panel);

    if let Some(AgentResponse::Competitor(r)) = &panel.result {
        ui.separator();
        egui::Grid::new("competitor_table")
            .num_columns(4)
            .spacing([12.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Share");
                ui.strong("Strengths");
                ui.strong("Weaknesses");
                ui.end_row();
                for c in &r.competitors {
                    ui.label(&c.name);
                    ui.label(format!("{}%", c.market_share_pct));
                    ui.label(c.strengths.join(", "));
                    ui.label(c.weaknesses.join(", "));
                    ui.end_row();
                }
            });
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Opportunities").strong());
        components::bullet_list(ui, &r.opportunities);
    }

    action
}
