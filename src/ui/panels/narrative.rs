// AgentDeck - ui/panels/narrative.rs
//
// Narrative agent panel: brand, audience, key points, tone.

use crate::app::state::PanelState;
use crate::core::model::{AgentForm, AgentResponse, NARRATIVE_TONES};
use crate::ui::components::{self, PanelAction};

/// Render the narrative panel body (inside its card).
pub fn render(ui: &mut egui::Ui, panel: &mut PanelState) -> PanelAction {
    ui.add_enabled_ui(!panel.loading, |ui| {
        if let AgentForm::Narrative(form) = &mut panel.form {
            components::form_grid(ui, "narrative_form", |ui| {
                components::text_field(ui, "Brand", &mut form.brand, "e.g. Acme Coffee");
                components::text_field(
                    ui,
                    "Audience",
                    &mut form.audience,
                    "e.g. Urban commuters aged 25-40",
                );
                components::text_area(
                    ui,
                    "Key points",
                    &mut form.key_points,
                    "One point per line",
                );
                ui.label("Tone");
                egui::ComboBox::from_id_salt("narrative_tone")
                    .selected_text(form.tone.as_str())
                    .show_ui(ui, |ui| {
                        for tone in NARRATIVE_TONES {
                            ui.selectable_value(&mut form.tone, (*tone).to_string(), *tone);
                        }
                    });
                ui.end_row();
            });
        }
    });

    let action = components::panel_footer(ui, panel);

    if let Some(AgentResponse::Narrative(r)) = &panel.result {
        ui.separator();
        ui.label(egui::RichText::new(&r.headline).strong().size(16.0));
        ui.add_space(2.0);
        ui.label(&r.story);
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Key messages").strong());
        components::bullet_list(ui, &r.key_messages);
        ui.label(egui::RichText::new(format!("Tone: {}", r.tone)).small().weak());
    }

    action
}
