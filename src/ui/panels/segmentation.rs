// AgentDeck - ui/panels/segmentation.rs
//
// Segmentation agent panel.

use crate::app::state::PanelState;
use crate::core::model::{AgentForm, AgentResponse};
use crate::ui::components::{self, PanelAction};

/// Render the segmentation panel body (inside its card).
pub fn render(ui: &mut egui::Ui, panel: &mut PanelState) -> PanelAction {
    ui.add_enabled_ui(!panel.loading, |ui| {
        if let AgentForm::Segmentation(form) = &mut panel.form {
            components::form_grid(ui, "segmentation_form", |ui| {
                components::text_field(
                    ui,
                    "Product",
                    &mut form.product,
                    "What are you selling?",
                );
                components::text_field(ui, "Market", &mut form.market, "e.g. UK, SMB, Gen Z");
                components::text_area(
                    ui,
                    "Notes",
                    &mut form.notes,
                    "Anything known about current customers",
                );
            });
        }
    });

    let action = components::panel_footer(ui, panel);

    if let Some(AgentResponse::Segmentation(r)) = &panel.result {
        ui.separator();
        for segment in &r.segments {
            ui.label(egui::RichText::new(&segment.name).strong());
            components::share_bar(ui, segment.share_pct);
            ui.label(format!("Traits: {}", segment.traits.join(", ")));
            ui.label(
                egui::RichText::new(format!("Channels: {}", segment.channels.join(", ")))
                    .small()
                    .weak(),
            );
            ui.add_space(4.0);
        }
    }

    action
}
