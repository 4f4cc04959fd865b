// AgentDeck - ui/theme.rs
//
// Colour scheme, verdict/severity colour mapping, style application and
// layout constants. No dependencies on app state or business logic.

use crate::core::model::{IssueSeverity, Verdict};
use egui::Color32;

/// Colour for a compliance verdict.
pub fn verdict_colour(verdict: Verdict) -> Color32 {
    match verdict {
        Verdict::Compliant => Color32::from_rgb(22, 163, 74), // Green 600
        Verdict::NeedsReview => Color32::from_rgb(217, 119, 6), // Amber 600
        Verdict::NonCompliant => Color32::from_rgb(220, 38, 38), // Red 600
    }
}

/// Colour for a compliance finding.
pub fn issue_colour(severity: IssueSeverity) -> Color32 {
    match severity {
        IssueSeverity::High => Color32::from_rgb(220, 38, 38), // Red 600
        IssueSeverity::Medium => Color32::from_rgb(217, 119, 6), // Amber 600
        IssueSeverity::Low => Color32::from_rgb(107, 114, 128), // Gray 500
    }
}

/// Error text colour, readable on both dark and light backgrounds.
pub fn error_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(248, 113, 113) // Red 400
    } else {
        Color32::from_rgb(185, 28, 28) // Red 700
    }
}

/// Card background.
pub fn card_fill(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(31, 41, 55) // Gray 800
    } else {
        Color32::from_rgb(249, 250, 251) // Gray 50
    }
}

/// Accent used for headings and progress bars.
pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241); // Indigo 500

/// Apply visuals and scale every text style to `font_size` (body size).
pub fn apply_style(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let mut style = (*ctx.style()).clone();
    let scale = font_size / crate::util::constants::DEFAULT_FONT_SIZE;
    for (text_style, font_id) in style.text_styles.iter_mut() {
        let base = match text_style {
            egui::TextStyle::Heading => 20.0,
            egui::TextStyle::Small => 10.0,
            egui::TextStyle::Monospace => 13.0,
            _ => crate::util::constants::DEFAULT_FONT_SIZE,
        };
        font_id.size = base * scale;
    }
    ctx.set_style(style);
}

/// Layout constants.
pub const CARD_MIN_HEIGHT: f32 = 320.0;
pub const GRID_SPACING: f32 = 12.0;
pub const FIELD_LABEL_WIDTH: f32 = 90.0;
