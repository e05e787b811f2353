//! Light palette shared by the donation screens.

use donation_core::progress::ColorTier;
use egui::Color32;

pub struct Palette {
    pub primary: Color32,
    pub secondary: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub neutral: Color32,
    pub neutral_light: Color32,
    pub text: Color32,
    pub background: Color32,
    pub background_secondary: Color32,
    pub card: Color32,
    pub card_border: Color32,
}

pub const PALETTE: Palette = Palette {
    primary: Color32::from_rgb(233, 30, 99),
    secondary: Color32::from_rgb(0, 150, 136),
    success: Color32::from_rgb(76, 175, 80),
    warning: Color32::from_rgb(255, 160, 0),
    error: Color32::from_rgb(229, 57, 53),
    neutral: Color32::from_rgb(117, 117, 117),
    neutral_light: Color32::from_rgb(224, 224, 224),
    text: Color32::from_rgb(33, 33, 33),
    background: Color32::from_rgb(250, 250, 250),
    background_secondary: Color32::from_rgb(238, 240, 243),
    card: Color32::WHITE,
    card_border: Color32::from_rgb(232, 234, 237),
};

/// Funding bars are colored by how far along the campaign is.
pub fn tier_color(tier: ColorTier) -> Color32 {
    match tier {
        ColorTier::Low => PALETTE.error,
        ColorTier::Medium => PALETTE.warning,
        ColorTier::High => PALETTE.success,
    }
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PALETTE.background;
    visuals.window_fill = PALETTE.card;
    visuals.extreme_bg_color = PALETTE.card;
    visuals.faint_bg_color = PALETTE.background_secondary;
    visuals.selection.bg_fill = PALETTE.primary.gamma_multiply(0.35);
    visuals.hyperlink_color = PALETTE.secondary;
    visuals.widgets.noninteractive.bg_stroke.color = PALETTE.card_border;

    // Make text inputs reliably clickable and visible:
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, PALETTE.card_border);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, PALETTE.neutral_light);

    visuals
}
