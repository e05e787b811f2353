//! Rendering helpers shared by the donation screens.

use chrono::{Datelike, NaiveDate};
use donation_core::progress::compute_progress;
use egui::{Color32, CornerRadius, Sense, Stroke};
use shared::domain::BadgeIcon;

use crate::ui::theme;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "₹12,500" with Indian digit grouping: last three digits, then pairs.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 2);
    for (idx, ch) in digits.chars().rev().enumerate() {
        if idx == 3 || (idx > 3 && (idx - 3) % 2 == 0) {
            reversed.push(',');
        }
        reversed.push(ch);
    }
    let grouped: String = reversed.chars().rev().collect();
    format!("₹{grouped}")
}

/// Short date form used on history and update cards, e.g. "Jan 15, 2025".
pub fn format_short_date(date: NaiveDate) -> String {
    let month = MONTH_ABBREV[date.month0() as usize];
    format!("{month} {}, {}", date.day(), date.year())
}

pub fn badge_icon_glyph(icon: BadgeIcon) -> &'static str {
    match icon {
        BadgeIcon::Heart => "❤",
        BadgeIcon::Book => "📖",
        BadgeIcon::Calendar => "📅",
        BadgeIcon::Users => "👥",
    }
}

/// Funding bar plus the rounded percent caption. The fill saturates at the
/// goal even though the caption keeps counting past 100.
pub fn funding_progress(ui: &mut egui::Ui, raised: u64, goal: u64, show_amount: bool) {
    let progress = compute_progress(raised, goal);

    if show_amount {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format_inr(raised))
                    .strong()
                    .color(theme::PALETTE.text),
            );
            ui.label(
                egui::RichText::new(format!("of {}", format_inr(goal)))
                    .color(theme::PALETTE.neutral),
            );
        });
    }

    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 8.0), Sense::hover());
    ui.painter()
        .rect_filled(rect, CornerRadius::same(4), theme::PALETTE.neutral_light);
    let mut fill = rect;
    fill.set_width(rect.width() * progress.fraction.clamp(0.0, 1.0));
    ui.painter()
        .rect_filled(fill, CornerRadius::same(4), theme::tier_color(progress.tier));

    ui.label(
        egui::RichText::new(format!("{}% funded", progress.percent_label))
            .size(12.0)
            .color(theme::PALETTE.neutral),
    );
}

/// Rounded chip used for story categories and the category filter row.
pub fn category_chip(ui: &mut egui::Ui, label: &str, selected: bool) -> egui::Response {
    let text = egui::RichText::new(label).size(13.0).color(if selected {
        theme::PALETTE.primary
    } else {
        theme::PALETTE.neutral
    });
    let mut button = egui::Button::new(text)
        .corner_radius(CornerRadius::same(12))
        .fill(if selected {
            theme::PALETTE.card
        } else {
            theme::PALETTE.background_secondary
        });
    if selected {
        button = button.stroke(Stroke::new(1.0, theme::PALETTE.primary));
    }
    ui.add(button)
}

/// Full-width rose call-to-action button.
pub fn primary_button(ui: &mut egui::Ui, label: &str, enabled: bool) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(label)
            .strong()
            .size(16.0)
            .color(Color32::WHITE),
    )
    .fill(theme::PALETTE.primary)
    .corner_radius(CornerRadius::same(20))
    .min_size(egui::vec2(ui.available_width(), 40.0));
    ui.add_enabled(enabled, button)
}

/// White card frame with the thin border every screen uses.
pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(theme::PALETTE.card)
        .corner_radius(12.0)
        .stroke(Stroke::new(1.0, theme::PALETTE.card_border))
        .inner_margin(egui::Margin::symmetric(14, 12))
}

#[cfg(test)]
mod tests {
    use super::{format_inr, format_short_date};
    use chrono::NaiveDate;

    #[test]
    fn formats_rupees_with_indian_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(500), "₹500");
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(12_500), "₹12,500");
        assert_eq!(format_inr(100_000), "₹1,00,000");
        assert_eq!(format_inr(9_999_999), "₹99,99,999");
        assert_eq!(format_inr(10_000_000), "₹1,00,00,000");
    }

    #[test]
    fn formats_history_dates_in_short_month_form() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 15).expect("date");
        assert_eq!(format_short_date(jan), "Jan 15, 2025");
        let dec = NaiveDate::from_ymd_opt(2024, 12, 3).expect("date");
        assert_eq!(format_short_date(dec), "Dec 3, 2024");
    }
}
