//! App shell: tab navigation, story feed, donation wizard, impact, profile.

use crossbeam_channel::{Receiver, Sender};
use donation_core::impact::{donation_history, summarize_impact};
use donation_core::wizard::{
    CUSTOM_AMOUNT_MAX_DIGITS, MESSAGE_MAX_CHARS, PRESET_AMOUNTS_MINOR_UNITS, WizardSnapshot,
    WizardStep,
};
use donation_core::ConfirmedDonation;
use egui::{Color32, CornerRadius, RichText, Stroke};
use serde::{Deserialize, Serialize};
use shared::domain::{Badge, Donation, Recipient, RecipientId, UserProfile};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, NavTarget, UiEvent, UiErrorContext};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{theme, widgets};

pub const SETTINGS_STORAGE_KEY: &str = "desktop_gui.settings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedGuiSettings {
    text_scale: f32,
    remembered_category: String,
}

impl Default for PersistedGuiSettings {
    fn default() -> Self {
        Self {
            text_scale: 1.0,
            remembered_category: "All".to_string(),
        }
    }
}

impl PersistedGuiSettings {
    fn into_runtime(self) -> (f32, String) {
        (self.text_scale.clamp(0.8, 1.4), self.remembered_category)
    }

    fn from_runtime(text_scale: f32, remembered_category: &str) -> Self {
        Self {
            text_scale: text_scale.clamp(0.8, 1.4),
            remembered_category: remembered_category.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppTab {
    Stories,
    Donate,
    Impact,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Story,
    Updates,
    Documents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImpactTab {
    Overview,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RecipientDetailView {
    recipient_id: RecipientId,
    tab: DetailTab,
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    recipients: Vec<Recipient>,
    donations: Vec<Donation>,
    badges: Vec<Badge>,
    categories: Vec<String>,
    profile: Option<UserProfile>,
    catalog_ready: bool,

    active_tab: AppTab,
    selected_category: String,
    detail: Option<RecipientDetailView>,
    impact_tab: ImpactTab,

    wizard: Option<WizardSnapshot>,
    confirmed: Option<ConfirmedDonation>,
    custom_amount_input: String,
    message_input: String,

    status: String,
    backend_failed: bool,
    text_scale: f32,
    applied_text_scale: Option<f32>,
}

impl DesktopGuiApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        persisted_settings: Option<PersistedGuiSettings>,
    ) -> Self {
        let (text_scale, selected_category) = persisted_settings.unwrap_or_default().into_runtime();
        let mut status = "Starting backend...".to_string();
        dispatch_backend_command(&cmd_tx, BackendCommand::LoadCatalog, &mut status);
        Self {
            cmd_tx,
            ui_rx,
            recipients: Vec::new(),
            donations: Vec::new(),
            badges: Vec::new(),
            categories: Vec::new(),
            profile: None,
            catalog_ready: false,
            active_tab: AppTab::Stories,
            selected_category,
            detail: None,
            impact_tab: ImpactTab::Overview,
            wizard: None,
            confirmed: None,
            custom_amount_input: String::new(),
            message_input: String::new(),
            status,
            backend_failed: false,
            text_scale,
            applied_text_scale: None,
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CatalogLoaded(snapshot) => {
                    self.recipients = snapshot.recipients;
                    self.donations = snapshot.donations;
                    self.badges = snapshot.badges;
                    self.categories = snapshot.categories;
                    self.profile = Some(snapshot.profile);
                    if !self
                        .categories
                        .iter()
                        .any(|category| *category == self.selected_category)
                    {
                        if let Some(first) = self.categories.first() {
                            self.selected_category = first.clone();
                        }
                    }
                    self.catalog_ready = true;
                    self.status = format!("{} stories loaded", self.recipients.len());
                }
                UiEvent::WizardUpdated(snapshot) => {
                    if snapshot.step != WizardStep::Confirmed {
                        self.confirmed = None;
                    }
                    self.sync_amount_input(&snapshot);
                    if self.message_input != snapshot.message {
                        self.message_input = snapshot.message.clone();
                    }
                    self.wizard = Some(snapshot);
                }
                UiEvent::DonationConfirmed(confirmed) => {
                    self.status = format!(
                        "Donation of {} confirmed",
                        widgets::format_inr(confirmed.amount_minor_units)
                    );
                    self.confirmed = Some(confirmed);
                }
                UiEvent::FlowClosed => {
                    self.wizard = None;
                    self.confirmed = None;
                    self.custom_amount_input.clear();
                    self.message_input.clear();
                }
                UiEvent::Navigate(NavTarget::RecipientDetail(recipient_id)) => {
                    self.detail = Some(RecipientDetailView {
                        recipient_id,
                        tab: DetailTab::Story,
                    });
                }
                UiEvent::Navigate(NavTarget::DonateTab) => {
                    self.detail = None;
                    self.active_tab = AppTab::Donate;
                }
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    if err.context() == UiErrorContext::BackendStartup {
                        self.backend_failed = true;
                    }
                    self.status = format!("{} error: {}", err_label(err.category()), err.message());
                }
            }
        }
    }

    /// Keeps the amount box in sync with drafts changed on the backend side
    /// (preset clicks, restarts) without fighting the user's own typing.
    fn sync_amount_input(&mut self, snapshot: &WizardSnapshot) {
        if parse_amount_input(&self.custom_amount_input) != snapshot.amount_minor_units {
            self.custom_amount_input = if snapshot.amount_minor_units == 0 {
                String::new()
            } else {
                snapshot.amount_minor_units.to_string()
            };
        }
    }

    fn switch_tab(&mut self, tab: AppTab) {
        if tab == self.active_tab && self.detail.is_none() {
            return;
        }
        if self.active_tab == AppTab::Donate && tab != AppTab::Donate {
            self.dispatch(BackendCommand::LeaveFlow);
        }
        if tab == AppTab::Donate {
            self.dispatch(BackendCommand::OpenDonationFlow);
        }
        self.detail = None;
        self.active_tab = tab;
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_text_scale == Some(self.text_scale) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = theme::visuals();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        ctx.set_style(style);
        ctx.set_zoom_factor(self.text_scale);
        self.applied_text_scale = Some(self.text_scale);
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("app_top_bar")
            .resizable(false)
            .exact_height(44.0)
            .frame(
                egui::Frame::new()
                    .fill(theme::PALETTE.card)
                    .inner_margin(egui::Margin::symmetric(12, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new("give hope")
                            .strong()
                            .size(20.0)
                            .color(theme::PALETTE.primary),
                    );
                    ui.add_space(16.0);
                    for (tab, label) in [
                        (AppTab::Stories, "Stories"),
                        (AppTab::Donate, "Donate"),
                        (AppTab::Impact, "Impact"),
                        (AppTab::Profile, "Profile"),
                    ] {
                        let selected = self.active_tab == tab && self.detail.is_none();
                        if ui.selectable_label(selected, label).clicked() {
                            self.switch_tab(tab);
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.menu_button("View", |ui| {
                            ui.add(
                                egui::Slider::new(&mut self.text_scale, 0.8..=1.4)
                                    .text("Text scale"),
                            );
                        });
                        if self.backend_failed {
                            ui.label(
                                RichText::new("Backend offline")
                                    .size(12.0)
                                    .color(theme::PALETTE.error),
                            );
                        }
                    });
                });
            });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("app_status_bar")
            .resizable(false)
            .exact_height(24.0)
            .frame(
                egui::Frame::new()
                    .fill(theme::PALETTE.background_secondary)
                    .inner_margin(egui::Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.small("Status:");
                    ui.small(RichText::new(&self.status).weak());
                });
            });
    }

    fn show_stories_screen(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            centered_column(ui, |ui| {
                ui.add_space(12.0);
                if !self.catalog_ready {
                    ui.spinner();
                    ui.weak("Loading stories...");
                    return;
                }

                let mut category_click: Option<String> = None;
                ui.horizontal_wrapped(|ui| {
                    for category in &self.categories {
                        let selected = self.selected_category == *category;
                        if widgets::category_chip(ui, category, selected).clicked() {
                            category_click = Some(category.clone());
                        }
                    }
                });
                if let Some(category) = category_click {
                    self.selected_category = category;
                }
                ui.add_space(10.0);

                let show_all = self.categories.first() == Some(&self.selected_category);
                let mut open_recipient: Option<RecipientId> = None;
                for (idx, recipient) in self
                    .recipients
                    .iter()
                    .filter(|recipient| show_all || recipient.category == self.selected_category)
                    .enumerate()
                {
                    if story_card(ui, recipient, idx == 0) {
                        open_recipient = Some(recipient.recipient_id);
                    }
                    ui.add_space(10.0);
                }
                if let Some(recipient_id) = open_recipient {
                    self.dispatch(BackendCommand::ViewRecipient { recipient_id });
                }
                ui.add_space(12.0);
            });
        });
    }

    fn show_donate_screen(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            centered_column(ui, |ui| {
                ui.add_space(16.0);
                if let Some(confirmed) = self.confirmed.clone() {
                    self.show_confirmation(ui, &confirmed);
                    return;
                }
                let Some(snapshot) = self.wizard.clone() else {
                    ui.spinner();
                    ui.weak("Opening the donation flow...");
                    return;
                };
                match snapshot.step {
                    WizardStep::Amount => self.show_amount_step(ui, &snapshot),
                    WizardStep::Message => self.show_message_step(ui, &snapshot),
                    // The confirmation event lands in the same drain as the
                    // final snapshot; keep the spinner for that gap.
                    WizardStep::Processing | WizardStep::Confirmed => show_processing_step(ui),
                }
                ui.add_space(16.0);
            });
        });
    }

    fn show_amount_step(&mut self, ui: &mut egui::Ui, snapshot: &WizardSnapshot) {
        ui.label(step_title("Choose an amount"));
        ui.label(step_description(
            "Every donation, no matter how small, makes a difference.",
        ));
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for preset in PRESET_AMOUNTS_MINOR_UNITS {
                let selected = snapshot.amount_minor_units == preset;
                let text = RichText::new(widgets::format_inr(preset)).size(15.0).color(
                    if selected {
                        Color32::WHITE
                    } else {
                        theme::PALETTE.text
                    },
                );
                let button = egui::Button::new(text)
                    .corner_radius(CornerRadius::same(8))
                    .min_size(egui::vec2(86.0, 40.0))
                    .fill(if selected {
                        theme::PALETTE.primary
                    } else {
                        theme::PALETTE.card
                    })
                    .stroke(Stroke::new(
                        1.0,
                        if selected {
                            theme::PALETTE.primary
                        } else {
                            theme::PALETTE.card_border
                        },
                    ));
                if ui.add(button).clicked() {
                    self.dispatch(BackendCommand::SelectPreset {
                        amount_minor_units: preset,
                    });
                }
            }
        });
        ui.add_space(12.0);

        ui.label(
            RichText::new("Or enter a custom amount:")
                .size(14.0)
                .color(theme::PALETTE.text),
        );
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("₹")
                    .strong()
                    .size(18.0)
                    .color(theme::PALETTE.text),
            );
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.custom_amount_input)
                    .hint_text("Enter amount")
                    .desired_width(180.0),
            );
            if response.changed() {
                let sanitized: String = self
                    .custom_amount_input
                    .chars()
                    .filter(char::is_ascii_digit)
                    .take(CUSTOM_AMOUNT_MAX_DIGITS)
                    .collect();
                self.custom_amount_input = sanitized.clone();
                self.dispatch(BackendCommand::SetCustomAmount { input: sanitized });
            }
        });
        ui.add_space(14.0);

        ui.label(
            RichText::new("Who are you helping today?")
                .strong()
                .size(16.0)
                .color(theme::PALETTE.text),
        );
        ui.add_space(6.0);
        let mut picked: Option<RecipientId> = None;
        egui::ScrollArea::horizontal()
            .id_salt("donate_recipient_picker")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for recipient in &self.recipients {
                        let selected = snapshot.recipient_id == recipient.recipient_id;
                        if recipient_pick_card(ui, recipient, selected) {
                            picked = Some(recipient.recipient_id);
                        }
                    }
                });
            });
        if let Some(recipient_id) = picked {
            self.dispatch(BackendCommand::SelectRecipient { recipient_id });
        }

        ui.add_space(16.0);
        if widgets::primary_button(ui, "Next", snapshot.amount_minor_units > 0).clicked() {
            self.dispatch(BackendCommand::Advance);
        }
    }

    fn show_message_step(&mut self, ui: &mut egui::Ui, snapshot: &WizardSnapshot) {
        ui.label(step_title("Add a personal message"));
        ui.label(step_description(
            "Your words can inspire hope and strength. Optional but appreciated.",
        ));
        ui.add_space(12.0);

        let recipient = self
            .recipients
            .iter()
            .find(|recipient| recipient.recipient_id == snapshot.recipient_id)
            .cloned();
        if let Some(recipient) = recipient {
            widgets::card_frame().show(ui, |ui| {
                ui.label(
                    RichText::new(&recipient.name)
                        .strong()
                        .size(16.0)
                        .color(theme::PALETTE.text),
                );
                ui.label(
                    RichText::new(format!("\"{}\"", recipient.quote))
                        .italics()
                        .size(13.0)
                        .color(theme::PALETTE.neutral),
                );
            });
            ui.add_space(10.0);
        }

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Your donation:")
                    .size(15.0)
                    .color(theme::PALETTE.text),
            );
            ui.label(
                RichText::new(widgets::format_inr(snapshot.amount_minor_units))
                    .strong()
                    .size(15.0)
                    .color(theme::PALETTE.primary),
            );
        });
        ui.add_space(8.0);

        let response = ui.add(
            egui::TextEdit::multiline(&mut self.message_input)
                .hint_text("Write a message of encouragement (optional)")
                .desired_rows(4)
                .desired_width(f32::INFINITY)
                .char_limit(MESSAGE_MAX_CHARS),
        );
        if response.changed() {
            self.dispatch(BackendCommand::SetMessage {
                message: self.message_input.clone(),
            });
        }
        ui.add_space(10.0);

        egui::Frame::NONE
            .fill(theme::PALETTE.background_secondary)
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(14, 12))
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Payment Information")
                        .strong()
                        .size(15.0)
                        .color(theme::PALETTE.text),
                );
                ui.label(
                    RichText::new("In a real app, this would securely collect payment information.")
                        .size(13.0)
                        .color(theme::PALETTE.neutral),
                );
            });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            let back = egui::Button::new(
                RichText::new("Back").size(15.0).color(theme::PALETTE.text),
            )
            .corner_radius(CornerRadius::same(20))
            .fill(theme::PALETTE.background_secondary)
            .min_size(egui::vec2(110.0, 40.0));
            if ui.add(back).clicked() {
                self.dispatch(BackendCommand::Back);
            }
            if widgets::primary_button(ui, "Donate Now", true).clicked() {
                self.dispatch(BackendCommand::Advance);
            }
        });
    }

    fn show_confirmation(&mut self, ui: &mut egui::Ui, confirmed: &ConfirmedDonation) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(72.0, 72.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 36.0, theme::PALETTE.primary);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "❤",
                egui::FontId::proportional(34.0),
                Color32::WHITE,
            );
            ui.add_space(12.0);
            ui.label(
                RichText::new("Thank You!")
                    .strong()
                    .size(24.0)
                    .color(theme::PALETTE.text),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "Your donation of {} to {} has been processed. Your generosity will make a real difference.",
                    widgets::format_inr(confirmed.amount_minor_units),
                    confirmed.recipient_name
                ))
                .size(15.0)
                .color(theme::PALETTE.text),
            );
            ui.add_space(16.0);

            egui::Frame::NONE
                .fill(theme::PALETTE.background_secondary)
                .corner_radius(12.0)
                .inner_margin(egui::Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new("Your Impact")
                            .strong()
                            .size(16.0)
                            .color(theme::PALETTE.text),
                    );
                    ui.label(
                        RichText::new(
                            "You've helped someone take a step closer to a better life.",
                        )
                        .size(14.0)
                        .color(theme::PALETTE.text),
                    );
                });
            ui.add_space(16.0);

            let _ = widgets::primary_button(ui, "Share Your Impact", true);
            ui.add_space(8.0);
            let donate_again = egui::Button::new(
                RichText::new("Donate Again")
                    .size(15.0)
                    .color(theme::PALETTE.primary),
            )
            .fill(theme::PALETTE.card)
            .stroke(Stroke::new(1.0, theme::PALETTE.primary))
            .corner_radius(CornerRadius::same(20))
            .min_size(egui::vec2(ui.available_width(), 38.0));
            if ui.add(donate_again).clicked() {
                self.dispatch(BackendCommand::Restart);
            }
            ui.add_space(24.0);
        });
    }

    fn show_impact_screen(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            centered_column(ui, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    for (tab, label) in [
                        (ImpactTab::Overview, "Overview"),
                        (ImpactTab::History, "History"),
                    ] {
                        if ui.selectable_label(self.impact_tab == tab, label).clicked() {
                            self.impact_tab = tab;
                        }
                    }
                });
                ui.separator();
                ui.add_space(10.0);
                match self.impact_tab {
                    ImpactTab::Overview => self.show_impact_overview(ui),
                    ImpactTab::History => self.show_impact_history(ui),
                }
                ui.add_space(16.0);
            });
        });
    }

    fn show_impact_overview(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Your Impact")
                .strong()
                .size(22.0)
                .color(theme::PALETTE.text),
        );
        ui.label(
            RichText::new("See the difference you've made in people's lives")
                .size(15.0)
                .color(theme::PALETTE.neutral),
        );
        ui.add_space(12.0);

        let summary = summarize_impact(&self.donations, &self.badges);
        ui.columns(3, |columns| {
            impact_metric(
                &mut columns[0],
                &widgets::format_inr(summary.total_donated_minor_units),
                "Total Donated",
            );
            impact_metric(
                &mut columns[1],
                &summary.people_helped.to_string(),
                "People Helped",
            );
            impact_metric(
                &mut columns[2],
                &summary.badges_earned.to_string(),
                "Badges Earned",
            );
        });
        ui.add_space(14.0);

        ui.label(section_title("Recent Impact"));
        ui.add_space(6.0);
        egui::Frame::NONE
            .fill(theme::PALETTE.background_secondary)
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(16, 12))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(
                        "Your donations have helped fund education for 2 children and \
                         medical treatment for a family in need.",
                    )
                    .size(14.0)
                    .color(theme::PALETTE.text),
                );
            });
        ui.add_space(14.0);

        ui.label(section_title("Your Badges"));
        ui.add_space(6.0);
        for badge in &self.badges {
            badge_card(ui, badge);
            ui.add_space(8.0);
        }
    }

    fn show_impact_history(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Donation History")
                .strong()
                .size(22.0)
                .color(theme::PALETTE.text),
        );
        ui.add_space(10.0);

        let history = donation_history(&self.donations, &self.recipients);
        if history.is_empty() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(
                        "You haven't made any donations yet. Start making an impact today!",
                    )
                    .size(15.0)
                    .color(theme::PALETTE.neutral),
                );
            });
            return;
        }

        let mut open_recipient: Option<RecipientId> = None;
        for entry in &history {
            if history_card(ui, entry) {
                open_recipient = Some(entry.donation.recipient_id);
            }
            ui.add_space(8.0);
        }
        if let Some(recipient_id) = open_recipient {
            self.dispatch(BackendCommand::ViewRecipient { recipient_id });
        }
    }

    fn show_profile_screen(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            centered_column(ui, |ui| {
                ui.add_space(16.0);
                let Some(profile) = self.profile.clone() else {
                    ui.spinner();
                    ui.weak("Loading profile...");
                    return;
                };

                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(64.0, 64.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 32.0, theme::PALETTE.secondary);
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        profile_initial(&profile.name),
                        egui::FontId::proportional(28.0),
                        Color32::WHITE,
                    );
                    ui.add_space(10.0);
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&profile.name)
                                .strong()
                                .size(20.0)
                                .color(theme::PALETTE.text),
                        );
                        ui.label(
                            RichText::new(&profile.email)
                                .size(13.0)
                                .color(theme::PALETTE.neutral),
                        );
                        ui.label(
                            RichText::new(format!("Member since {}", profile.member_since))
                                .size(12.0)
                                .color(theme::PALETTE.neutral),
                        );
                    });
                });
                ui.add_space(14.0);

                let summary = summarize_impact(&self.donations, &self.badges);
                ui.columns(3, |columns| {
                    impact_metric(
                        &mut columns[0],
                        &widgets::format_inr(summary.total_donated_minor_units),
                        "Total Given",
                    );
                    impact_metric(
                        &mut columns[1],
                        &summary.people_helped.to_string(),
                        "People Helped",
                    );
                    impact_metric(
                        &mut columns[2],
                        &summary.badges_earned.to_string(),
                        "Badges Earned",
                    );
                });
                ui.add_space(14.0);

                if widgets::primary_button(ui, "Find More People to Help", true).clicked() {
                    self.switch_tab(AppTab::Stories);
                }
                ui.add_space(16.0);

                ui.label(section_title("Preferences"));
                ui.add_space(6.0);
                widgets::card_frame().show(ui, |ui| {
                    preference_row(ui, "❤", "Saved Stories", Some("3"));
                    ui.separator();
                    preference_row(ui, "🔔", "Notifications", Some("5"));
                    ui.separator();
                    preference_row(ui, "⚙", "Account Settings", None);
                    ui.separator();
                    preference_row(ui, "📣", "Invite Friends", None);
                    ui.separator();
                    preference_row(ui, "❓", "Help & Support", None);
                });
                ui.add_space(14.0);

                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Sign Out")
                            .size(15.0)
                            .color(theme::PALETTE.error),
                    );
                    ui.add_space(16.0);
                    ui.label(
                        RichText::new("give hope - Small Amounts. Big Change.")
                            .size(13.0)
                            .color(theme::PALETTE.neutral),
                    );
                    ui.label(
                        RichText::new("Version 1.0.0")
                            .size(12.0)
                            .color(theme::PALETTE.neutral),
                    );
                });
                ui.add_space(16.0);
            });
        });
    }

    fn show_recipient_detail(&mut self, ui: &mut egui::Ui, view: RecipientDetailView) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            centered_column(ui, |ui| {
                ui.add_space(12.0);
                let Some(recipient) = self
                    .recipients
                    .iter()
                    .find(|recipient| recipient.recipient_id == view.recipient_id)
                    .cloned()
                else {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Recipient not found")
                                .size(18.0)
                                .color(theme::PALETTE.text),
                        );
                        ui.add_space(8.0);
                        if ui.button("Go Back").clicked() {
                            self.detail = None;
                        }
                    });
                    return;
                };

                if ui.button("← Back").clicked() {
                    self.detail = None;
                    return;
                }
                ui.add_space(10.0);

                ui.label(
                    RichText::new(&recipient.category)
                        .size(12.0)
                        .color(theme::PALETTE.secondary)
                        .background_color(theme::PALETTE.background_secondary),
                );
                ui.label(
                    RichText::new(format!("{}, {}", recipient.name, recipient.age))
                        .strong()
                        .size(22.0)
                        .color(theme::PALETTE.text),
                );
                ui.label(
                    RichText::new(format!("📍 {}", recipient.location))
                        .size(14.0)
                        .color(theme::PALETTE.neutral),
                );
                ui.label(
                    RichText::new(format!("✓ Verified by {}", recipient.verified_by))
                        .size(13.0)
                        .color(theme::PALETTE.secondary),
                );
                ui.add_space(10.0);
                widgets::funding_progress(
                    ui,
                    recipient.raised_minor_units,
                    recipient.goal_minor_units,
                    true,
                );
                ui.add_space(10.0);
                if widgets::primary_button(ui, "Donate Now", true).clicked() {
                    self.dispatch(BackendCommand::OpenDonationFlow);
                }
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    for (tab, label) in [
                        (DetailTab::Story, "Story"),
                        (DetailTab::Updates, "Updates"),
                        (DetailTab::Documents, "Documents"),
                    ] {
                        if ui.selectable_label(view.tab == tab, label).clicked() {
                            self.detail = Some(RecipientDetailView {
                                recipient_id: view.recipient_id,
                                tab,
                            });
                        }
                    }
                });
                ui.separator();
                ui.add_space(8.0);

                match view.tab {
                    DetailTab::Story => {
                        ui.label(
                            RichText::new(format!("\"{}\"", recipient.quote))
                                .italics()
                                .size(15.0)
                                .color(theme::PALETTE.text),
                        );
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(&recipient.story)
                                .size(14.0)
                                .color(theme::PALETTE.text),
                        );
                    }
                    DetailTab::Updates => {
                        if recipient.updates.is_empty() {
                            ui.label(
                                RichText::new("No updates available yet. Check back soon!")
                                    .size(14.0)
                                    .color(theme::PALETTE.neutral),
                            );
                        } else {
                            for update in &recipient.updates {
                                widgets::card_frame().show(ui, |ui| {
                                    ui.label(
                                        RichText::new(widgets::format_short_date(update.date))
                                            .size(12.0)
                                            .color(theme::PALETTE.neutral),
                                    );
                                    ui.label(
                                        RichText::new(&update.message)
                                            .size(14.0)
                                            .color(theme::PALETTE.text),
                                    );
                                });
                                ui.add_space(8.0);
                            }
                        }
                    }
                    DetailTab::Documents => {
                        if recipient.documents.is_empty() {
                            ui.label(
                                RichText::new(
                                    "No documents are currently available for viewing.",
                                )
                                .size(14.0)
                                .color(theme::PALETTE.neutral),
                            );
                        } else {
                            for (idx, _document) in recipient.documents.iter().enumerate() {
                                widgets::card_frame().show(ui, |ui| {
                                    ui.label(
                                        RichText::new(format!("📄 Document {}", idx + 1))
                                            .size(14.0)
                                            .color(theme::PALETTE.text),
                                    );
                                });
                                ui.add_space(6.0);
                            }
                        }
                    }
                }
                ui.add_space(16.0);
            });
        });
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        self.show_top_bar(ctx);
        self.show_status_bar(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::PALETTE.background)
                    .inner_margin(egui::Margin::same(0)),
            )
            .show(ctx, |ui| {
                if let Some(view) = self.detail {
                    self.show_recipient_detail(ui, view);
                } else {
                    match self.active_tab {
                        AppTab::Stories => self.show_stories_screen(ui),
                        AppTab::Donate => self.show_donate_screen(ui),
                        AppTab::Impact => self.show_impact_screen(ui),
                        AppTab::Profile => self.show_profile_screen(ui),
                    }
                }
            });

        let processing = self
            .wizard
            .as_ref()
            .is_some_and(|snapshot| snapshot.step == WizardStep::Processing);
        if processing {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedGuiSettings::from_runtime(self.text_scale, &self.selected_category);
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

/// Centers a fixed-width column and keeps its contents left-aligned.
fn centered_column(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    let column_width = ui.available_width().clamp(320.0, 680.0);
    let margin = ((ui.available_width() - column_width) * 0.5).max(0.0);
    ui.horizontal_top(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(column_width);
            add_contents(ui);
        });
    });
}

fn step_title(text: &str) -> RichText {
    RichText::new(text)
        .strong()
        .size(22.0)
        .color(theme::PALETTE.text)
}

fn step_description(text: &str) -> RichText {
    RichText::new(text).size(14.0).color(theme::PALETTE.neutral)
}

fn section_title(text: &str) -> RichText {
    RichText::new(text)
        .strong()
        .size(17.0)
        .color(theme::PALETTE.text)
}

fn show_processing_step(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.spinner();
        ui.add_space(12.0);
        ui.label(
            RichText::new("Processing your donation...")
                .size(16.0)
                .color(theme::PALETTE.text),
        );
        ui.add_space(60.0);
    });
}

/// Feed card for one recipient. Returns true when the reader wants to open
/// the full story.
fn story_card(ui: &mut egui::Ui, recipient: &Recipient, featured: bool) -> bool {
    let mut donate_clicked = false;
    let response = widgets::card_frame()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if featured {
                ui.label(
                    RichText::new(" Story of the Day ")
                        .size(12.0)
                        .color(Color32::WHITE)
                        .background_color(theme::PALETTE.primary),
                );
                ui.add_space(4.0);
            }
            ui.label(
                RichText::new(&recipient.category)
                    .size(12.0)
                    .color(theme::PALETTE.secondary)
                    .background_color(theme::PALETTE.background_secondary),
            );
            ui.label(
                RichText::new(format!("{}, {}", recipient.name, recipient.age))
                    .strong()
                    .size(17.0)
                    .color(theme::PALETTE.text),
            );
            ui.label(
                RichText::new(format!("📍 {}", recipient.location))
                    .size(13.0)
                    .color(theme::PALETTE.neutral),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("\"{}\"", recipient.quote))
                    .italics()
                    .size(14.0)
                    .color(theme::PALETTE.text),
            );
            ui.add_space(6.0);
            widgets::funding_progress(
                ui,
                recipient.raised_minor_units,
                recipient.goal_minor_units,
                true,
            );
            ui.add_space(6.0);
            donate_clicked = widgets::primary_button(ui, "Donate Now", true).clicked();
        })
        .response;

    let card_response = response.interact(egui::Sense::click());
    if card_response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    card_response.clicked() || donate_clicked
}

/// Compact recipient choice used by the wizard's amount step.
fn recipient_pick_card(ui: &mut egui::Ui, recipient: &Recipient, selected: bool) -> bool {
    let frame = egui::Frame::NONE
        .fill(theme::PALETTE.card)
        .corner_radius(10.0)
        .stroke(Stroke::new(
            if selected { 2.0 } else { 1.0 },
            if selected {
                theme::PALETTE.primary
            } else {
                theme::PALETTE.card_border
            },
        ))
        .inner_margin(egui::Margin::symmetric(12, 10));
    let response = frame
        .show(ui, |ui| {
            ui.set_width(150.0);
            ui.label(
                RichText::new(&recipient.name)
                    .strong()
                    .size(14.0)
                    .color(theme::PALETTE.text),
            );
            ui.label(
                RichText::new(&recipient.category)
                    .size(12.0)
                    .color(theme::PALETTE.secondary),
            );
        })
        .response;
    response.interact(egui::Sense::click()).clicked()
}

fn impact_metric(ui: &mut egui::Ui, value: &str, label: &str) {
    widgets::card_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(value)
                    .strong()
                    .size(18.0)
                    .color(theme::PALETTE.primary),
            );
            ui.label(RichText::new(label).size(12.0).color(theme::PALETTE.neutral));
        });
    });
}

fn badge_card(ui: &mut egui::Ui, badge: &Badge) {
    widgets::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(widgets::badge_icon_glyph(badge.icon)).size(20.0));
            ui.add_space(6.0);
            ui.vertical(|ui| {
                let name_color = if badge.earned {
                    theme::PALETTE.text
                } else {
                    theme::PALETTE.neutral
                };
                ui.label(RichText::new(&badge.name).strong().size(15.0).color(name_color));
                ui.label(
                    RichText::new(&badge.description)
                        .size(13.0)
                        .color(theme::PALETTE.neutral),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if badge.earned {
                    ui.label(
                        RichText::new(" Earned ")
                            .size(12.0)
                            .color(Color32::WHITE)
                            .background_color(theme::PALETTE.success),
                    );
                } else {
                    ui.label(
                        RichText::new(" Locked ")
                            .size(12.0)
                            .color(Color32::WHITE)
                            .background_color(theme::PALETTE.neutral),
                    );
                }
            });
        });
    });
}

/// History card for one past donation. Returns true when clicked, which
/// reopens the recipient it went to.
fn history_card(ui: &mut egui::Ui, entry: &donation_core::impact::HistoryEntry) -> bool {
    let response = widgets::card_frame()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(widgets::format_inr(entry.donation.amount_minor_units))
                        .strong()
                        .size(16.0)
                        .color(theme::PALETTE.text),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(widgets::format_short_date(entry.donation.date))
                            .size(12.0)
                            .color(theme::PALETTE.neutral),
                    );
                });
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("To:").size(13.0).color(theme::PALETTE.neutral));
                ui.label(
                    RichText::new(&entry.recipient_name)
                        .strong()
                        .size(13.0)
                        .color(theme::PALETTE.text),
                );
            });
            if let Some(message) = &entry.donation.message {
                ui.label(
                    RichText::new(format!("\"{message}\""))
                        .italics()
                        .size(13.0)
                        .color(theme::PALETTE.neutral),
                );
            }
            ui.add_space(4.0);
            ui.label(
                RichText::new("Thank you for making a difference!")
                    .size(12.0)
                    .color(theme::PALETTE.secondary),
            );
        })
        .response;
    response.interact(egui::Sense::click()).clicked()
}

fn preference_row(ui: &mut egui::Ui, glyph: &str, label: &str, badge: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(glyph).size(16.0));
        ui.add_space(4.0);
        ui.label(RichText::new(label).size(14.0).color(theme::PALETTE.text));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(badge) = badge {
                ui.label(
                    RichText::new(format!(" {badge} "))
                        .size(12.0)
                        .color(Color32::WHITE)
                        .background_color(theme::PALETTE.primary),
                );
            }
        });
    });
}

/// Mirrors the wizard's custom-amount parse so the text box only resyncs
/// when the backend actually changed the draft.
fn parse_amount_input(input: &str) -> u64 {
    let trimmed = input.trim();
    if trimmed.is_empty()
        || trimmed.len() > CUSTOM_AMOUNT_MAX_DIGITS
        || !trimmed.chars().all(|ch| ch.is_ascii_digit())
    {
        return 0;
    }
    trimmed.parse().unwrap_or(0)
}

fn profile_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|ch| ch.to_uppercase().to_string())
        .unwrap_or_default()
}
