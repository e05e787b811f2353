//! UI/backend events and error modeling for desktop GUI controller.

use donation_core::{ConfirmedDonation, wizard::WizardSnapshot};
use shared::domain::{Badge, Donation, Recipient, RecipientId, UserProfile};

/// One-shot copy of the seeded catalog, sent once the backend worker is up.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub recipients: Vec<Recipient>,
    pub donations: Vec<Donation>,
    pub badges: Vec<Badge>,
    pub categories: Vec<String>,
    pub profile: UserProfile,
}

/// Screen changes the donation flow asks the frontend to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    RecipientDetail(RecipientId),
    DonateTab,
}

pub enum UiEvent {
    CatalogLoaded(CatalogSnapshot),
    WizardUpdated(WizardSnapshot),
    DonationConfirmed(ConfirmedDonation),
    FlowClosed,
    Navigate(NavTarget),
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Startup,
    Flow,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    DonationFlow,
    Navigation,
    General,
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Startup => "Startup",
        UiErrorCategory::Flow => "Donation flow",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("startup")
            || message_lower.contains("runtime")
            || message_lower.contains("worker")
        {
            UiErrorCategory::Startup
        } else if message_lower.contains("unknown recipient")
            || message_lower.contains("no recipients")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("not active") || message_lower.contains("flow") {
            UiErrorCategory::Flow
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
