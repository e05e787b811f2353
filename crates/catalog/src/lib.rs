mod seed;

use shared::domain::{Badge, Donation, Recipient, RecipientId, UserProfile};

/// In-memory dataset backing the demo build. Recipient order is the feed
/// order, with the featured story first.
pub struct StaticCatalog {
    recipients: Vec<Recipient>,
    donations: Vec<Donation>,
    badges: Vec<Badge>,
    categories: Vec<String>,
    profile: UserProfile,
}

impl StaticCatalog {
    pub fn seeded() -> Self {
        seed::build()
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn recipient(&self, recipient_id: RecipientId) -> Option<&Recipient> {
        self.recipients
            .iter()
            .find(|recipient| recipient.recipient_id == recipient_id)
    }

    /// Donations the signed-in user has made, oldest first.
    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Filter chips for the story feed. The first entry is always "All".
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn user_profile(&self) -> &UserProfile {
        &self.profile
    }
}
