use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(RecipientId);
id_newtype!(DonationId);
id_newtype!(BadgeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeIcon {
    Heart,
    Book,
    Calendar,
    Users,
}

/// A person or cause eligible to receive donations. Money fields are in
/// minor currency units; `raised_minor_units` may exceed the goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub recipient_id: RecipientId,
    pub name: String,
    pub age: u8,
    pub location: String,
    pub image_url: String,
    pub quote: String,
    pub story: String,
    pub category: String,
    pub goal_minor_units: u64,
    pub raised_minor_units: u64,
    pub verified_by: String,
    pub updates: Vec<RecipientUpdate>,
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientUpdate {
    pub date: NaiveDate,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    pub donation_id: DonationId,
    pub recipient_id: RecipientId,
    pub amount_minor_units: u64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub badge_id: BadgeId,
    pub name: String,
    pub description: String,
    pub icon: BadgeIcon,
    pub earned: bool,
}

/// The demo user shown on the profile screen. `member_since` is a display
/// string, not a parsed date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub member_since: String,
}
