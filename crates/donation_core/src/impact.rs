use std::collections::HashSet;

use shared::domain::{Badge, Donation, Recipient, RecipientId};

pub const UNKNOWN_RECIPIENT_NAME: &str = "Unknown";

/// Headline numbers for the impact overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactSummary {
    pub total_donated_minor_units: u64,
    pub people_helped: usize,
    pub badges_earned: usize,
}

pub fn summarize_impact(donations: &[Donation], badges: &[Badge]) -> ImpactSummary {
    let total_donated_minor_units = donations
        .iter()
        .map(|donation| donation.amount_minor_units)
        .sum();
    let people_helped = donations
        .iter()
        .map(|donation| donation.recipient_id)
        .collect::<HashSet<RecipientId>>()
        .len();
    let badges_earned = badges.iter().filter(|badge| badge.earned).count();

    ImpactSummary {
        total_donated_minor_units,
        people_helped,
        badges_earned,
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub donation: Donation,
    pub recipient_name: String,
}

/// Joins each donation with its recipient's name for the history list.
/// Donations whose recipient is no longer listed fall back to a placeholder
/// name instead of being dropped.
pub fn donation_history(donations: &[Donation], recipients: &[Recipient]) -> Vec<HistoryEntry> {
    donations
        .iter()
        .map(|donation| HistoryEntry {
            donation: donation.clone(),
            recipient_name: recipients
                .iter()
                .find(|recipient| recipient.recipient_id == donation.recipient_id)
                .map(|recipient| recipient.name.clone())
                .unwrap_or_else(|| UNKNOWN_RECIPIENT_NAME.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::domain::{BadgeIcon, BadgeId, DonationId};

    fn donation(id: i64, recipient: i64, amount: u64) -> Donation {
        Donation {
            donation_id: DonationId(id),
            recipient_id: RecipientId(recipient),
            amount_minor_units: amount,
            date: NaiveDate::from_ymd_opt(2025, 1, 15).expect("date"),
            message: None,
        }
    }

    fn badge(id: i64, earned: bool) -> Badge {
        Badge {
            badge_id: BadgeId(id),
            name: format!("badge-{id}"),
            description: String::new(),
            icon: BadgeIcon::Heart,
            earned,
        }
    }

    #[test]
    fn summary_totals_amounts_and_counts_distinct_recipients() {
        let donations = vec![
            donation(1, 2, 1_000),
            donation(2, 1, 250),
            donation(3, 2, 250),
        ];
        let badges = vec![badge(1, true), badge(2, true), badge(3, false)];

        let summary = summarize_impact(&donations, &badges);
        assert_eq!(summary.total_donated_minor_units, 1_500);
        assert_eq!(summary.people_helped, 2);
        assert_eq!(summary.badges_earned, 2);
    }

    #[test]
    fn summary_of_no_donations_is_all_zeroes() {
        let summary = summarize_impact(&[], &[]);
        assert_eq!(summary.total_donated_minor_units, 0);
        assert_eq!(summary.people_helped, 0);
        assert_eq!(summary.badges_earned, 0);
    }

    #[test]
    fn history_joins_recipient_names_in_donation_order() {
        let catalog = catalog::StaticCatalog::seeded();
        let history = donation_history(catalog.donations(), catalog.recipients());

        assert_eq!(history.len(), catalog.donations().len());
        for (entry, donation) in history.iter().zip(catalog.donations()) {
            assert_eq!(entry.donation.donation_id, donation.donation_id);
            let recipient = catalog.recipient(donation.recipient_id).expect("recipient");
            assert_eq!(entry.recipient_name, recipient.name);
        }
    }

    #[test]
    fn history_falls_back_to_a_placeholder_for_missing_recipients() {
        let donations = vec![donation(1, 99, 100)];
        let history = donation_history(&donations, &[]);
        assert_eq!(history[0].recipient_name, UNKNOWN_RECIPIENT_NAME);
    }
}
