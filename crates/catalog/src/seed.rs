use chrono::NaiveDate;
use shared::domain::{
    Badge, BadgeIcon, BadgeId, Donation, DonationId, Recipient, RecipientId, RecipientUpdate,
    UserProfile,
};

use crate::StaticCatalog;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn build() -> StaticCatalog {
    StaticCatalog {
        recipients: recipients(),
        donations: donations(),
        badges: badges(),
        categories: vec![
            "All".to_string(),
            "Medical".to_string(),
            "Education".to_string(),
            "Livelihood".to_string(),
            "Children".to_string(),
        ],
        profile: UserProfile {
            name: "Priya Sharma".to_string(),
            email: "priya.sharma@example.com".to_string(),
            avatar_url: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg"
                .to_string(),
            member_since: "January 2025".to_string(),
        },
    }
}

fn recipients() -> Vec<Recipient> {
    vec![
        Recipient {
            recipient_id: RecipientId(1),
            name: "Lakshmi Devi".to_string(),
            age: 34,
            location: "Chennai, Tamil Nadu".to_string(),
            image_url: "https://images.pexels.com/photos/3768114/pexels-photo-3768114.jpeg"
                .to_string(),
            quote: "Every rupee brings my daughter one step closer to walking again."
                .to_string(),
            story: "Lakshmi works as a tailor in Chennai and is raising two children on her \
                    own. Her seven-year-old daughter Kavya was injured in a road accident \
                    last year and needs corrective surgery on her leg, followed by months \
                    of physiotherapy. The family has already sold what little they had to \
                    cover the first hospital stay."
                .to_string(),
            category: "Medical".to_string(),
            goal_minor_units: 50_000,
            raised_minor_units: 12_500,
            verified_by: "CareBridge Foundation".to_string(),
            updates: vec![
                RecipientUpdate {
                    date: ymd(2025, 2, 10),
                    message: "Kavya's pre-surgery assessment went well. The doctors are \
                              hopeful she can be operated on next quarter."
                        .to_string(),
                    image_url: None,
                },
                RecipientUpdate {
                    date: ymd(2025, 3, 5),
                    message: "We reached a quarter of the goal. Thank you for standing \
                              with us."
                        .to_string(),
                    image_url: Some(
                        "https://images.pexels.com/photos/3952234/pexels-photo-3952234.jpeg"
                            .to_string(),
                    ),
                },
            ],
            documents: vec![
                "hospital-estimate.pdf".to_string(),
                "verification-report.pdf".to_string(),
            ],
        },
        Recipient {
            recipient_id: RecipientId(2),
            name: "Arjun Kumar".to_string(),
            age: 12,
            location: "Patna, Bihar".to_string(),
            image_url: "https://images.pexels.com/photos/2026960/pexels-photo-2026960.jpeg"
                .to_string(),
            quote: "I want to be the first in my family to finish school.".to_string(),
            story: "Arjun is a bright student who tops his class in mathematics. His \
                    father is a daily-wage worker and the family cannot cover this year's \
                    school fees, books and uniform. A year of schooling is all that \
                    stands between Arjun and the scholarship exam he is preparing for."
                .to_string(),
            category: "Education".to_string(),
            goal_minor_units: 20_000,
            raised_minor_units: 9_000,
            verified_by: "Asha Trust".to_string(),
            updates: vec![RecipientUpdate {
                date: ymd(2025, 1, 20),
                message: "Arjun enrolled for the new term and collected his textbooks."
                    .to_string(),
                image_url: None,
            }],
            documents: vec!["school-fee-receipt.pdf".to_string()],
        },
        Recipient {
            recipient_id: RecipientId(3),
            name: "Meera Joshi".to_string(),
            age: 28,
            location: "Jaipur, Rajasthan".to_string(),
            image_url: "https://images.pexels.com/photos/1587009/pexels-photo-1587009.jpeg"
                .to_string(),
            quote: "A sewing machine of my own means I can feed my children without \
                    asking anyone."
                .to_string(),
            story: "Meera was widowed two years ago and supports two young children by \
                    taking in stitching work on a borrowed machine. She has completed an \
                    advanced tailoring course and needs her own machine and an initial \
                    stock of fabric to start taking orders directly."
                .to_string(),
            category: "Livelihood".to_string(),
            goal_minor_units: 35_000,
            raised_minor_units: 28_000,
            verified_by: "Udaan Collective".to_string(),
            updates: vec![RecipientUpdate {
                date: ymd(2025, 2, 18),
                message: "Meera completed her advanced stitching course with top marks."
                    .to_string(),
                image_url: None,
            }],
            documents: vec![
                "training-certificate.pdf".to_string(),
                "verification-report.pdf".to_string(),
            ],
        },
        Recipient {
            recipient_id: RecipientId(4),
            name: "Ravi Patel".to_string(),
            age: 45,
            location: "Surat, Gujarat".to_string(),
            image_url: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg"
                .to_string(),
            quote: "The dialysis kept me alive. Your kindness is giving me a future."
                .to_string(),
            story: "Ravi ran a small textile stall until kidney failure put him on \
                    dialysis three times a week. A donor match has been found and the \
                    community has pushed his transplant fund past its goal. Everything \
                    raised beyond the goal covers his post-operative medicines."
                .to_string(),
            category: "Medical".to_string(),
            goal_minor_units: 80_000,
            raised_minor_units: 86_400,
            verified_by: "CareBridge Foundation".to_string(),
            updates: vec![
                RecipientUpdate {
                    date: ymd(2025, 1, 30),
                    message: "A matching donor has been found. Surgery is scheduled for \
                              March."
                        .to_string(),
                    image_url: None,
                },
                RecipientUpdate {
                    date: ymd(2025, 3, 12),
                    message: "The transplant was successful. Ravi is recovering at home."
                        .to_string(),
                    image_url: Some(
                        "https://images.pexels.com/photos/4167541/pexels-photo-4167541.jpeg"
                            .to_string(),
                    ),
                },
            ],
            documents: vec![
                "medical-summary.pdf".to_string(),
                "hospital-estimate.pdf".to_string(),
                "verification-report.pdf".to_string(),
            ],
        },
        Recipient {
            recipient_id: RecipientId(5),
            name: "Ananya Singh".to_string(),
            age: 8,
            location: "Lucknow, Uttar Pradesh".to_string(),
            image_url: "https://images.pexels.com/photos/1068205/pexels-photo-1068205.jpeg"
                .to_string(),
            quote: "I like the hostel. There are books and the dal is served hot."
                .to_string(),
            story: "Ananya lost both parents last year and has been taken in by a shelter \
                    home run by Asha Trust. Sponsorship covers her boarding, meals and \
                    schooling for a full year."
                .to_string(),
            category: "Children".to_string(),
            goal_minor_units: 15_000,
            raised_minor_units: 4_500,
            verified_by: "Asha Trust".to_string(),
            updates: Vec::new(),
            documents: Vec::new(),
        },
    ]
}

fn donations() -> Vec<Donation> {
    vec![
        Donation {
            donation_id: DonationId(1),
            recipient_id: RecipientId(2),
            amount_minor_units: 1_000,
            date: ymd(2025, 1, 15),
            message: Some("For your books and uniform. Study well!".to_string()),
        },
        Donation {
            donation_id: DonationId(2),
            recipient_id: RecipientId(1),
            amount_minor_units: 250,
            date: ymd(2025, 2, 2),
            message: None,
        },
        Donation {
            donation_id: DonationId(3),
            recipient_id: RecipientId(2),
            amount_minor_units: 250,
            date: ymd(2025, 2, 20),
            message: Some("Keep going, Arjun!".to_string()),
        },
    ]
}

fn badges() -> Vec<Badge> {
    vec![
        Badge {
            badge_id: BadgeId(1),
            name: "First Step".to_string(),
            description: "Made your first donation".to_string(),
            icon: BadgeIcon::Heart,
            earned: true,
        },
        Badge {
            badge_id: BadgeId(2),
            name: "Friend of Education".to_string(),
            description: "Funded a child's schooling".to_string(),
            icon: BadgeIcon::Book,
            earned: true,
        },
        Badge {
            badge_id: BadgeId(3),
            name: "Steady Giver".to_string(),
            description: "Donated in three different months".to_string(),
            icon: BadgeIcon::Calendar,
            earned: false,
        },
        Badge {
            badge_id: BadgeId(4),
            name: "Community Champion".to_string(),
            description: "Supported five different people".to_string(),
            icon: BadgeIcon::Users,
            earned: false,
        },
    ]
}
