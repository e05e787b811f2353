use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use catalog::StaticCatalog;
use clap::Parser;
use donation_core::impact::summarize_impact;
use donation_core::progress::compute_progress;
use donation_core::wizard::{CUSTOM_AMOUNT_MAX_DIGITS, PRESET_AMOUNTS_MINOR_UNITS};
use donation_core::{DonationFlow, FlowEvent, NoopNavigator};
use shared::domain::RecipientId;

#[derive(Parser, Debug)]
struct Args {
    /// Recipient id to donate to. Defaults to the first listed recipient.
    #[arg(long)]
    recipient: Option<i64>,
    #[arg(long, default_value_t = 100)]
    amount: u64,
    #[arg(long)]
    message: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    if args.amount == 0 {
        bail!("amount must be positive");
    }
    if args.amount.to_string().len() > CUSTOM_AMOUNT_MAX_DIGITS {
        bail!("amount can have at most {CUSTOM_AMOUNT_MAX_DIGITS} digits");
    }

    let catalog = Arc::new(StaticCatalog::seeded());

    println!("Recipients:");
    for recipient in catalog.recipients() {
        let progress = compute_progress(recipient.raised_minor_units, recipient.goal_minor_units);
        println!(
            "  [{}] {}, {} ({}) {}: ₹{} of ₹{} ({}% funded)",
            recipient.recipient_id.0,
            recipient.name,
            recipient.age,
            recipient.location,
            recipient.category,
            recipient.raised_minor_units,
            recipient.goal_minor_units,
            progress.percent_label
        );
    }

    let flow = Arc::new(DonationFlow::new(catalog.clone(), Arc::new(NoopNavigator)));
    let mut events = flow.subscribe_events();

    flow.enter_flow().await?;
    if let Some(recipient) = args.recipient {
        flow.select_recipient(RecipientId(recipient)).await?;
    }

    if PRESET_AMOUNTS_MINOR_UNITS.contains(&args.amount) {
        flow.select_preset(args.amount).await?;
    } else {
        flow.enter_custom_amount(&args.amount.to_string()).await?;
    }
    flow.advance().await?;

    if let Some(message) = &args.message {
        flow.set_message(message).await?;
    }
    flow.advance().await?;
    println!("Processing your donation...");

    let confirmed = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if let FlowEvent::DonationConfirmed(confirmed) = events.recv().await? {
                return anyhow::Ok(confirmed);
            }
        }
    })
    .await??;

    println!(
        "Thank you! Your donation of ₹{} to {} has been processed.",
        confirmed.amount_minor_units, confirmed.recipient_name
    );
    if let Some(message) = &confirmed.message {
        println!("Your message: \"{message}\"");
    }

    let summary = summarize_impact(catalog.donations(), catalog.badges());
    println!(
        "Impact so far: ₹{} donated, {} people helped, {} badges earned.",
        summary.total_donated_minor_units, summary.people_helped, summary.badges_earned
    );

    flow.leave_flow().await;
    Ok(())
}
