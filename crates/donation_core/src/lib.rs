use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use shared::domain::{Badge, Donation, Recipient, RecipientId, UserProfile};
use thiserror::Error;
use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
};
use tracing::{debug, info};

pub mod impact;
pub mod progress;
pub mod wizard;

use wizard::{DonationWizard, WizardSnapshot, WizardStep};

/// How long the processing step runs before the donation is confirmed.
pub const PROCESSING_DURATION: Duration = Duration::from_millis(2_000);

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("donation flow is not active")]
    FlowNotActive,
    #[error("no recipients available to donate to")]
    EmptyCatalog,
    #[error("unknown recipient {0:?}")]
    UnknownRecipient(RecipientId),
}

/// Read access to the data the screens render. The seam keeps tests in
/// control of the dataset.
pub trait DonationDataProvider: Send + Sync {
    fn recipients(&self) -> &[Recipient];
    fn recipient(&self, recipient_id: RecipientId) -> Option<&Recipient>;
    fn donations(&self) -> &[Donation];
    fn badges(&self) -> &[Badge];
    fn categories(&self) -> &[String];
    fn user_profile(&self) -> &UserProfile;
}

impl DonationDataProvider for catalog::StaticCatalog {
    fn recipients(&self) -> &[Recipient] {
        catalog::StaticCatalog::recipients(self)
    }

    fn recipient(&self, recipient_id: RecipientId) -> Option<&Recipient> {
        catalog::StaticCatalog::recipient(self, recipient_id)
    }

    fn donations(&self) -> &[Donation] {
        catalog::StaticCatalog::donations(self)
    }

    fn badges(&self) -> &[Badge] {
        catalog::StaticCatalog::badges(self)
    }

    fn categories(&self) -> &[String] {
        catalog::StaticCatalog::categories(self)
    }

    fn user_profile(&self) -> &UserProfile {
        catalog::StaticCatalog::user_profile(self)
    }
}

/// Screen transitions requested by the flow. The frontend decides what a
/// push or a pop actually looks like.
pub trait Navigator: Send + Sync {
    fn show_recipient(&self, recipient_id: RecipientId);
    fn open_donation_flow(&self);
}

/// Navigator for frontends that drive navigation themselves.
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn show_recipient(&self, _recipient_id: RecipientId) {}

    fn open_donation_flow(&self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedDonation {
    pub recipient_id: RecipientId,
    pub recipient_name: String,
    pub amount_minor_units: u64,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum FlowEvent {
    WizardUpdated(WizardSnapshot),
    DonationConfirmed(ConfirmedDonation),
    FlowClosed,
}

struct FlowInner {
    wizard: Option<DonationWizard>,
    processing_task: Option<JoinHandle<()>>,
}

/// Drives the donation wizard and owns its completion timer. Frontends
/// subscribe to [`FlowEvent`]s and render the snapshots they carry.
pub struct DonationFlow {
    provider: Arc<dyn DonationDataProvider>,
    navigator: Arc<dyn Navigator>,
    inner: Mutex<FlowInner>,
    events: broadcast::Sender<FlowEvent>,
    processing_delay: Duration,
}

impl DonationFlow {
    pub fn new(provider: Arc<dyn DonationDataProvider>, navigator: Arc<dyn Navigator>) -> Self {
        Self::new_with_processing_delay(provider, navigator, PROCESSING_DURATION)
    }

    pub fn new_with_processing_delay(
        provider: Arc<dyn DonationDataProvider>,
        navigator: Arc<dyn Navigator>,
        processing_delay: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(1024);
        Self {
            provider,
            navigator,
            inner: Mutex::new(FlowInner {
                wizard: None,
                processing_task: None,
            }),
            events,
            processing_delay,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<FlowEvent> {
        self.events.subscribe()
    }

    /// Opens the wizard if it is not already open, defaulting to the first
    /// listed recipient. Re-entering an active flow re-emits the current
    /// snapshot so late subscribers can sync.
    pub async fn enter_flow(&self) -> Result<()> {
        let snapshot = {
            let mut inner = self.inner.lock().await;
            match inner.wizard.as_ref() {
                Some(wizard) => wizard.snapshot(),
                None => {
                    let first = self
                        .provider
                        .recipients()
                        .first()
                        .ok_or(FlowError::EmptyCatalog)?;
                    let wizard = DonationWizard::new(first.recipient_id);
                    info!("donation: flow opened recipient={}", first.recipient_id.0);
                    let snapshot = wizard.snapshot();
                    inner.wizard = Some(wizard);
                    snapshot
                }
            }
        };
        let _ = self.events.send(FlowEvent::WizardUpdated(snapshot));
        Ok(())
    }

    /// Enters the flow and asks the frontend to switch to the donate screen.
    pub async fn open_donation_flow(&self) -> Result<()> {
        self.enter_flow().await?;
        self.navigator.open_donation_flow();
        Ok(())
    }

    /// Validates the recipient and asks the frontend to show their profile.
    pub fn view_recipient(&self, recipient_id: RecipientId) -> Result<()> {
        if self.provider.recipient(recipient_id).is_none() {
            return Err(FlowError::UnknownRecipient(recipient_id).into());
        }
        self.navigator.show_recipient(recipient_id);
        Ok(())
    }

    pub async fn select_preset(&self, amount_minor_units: u64) -> Result<()> {
        self.apply_wizard_change(|wizard| wizard.select_preset(amount_minor_units))
            .await
    }

    pub async fn enter_custom_amount(&self, input: &str) -> Result<()> {
        self.apply_wizard_change(|wizard| wizard.enter_custom_amount(input))
            .await
    }

    pub async fn select_recipient(&self, recipient_id: RecipientId) -> Result<()> {
        if self.provider.recipient(recipient_id).is_none() {
            return Err(FlowError::UnknownRecipient(recipient_id).into());
        }
        self.apply_wizard_change(|wizard| wizard.select_recipient(recipient_id))
            .await
    }

    pub async fn set_message(&self, message: &str) -> Result<()> {
        self.apply_wizard_change(|wizard| wizard.set_message(message))
            .await
    }

    /// Moves the wizard forward. Entering the processing step arms the
    /// completion timer; the pending confirmation is cancelled if the flow
    /// is torn down first.
    pub async fn advance(self: &Arc<Self>) -> Result<()> {
        let snapshot = {
            let mut inner = self.inner.lock().await;
            let wizard = inner.wizard.as_mut().ok_or(FlowError::FlowNotActive)?;
            let Some(entered) = wizard.advance() else {
                return Ok(());
            };
            debug!("donation: advanced to step={entered:?}");
            let snapshot = wizard.snapshot();
            if entered == WizardStep::Processing {
                let task = self.spawn_processing_timer();
                if let Some(previous) = inner.processing_task.replace(task) {
                    previous.abort();
                }
            }
            snapshot
        };
        let _ = self.events.send(FlowEvent::WizardUpdated(snapshot));
        Ok(())
    }

    pub async fn back(&self) -> Result<()> {
        self.apply_wizard_change(|wizard| wizard.back()).await
    }

    pub async fn restart(&self) -> Result<()> {
        self.apply_wizard_change(|wizard| wizard.restart()).await
    }

    /// Tears the wizard down, cancelling any pending confirmation.
    pub async fn leave_flow(&self) {
        let task = {
            let mut inner = self.inner.lock().await;
            inner.wizard = None;
            inner.processing_task.take()
        };
        if let Some(task) = task {
            task.abort();
        }
        info!("donation: flow closed");
        let _ = self.events.send(FlowEvent::FlowClosed);
    }

    pub async fn snapshot(&self) -> Option<WizardSnapshot> {
        let inner = self.inner.lock().await;
        inner.wizard.as_ref().map(DonationWizard::snapshot)
    }

    async fn apply_wizard_change<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut DonationWizard) -> bool,
    {
        let snapshot = {
            let mut inner = self.inner.lock().await;
            let wizard = inner.wizard.as_mut().ok_or(FlowError::FlowNotActive)?;
            if !change(wizard) {
                return Ok(());
            }
            wizard.snapshot()
        };
        let _ = self.events.send(FlowEvent::WizardUpdated(snapshot));
        Ok(())
    }

    fn spawn_processing_timer(self: &Arc<Self>) -> JoinHandle<()> {
        let flow = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(flow.processing_delay).await;
            flow.complete_processing().await;
        })
    }

    async fn complete_processing(&self) {
        let (snapshot, confirmed) = {
            let mut inner = self.inner.lock().await;
            inner.processing_task = None;
            let Some(wizard) = inner.wizard.as_mut() else {
                return;
            };
            if !wizard.complete_processing() {
                return;
            }
            let snapshot = wizard.snapshot();
            let recipient_name = self
                .provider
                .recipient(snapshot.recipient_id)
                .map(|recipient| recipient.name.clone())
                .unwrap_or_else(|| impact::UNKNOWN_RECIPIENT_NAME.to_string());
            let confirmed = ConfirmedDonation {
                recipient_id: snapshot.recipient_id,
                recipient_name,
                amount_minor_units: snapshot.amount_minor_units,
                message: (!snapshot.message.is_empty()).then(|| snapshot.message.clone()),
            };
            (snapshot, confirmed)
        };

        info!(
            "donation: confirmed recipient={} amount={}",
            confirmed.recipient_id.0, confirmed.amount_minor_units
        );
        let _ = self.events.send(FlowEvent::WizardUpdated(snapshot));
        let _ = self.events.send(FlowEvent::DonationConfirmed(confirmed));
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
