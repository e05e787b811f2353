use super::*;
use std::sync::Mutex as StdMutex;

const TEST_DELAY: Duration = Duration::from_millis(50);

struct TestProvider {
    recipients: Vec<Recipient>,
    donations: Vec<Donation>,
    badges: Vec<Badge>,
    categories: Vec<String>,
    profile: UserProfile,
}

impl TestProvider {
    fn with_recipients(recipients: Vec<Recipient>) -> Self {
        Self {
            recipients,
            donations: Vec::new(),
            badges: Vec::new(),
            categories: vec!["All".to_string()],
            profile: UserProfile {
                name: "Test Donor".to_string(),
                email: "donor@example.com".to_string(),
                avatar_url: String::new(),
                member_since: "January 2025".to_string(),
            },
        }
    }

    fn empty() -> Self {
        Self::with_recipients(Vec::new())
    }
}

impl DonationDataProvider for TestProvider {
    fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    fn recipient(&self, recipient_id: RecipientId) -> Option<&Recipient> {
        self.recipients
            .iter()
            .find(|recipient| recipient.recipient_id == recipient_id)
    }

    fn donations(&self) -> &[Donation] {
        &self.donations
    }

    fn badges(&self) -> &[Badge] {
        &self.badges
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn user_profile(&self) -> &UserProfile {
        &self.profile
    }
}

#[derive(Default)]
struct TestNavigator {
    shown_recipients: StdMutex<Vec<RecipientId>>,
    donate_opens: StdMutex<u32>,
}

impl Navigator for TestNavigator {
    fn show_recipient(&self, recipient_id: RecipientId) {
        self.shown_recipients
            .lock()
            .expect("lock")
            .push(recipient_id);
    }

    fn open_donation_flow(&self) {
        *self.donate_opens.lock().expect("lock") += 1;
    }
}

fn test_recipient(id: i64, name: &str) -> Recipient {
    Recipient {
        recipient_id: RecipientId(id),
        name: name.to_string(),
        age: 30,
        location: "Chennai, Tamil Nadu".to_string(),
        image_url: String::new(),
        quote: String::new(),
        story: String::new(),
        category: "Medical".to_string(),
        goal_minor_units: 10_000,
        raised_minor_units: 2_500,
        verified_by: "Asha Trust".to_string(),
        updates: Vec::new(),
        documents: Vec::new(),
    }
}

fn test_flow() -> (Arc<DonationFlow>, Arc<TestNavigator>) {
    let provider = Arc::new(TestProvider::with_recipients(vec![
        test_recipient(1, "Lakshmi Devi"),
        test_recipient(2, "Arjun Kumar"),
    ]));
    let navigator = Arc::new(TestNavigator::default());
    let flow = Arc::new(DonationFlow::new_with_processing_delay(
        provider,
        navigator.clone(),
        TEST_DELAY,
    ));
    (flow, navigator)
}

async fn wait_for_confirmation(rx: &mut broadcast::Receiver<FlowEvent>) -> ConfirmedDonation {
    tokio::time::timeout(Duration::from_secs(1), async {
        loop {
            if let FlowEvent::DonationConfirmed(confirmed) = rx.recv().await.expect("event") {
                return confirmed;
            }
        }
    })
    .await
    .expect("confirmation timeout")
}

#[tokio::test]
async fn entering_flow_defaults_to_the_first_recipient() {
    let (flow, _) = test_flow();
    let mut rx = flow.subscribe_events();

    flow.enter_flow().await.expect("enter");

    let snapshot = flow.snapshot().await.expect("active wizard");
    assert_eq!(snapshot.step, WizardStep::Amount);
    assert_eq!(snapshot.recipient_id, RecipientId(1));
    assert_eq!(snapshot.amount_minor_units, 0);
    assert!(snapshot.message.is_empty());

    match rx.recv().await.expect("event") {
        FlowEvent::WizardUpdated(emitted) => assert_eq!(emitted, snapshot),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn reentering_an_active_flow_keeps_the_draft() {
    let (flow, _) = test_flow();
    flow.enter_flow().await.expect("enter");
    flow.select_preset(500).await.expect("preset");

    flow.enter_flow().await.expect("re-enter");

    let snapshot = flow.snapshot().await.expect("active wizard");
    assert_eq!(snapshot.amount_minor_units, 500);
    assert_eq!(snapshot.step, WizardStep::Amount);
}

#[tokio::test]
async fn empty_catalog_cannot_open_the_flow() {
    let provider = Arc::new(TestProvider::empty());
    let flow = DonationFlow::new(provider, Arc::new(NoopNavigator));

    let err = flow.enter_flow().await.expect_err("enter should fail");
    assert!(err.to_string().contains("no recipients"));
    assert!(flow.snapshot().await.is_none());
}

#[tokio::test]
async fn advance_without_an_amount_stays_on_the_amount_step() {
    let (flow, _) = test_flow();
    flow.enter_flow().await.expect("enter");

    let mut rx = flow.subscribe_events();
    flow.advance().await.expect("advance");

    assert_eq!(
        flow.snapshot().await.expect("active wizard").step,
        WizardStep::Amount
    );
    assert!(rx.try_recv().is_err(), "blocked advance should emit nothing");
}

#[tokio::test]
async fn custom_amount_overrides_a_preset_before_advancing() {
    let (flow, _) = test_flow();
    flow.enter_flow().await.expect("enter");

    flow.select_preset(500).await.expect("preset");
    flow.enter_custom_amount("50").await.expect("custom amount");
    flow.advance().await.expect("advance");

    let snapshot = flow.snapshot().await.expect("active wizard");
    assert_eq!(snapshot.step, WizardStep::Message);
    assert_eq!(snapshot.amount_minor_units, 50);
}

#[tokio::test]
async fn full_flow_confirms_with_recipient_name_and_message() {
    let (flow, _) = test_flow();
    flow.enter_flow().await.expect("enter");
    flow.select_recipient(RecipientId(2)).await.expect("select");
    flow.enter_custom_amount("100").await.expect("amount");
    flow.advance().await.expect("to message");
    flow.set_message("Good luck").await.expect("message");

    let mut rx = flow.subscribe_events();
    flow.advance().await.expect("to processing");

    match rx.recv().await.expect("event") {
        FlowEvent::WizardUpdated(snapshot) => {
            assert_eq!(snapshot.step, WizardStep::Processing)
        }
        other => panic!("unexpected event: {other:?}"),
    }

    let confirmed = wait_for_confirmation(&mut rx).await;
    assert_eq!(confirmed.recipient_id, RecipientId(2));
    assert_eq!(confirmed.recipient_name, "Arjun Kumar");
    assert_eq!(confirmed.amount_minor_units, 100);
    assert_eq!(confirmed.message.as_deref(), Some("Good luck"));

    assert_eq!(
        flow.snapshot().await.expect("active wizard").step,
        WizardStep::Confirmed
    );
}

#[tokio::test]
async fn confirmation_without_a_message_carries_none() {
    let (flow, _) = test_flow();
    flow.enter_flow().await.expect("enter");
    flow.select_preset(10).await.expect("preset");
    flow.advance().await.expect("to message");

    let mut rx = flow.subscribe_events();
    flow.advance().await.expect("to processing");

    let confirmed = wait_for_confirmation(&mut rx).await;
    assert_eq!(confirmed.message, None);
}

#[tokio::test]
async fn leaving_the_flow_cancels_a_pending_confirmation() {
    let (flow, _) = test_flow();
    flow.enter_flow().await.expect("enter");
    flow.select_preset(100).await.expect("preset");
    flow.advance().await.expect("to message");

    let mut rx = flow.subscribe_events();
    flow.advance().await.expect("to processing");
    flow.leave_flow().await;

    tokio::time::sleep(TEST_DELAY * 4).await;

    assert!(flow.snapshot().await.is_none());

    let mut saw_closed = false;
    while let Ok(event) = rx.try_recv() {
        match event {
            FlowEvent::DonationConfirmed(_) => panic!("donation confirmed after teardown"),
            FlowEvent::FlowClosed => saw_closed = true,
            FlowEvent::WizardUpdated(_) => {}
        }
    }
    assert!(saw_closed);
}

#[tokio::test]
async fn back_from_the_message_step_keeps_the_amount() {
    let (flow, _) = test_flow();
    flow.enter_flow().await.expect("enter");
    flow.select_preset(500).await.expect("preset");
    flow.advance().await.expect("to message");

    flow.back().await.expect("back");

    let snapshot = flow.snapshot().await.expect("active wizard");
    assert_eq!(snapshot.step, WizardStep::Amount);
    assert_eq!(snapshot.amount_minor_units, 500);
}

#[tokio::test]
async fn restart_after_confirmation_keeps_the_recipient() {
    let (flow, _) = test_flow();
    flow.enter_flow().await.expect("enter");
    flow.select_recipient(RecipientId(2)).await.expect("select");
    flow.select_preset(100).await.expect("preset");
    flow.advance().await.expect("to message");

    let mut rx = flow.subscribe_events();
    flow.advance().await.expect("to processing");
    wait_for_confirmation(&mut rx).await;

    flow.restart().await.expect("restart");

    let snapshot = flow.snapshot().await.expect("active wizard");
    assert_eq!(snapshot.step, WizardStep::Amount);
    assert_eq!(snapshot.amount_minor_units, 0);
    assert!(snapshot.message.is_empty());
    assert_eq!(snapshot.recipient_id, RecipientId(2));
}

#[tokio::test]
async fn restart_before_confirmation_is_ignored() {
    let (flow, _) = test_flow();
    flow.enter_flow().await.expect("enter");
    flow.select_preset(100).await.expect("preset");
    flow.advance().await.expect("to message");

    flow.restart().await.expect("restart is a no-op");

    assert_eq!(
        flow.snapshot().await.expect("active wizard").step,
        WizardStep::Message
    );
}

#[tokio::test]
async fn inputs_during_processing_are_ignored() {
    let (flow, _) = test_flow();
    flow.enter_flow().await.expect("enter");
    flow.select_preset(100).await.expect("preset");
    flow.advance().await.expect("to message");

    let mut rx = flow.subscribe_events();
    flow.advance().await.expect("to processing");

    flow.set_message("too late").await.expect("ignored message");
    flow.select_preset(500).await.expect("ignored preset");
    flow.back().await.expect("ignored back");

    let confirmed = wait_for_confirmation(&mut rx).await;
    assert_eq!(confirmed.amount_minor_units, 100);
    assert_eq!(confirmed.message, None);
}

#[tokio::test]
async fn wizard_inputs_require_an_active_flow() {
    let (flow, _) = test_flow();

    let err = flow.select_preset(100).await.expect_err("inactive flow");
    assert!(err.to_string().contains("not active"));
}

#[tokio::test]
async fn selecting_an_unknown_recipient_fails() {
    let (flow, _) = test_flow();
    flow.enter_flow().await.expect("enter");

    let err = flow
        .select_recipient(RecipientId(99))
        .await
        .expect_err("unknown recipient");
    assert!(err.to_string().contains("unknown recipient"));

    let snapshot = flow.snapshot().await.expect("active wizard");
    assert_eq!(snapshot.recipient_id, RecipientId(1));
}

#[tokio::test]
async fn view_recipient_navigates_through_the_frontend() {
    let (flow, navigator) = test_flow();

    flow.view_recipient(RecipientId(2)).expect("view");
    assert_eq!(
        navigator.shown_recipients.lock().expect("lock").as_slice(),
        &[RecipientId(2)]
    );

    let err = flow
        .view_recipient(RecipientId(99))
        .expect_err("unknown recipient");
    assert!(err.to_string().contains("unknown recipient"));
    assert_eq!(navigator.shown_recipients.lock().expect("lock").len(), 1);
}

#[tokio::test]
async fn open_donation_flow_notifies_the_frontend() {
    let (flow, navigator) = test_flow();

    flow.open_donation_flow().await.expect("open");

    assert_eq!(*navigator.donate_opens.lock().expect("lock"), 1);
    assert!(flow.snapshot().await.is_some());
}
