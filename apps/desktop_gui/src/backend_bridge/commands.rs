//! Backend commands queued from UI to backend worker.

use shared::domain::RecipientId;

pub enum BackendCommand {
    LoadCatalog,
    ViewRecipient { recipient_id: RecipientId },
    OpenDonationFlow,
    SelectRecipient { recipient_id: RecipientId },
    SelectPreset { amount_minor_units: u64 },
    SetCustomAmount { input: String },
    SetMessage { message: String },
    Advance,
    Back,
    Restart,
    LeaveFlow,
}
