//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::LoadCatalog => "load_catalog",
        BackendCommand::ViewRecipient { .. } => "view_recipient",
        BackendCommand::OpenDonationFlow => "open_donation_flow",
        BackendCommand::SelectRecipient { .. } => "select_recipient",
        BackendCommand::SelectPreset { .. } => "select_preset",
        BackendCommand::SetCustomAmount { .. } => "set_custom_amount",
        BackendCommand::SetMessage { .. } => "set_message",
        BackendCommand::Advance => "advance",
        BackendCommand::Back => "back",
        BackendCommand::Restart => "restart",
        BackendCommand::LeaveFlow => "leave_flow",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                .to_string();
        }
    }
}
