//! Backend worker: owns the tokio runtime and the donation flow engine.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use donation_core::{DonationFlow, FlowEvent, Navigator};
use shared::domain::RecipientId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{CatalogSnapshot, NavTarget, UiError, UiErrorContext, UiEvent};

/// Relays flow-initiated screen changes onto the UI event queue.
struct ChannelNavigator {
    ui_tx: Sender<UiEvent>,
}

impl Navigator for ChannelNavigator {
    fn show_recipient(&self, recipient_id: RecipientId) {
        let _ = self
            .ui_tx
            .try_send(UiEvent::Navigate(NavTarget::RecipientDetail(recipient_id)));
    }

    fn open_donation_flow(&self) {
        let _ = self.ui_tx.try_send(UiEvent::Navigate(NavTarget::DonateTab));
    }
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let catalog = Arc::new(catalog::StaticCatalog::seeded());
            let navigator = Arc::new(ChannelNavigator {
                ui_tx: ui_tx.clone(),
            });
            let flow = Arc::new(DonationFlow::new(catalog.clone(), navigator));
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            let mut events = flow.subscribe_events();
            let ui_tx_clone = ui_tx.clone();
            let forwarder = tokio::spawn(async move {
                while let Ok(event) = events.recv().await {
                    let evt = match event {
                        FlowEvent::WizardUpdated(snapshot) => UiEvent::WizardUpdated(snapshot),
                        FlowEvent::DonationConfirmed(confirmed) => {
                            UiEvent::DonationConfirmed(confirmed)
                        }
                        FlowEvent::FlowClosed => UiEvent::FlowClosed,
                    };
                    let _ = ui_tx_clone.try_send(evt);
                }
            });

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadCatalog => {
                        tracing::info!(
                            recipients = catalog.recipients().len(),
                            "backend: load_catalog"
                        );
                        let snapshot = CatalogSnapshot {
                            recipients: catalog.recipients().to_vec(),
                            donations: catalog.donations().to_vec(),
                            badges: catalog.badges().to_vec(),
                            categories: catalog.categories().to_vec(),
                            profile: catalog.user_profile().clone(),
                        };
                        let _ = ui_tx.try_send(UiEvent::CatalogLoaded(snapshot));
                    }
                    BackendCommand::ViewRecipient { recipient_id } => {
                        tracing::info!(recipient_id = recipient_id.0, "backend: view_recipient");
                        if let Err(err) = flow.view_recipient(recipient_id) {
                            tracing::error!(
                                recipient_id = recipient_id.0,
                                "backend: view_recipient failed: {err}"
                            );
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::Navigation,
                                err.to_string(),
                            )));
                        }
                    }
                    BackendCommand::OpenDonationFlow => {
                        tracing::info!("backend: open_donation_flow");
                        if let Err(err) = flow.open_donation_flow().await {
                            tracing::error!("backend: open_donation_flow failed: {err}");
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::DonationFlow,
                                err.to_string(),
                            )));
                        }
                    }
                    BackendCommand::SelectRecipient { recipient_id } => {
                        tracing::info!(recipient_id = recipient_id.0, "backend: select_recipient");
                        if let Err(err) = flow.select_recipient(recipient_id).await {
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::DonationFlow,
                                err.to_string(),
                            )));
                        }
                    }
                    BackendCommand::SelectPreset { amount_minor_units } => {
                        tracing::info!(amount = amount_minor_units, "backend: select_preset");
                        if let Err(err) = flow.select_preset(amount_minor_units).await {
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::DonationFlow,
                                err.to_string(),
                            )));
                        }
                    }
                    BackendCommand::SetCustomAmount { input } => {
                        if let Err(err) = flow.enter_custom_amount(&input).await {
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::DonationFlow,
                                err.to_string(),
                            )));
                        }
                    }
                    BackendCommand::SetMessage { message } => {
                        if let Err(err) = flow.set_message(&message).await {
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::DonationFlow,
                                err.to_string(),
                            )));
                        }
                    }
                    BackendCommand::Advance => {
                        tracing::info!("backend: advance");
                        if let Err(err) = flow.advance().await {
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::DonationFlow,
                                err.to_string(),
                            )));
                        }
                    }
                    BackendCommand::Back => {
                        tracing::info!("backend: back");
                        if let Err(err) = flow.back().await {
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::DonationFlow,
                                err.to_string(),
                            )));
                        }
                    }
                    BackendCommand::Restart => {
                        tracing::info!("backend: restart");
                        if let Err(err) = flow.restart().await {
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::DonationFlow,
                                err.to_string(),
                            )));
                        }
                    }
                    BackendCommand::LeaveFlow => {
                        tracing::info!("backend: leave_flow");
                        flow.leave_flow().await;
                    }
                }
            }

            forwarder.abort();
        });
    });
}
