use shared::domain::RecipientId;

pub const PRESET_AMOUNTS_MINOR_UNITS: [u64; 5] = [10, 50, 100, 500, 1_000];
pub const CUSTOM_AMOUNT_MAX_DIGITS: usize = 7;
pub const MESSAGE_MAX_CHARS: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Amount,
    Message,
    Processing,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    pub recipient_id: RecipientId,
    pub amount_minor_units: u64,
    pub message: String,
}

/// Four-step donation wizard. Inputs that do not apply to the current step
/// are rejected rather than queued, mirroring controls that are hidden or
/// disabled on the other steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationWizard {
    step: WizardStep,
    recipient_id: RecipientId,
    amount_minor_units: u64,
    message: String,
}

impl DonationWizard {
    pub fn new(recipient_id: RecipientId) -> Self {
        Self {
            step: WizardStep::Amount,
            recipient_id,
            amount_minor_units: 0,
            message: String::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn recipient_id(&self) -> RecipientId {
        self.recipient_id
    }

    pub fn amount_minor_units(&self) -> u64 {
        self.amount_minor_units
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            step: self.step,
            recipient_id: self.recipient_id,
            amount_minor_units: self.amount_minor_units,
            message: self.message.clone(),
        }
    }

    /// Picks one of the preset amounts. Only valid on the amount step and
    /// only for values that are actually in the preset list.
    pub fn select_preset(&mut self, amount_minor_units: u64) -> bool {
        if self.step != WizardStep::Amount {
            return false;
        }
        if !PRESET_AMOUNTS_MINOR_UNITS.contains(&amount_minor_units) {
            return false;
        }
        self.amount_minor_units = amount_minor_units;
        true
    }

    /// Applies the raw text of the custom amount field. An empty string
    /// clears the amount; anything longer than seven digits or containing a
    /// non-digit is ignored.
    pub fn enter_custom_amount(&mut self, input: &str) -> bool {
        if self.step != WizardStep::Amount {
            return false;
        }
        if input.is_empty() {
            self.amount_minor_units = 0;
            return true;
        }
        if input.len() > CUSTOM_AMOUNT_MAX_DIGITS {
            return false;
        }
        if !input.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        match input.parse::<u64>() {
            Ok(amount) => {
                self.amount_minor_units = amount;
                true
            }
            Err(_) => false,
        }
    }

    pub fn select_recipient(&mut self, recipient_id: RecipientId) -> bool {
        if self.step != WizardStep::Amount {
            return false;
        }
        self.recipient_id = recipient_id;
        true
    }

    pub fn set_message(&mut self, message: &str) -> bool {
        if self.step != WizardStep::Message {
            return false;
        }
        self.message = message.chars().take(MESSAGE_MAX_CHARS).collect();
        true
    }

    /// Moves forward one step and returns the step that was entered. The
    /// amount step refuses to advance until the amount is positive; the
    /// processing and confirmed steps never advance from here.
    pub fn advance(&mut self) -> Option<WizardStep> {
        match self.step {
            WizardStep::Amount => {
                if self.amount_minor_units == 0 {
                    return None;
                }
                self.step = WizardStep::Message;
                Some(WizardStep::Message)
            }
            WizardStep::Message => {
                self.step = WizardStep::Processing;
                Some(WizardStep::Processing)
            }
            WizardStep::Processing | WizardStep::Confirmed => None,
        }
    }

    /// Returns to the amount step. Only the message step has a back control.
    pub fn back(&mut self) -> bool {
        if self.step != WizardStep::Message {
            return false;
        }
        self.step = WizardStep::Amount;
        true
    }

    pub fn complete_processing(&mut self) -> bool {
        if self.step != WizardStep::Processing {
            return false;
        }
        self.step = WizardStep::Confirmed;
        true
    }

    /// Starts a fresh donation to the same recipient. Only available from
    /// the confirmation step.
    pub fn restart(&mut self) -> bool {
        if self.step != WizardStep::Confirmed {
            return false;
        }
        self.step = WizardStep::Amount;
        self.amount_minor_units = 0;
        self.message.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> DonationWizard {
        DonationWizard::new(RecipientId(1))
    }

    #[test]
    fn starts_on_amount_step_with_empty_draft() {
        let wizard = wizard();
        assert_eq!(wizard.step(), WizardStep::Amount);
        assert_eq!(wizard.amount_minor_units(), 0);
        assert!(wizard.message().is_empty());
    }

    #[test]
    fn advance_requires_a_positive_amount() {
        let mut wizard = wizard();
        assert_eq!(wizard.advance(), None);
        assert_eq!(wizard.step(), WizardStep::Amount);

        assert!(wizard.select_preset(100));
        assert_eq!(wizard.advance(), Some(WizardStep::Message));
    }

    #[test]
    fn preset_selection_rejects_values_outside_the_list() {
        let mut wizard = wizard();
        assert!(!wizard.select_preset(42));
        assert_eq!(wizard.amount_minor_units(), 0);

        assert!(wizard.select_preset(1_000));
        assert_eq!(wizard.amount_minor_units(), 1_000);
    }

    #[test]
    fn custom_amount_overwrites_a_preset() {
        let mut wizard = wizard();
        assert!(wizard.select_preset(500));
        assert!(wizard.enter_custom_amount("50"));
        assert_eq!(wizard.amount_minor_units(), 50);
    }

    #[test]
    fn custom_amount_rejects_bad_input() {
        let mut wizard = wizard();
        assert!(wizard.enter_custom_amount("250"));

        assert!(!wizard.enter_custom_amount("12a4"));
        assert!(!wizard.enter_custom_amount("12345678"));
        assert!(!wizard.enter_custom_amount("-5"));
        assert_eq!(wizard.amount_minor_units(), 250);
    }

    #[test]
    fn empty_custom_amount_clears_the_draft_amount() {
        let mut wizard = wizard();
        assert!(wizard.enter_custom_amount("250"));
        assert!(wizard.enter_custom_amount(""));
        assert_eq!(wizard.amount_minor_units(), 0);
        assert_eq!(wizard.advance(), None);
    }

    #[test]
    fn seven_digit_amount_is_the_ceiling() {
        let mut wizard = wizard();
        assert!(wizard.enter_custom_amount("9999999"));
        assert_eq!(wizard.amount_minor_units(), 9_999_999);
    }

    #[test]
    fn recipient_can_only_change_on_the_amount_step() {
        let mut wizard = wizard();
        assert!(wizard.select_recipient(RecipientId(3)));
        assert!(wizard.select_preset(10));
        wizard.advance();

        assert!(!wizard.select_recipient(RecipientId(4)));
        assert_eq!(wizard.recipient_id(), RecipientId(3));
    }

    #[test]
    fn message_is_truncated_at_the_character_limit() {
        let mut wizard = wizard();
        assert!(wizard.select_preset(10));
        wizard.advance();

        let long = "x".repeat(MESSAGE_MAX_CHARS + 25);
        assert!(wizard.set_message(&long));
        assert_eq!(wizard.message().chars().count(), MESSAGE_MAX_CHARS);
    }

    #[test]
    fn message_truncation_counts_characters_not_bytes() {
        let mut wizard = wizard();
        assert!(wizard.select_preset(10));
        wizard.advance();

        let long = "नमस्ते ".repeat(40);
        assert!(wizard.set_message(&long));
        assert_eq!(wizard.message().chars().count(), MESSAGE_MAX_CHARS);
    }

    #[test]
    fn back_only_returns_from_the_message_step() {
        let mut wizard = wizard();
        assert!(!wizard.back());

        assert!(wizard.select_preset(100));
        wizard.advance();
        assert!(wizard.back());
        assert_eq!(wizard.step(), WizardStep::Amount);
        assert_eq!(wizard.amount_minor_units(), 100);

        wizard.advance();
        wizard.advance();
        assert!(!wizard.back());
        assert_eq!(wizard.step(), WizardStep::Processing);
    }

    #[test]
    fn processing_completes_into_confirmation() {
        let mut wizard = wizard();
        assert!(!wizard.complete_processing());

        wizard.select_preset(100);
        wizard.advance();
        wizard.advance();
        assert!(wizard.complete_processing());
        assert_eq!(wizard.step(), WizardStep::Confirmed);
        assert_eq!(wizard.advance(), None);
    }

    #[test]
    fn restart_clears_the_draft_but_keeps_the_recipient() {
        let mut wizard = wizard();
        wizard.select_recipient(RecipientId(2));
        wizard.select_preset(500);
        wizard.advance();
        wizard.set_message("Get well soon");
        wizard.advance();
        wizard.complete_processing();

        assert!(wizard.restart());
        assert_eq!(wizard.step(), WizardStep::Amount);
        assert_eq!(wizard.amount_minor_units(), 0);
        assert!(wizard.message().is_empty());
        assert_eq!(wizard.recipient_id(), RecipientId(2));
    }

    #[test]
    fn restart_is_rejected_before_confirmation() {
        let mut wizard = wizard();
        assert!(!wizard.restart());

        wizard.select_preset(100);
        wizard.advance();
        assert!(!wizard.restart());
        assert_eq!(wizard.step(), WizardStep::Message);
    }
}
