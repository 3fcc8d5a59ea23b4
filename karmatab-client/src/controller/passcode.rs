//! Passcode gate in front of the main screens

use shared::error::AppError;

use crate::gateway::Gateway;

/// Digits in a passcode
pub const PASSCODE_LENGTH: usize = 4;

/// Result of a keypad action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Still collecting digits
    Pending,
    /// Passcode accepted, gate unlocked
    Granted,
    /// Passcode rejected, input cleared
    Denied,
}

/// Keypad state for the passcode screen
#[derive(Debug)]
pub struct PasscodeGate {
    gateway: Gateway,
    entered: String,
    unlocked: bool,
    denial: Option<AppError>,
}

impl PasscodeGate {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            entered: String::with_capacity(PASSCODE_LENGTH),
            unlocked: false,
            denial: None,
        }
    }

    /// Add a digit; the last digit submits automatically
    ///
    /// Non-digits and presses beyond the passcode length are ignored.
    pub async fn press_digit(&mut self, digit: char) -> GateOutcome {
        if !digit.is_ascii_digit() || self.entered.len() >= PASSCODE_LENGTH {
            return GateOutcome::Pending;
        }
        self.entered.push(digit);
        if self.entered.len() == PASSCODE_LENGTH {
            return self.submit().await;
        }
        GateOutcome::Pending
    }

    pub fn backspace(&mut self) {
        self.entered.pop();
    }

    /// Check what has been entered so far
    pub async fn submit(&mut self) -> GateOutcome {
        if self.gateway.validate_credential(&self.entered).await {
            tracing::info!("Passcode accepted");
            self.entered.clear();
            self.unlocked = true;
            self.denial = None;
            GateOutcome::Granted
        } else {
            tracing::info!(digits = self.entered.len(), "Passcode rejected");
            self.entered.clear();
            self.denial = Some(AppError::invalid_credentials());
            GateOutcome::Denied
        }
    }

    /// Logout: relock and forget any partial input
    pub fn lock(&mut self) {
        self.entered.clear();
        self.unlocked = false;
        self.denial = None;
    }

    /// Number of digits entered, for the indicator dots
    pub fn entered_len(&self) -> usize {
        self.entered.len()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Rejection from the last submit, kept until the next submit or lock
    pub fn error(&self) -> Option<&AppError> {
        self.denial.as_ref()
    }
}
