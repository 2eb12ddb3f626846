//! Two-factor authorization gate for state-changing commands.
//!
//! Any command that mutates the armed or power state is held as a pending
//! action while the operator completes a two-step exchange:
//!
//! 1. The caller opens the gate with the action it wants committed
//! 2. The operator submits the primary credential (password stage)
//! 3. The operator submits the secondary one-time code
//! 4. The gate hands the pending action back for the caller to apply
//!
//! A wrong credential keeps the session open at the same stage for retry;
//! there is no attempt counter or lockout in this design. Cancellation
//! discards the session and its pending action unconditionally.

use log::warn;

use crate::error::GateError;

// ── Pending actions ──────────────────────────────────────────

/// A state transition awaiting authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Arm or disarm the suppression system.
    ToggleArmed(bool),
    /// Restore or cut non-essential power.
    TogglePower(bool),
}

// ── Session state machine ────────────────────────────────────

/// Stage the open session is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStage {
    AwaitingPrimary,
    AwaitingSecondary,
}

/// One open authorization session.
#[derive(Debug, Clone, Copy)]
pub struct AuthSession {
    pub action: PendingAction,
    pub stage: GateStage,
    /// Why the last primary attempt failed, for operator display.
    pub primary_error: Option<GateError>,
    /// Why the last secondary attempt failed, for operator display.
    pub secondary_error: Option<GateError>,
}

impl AuthSession {
    fn open(action: PendingAction) -> Self {
        Self {
            action,
            stage: GateStage::AwaitingPrimary,
            primary_error: None,
            secondary_error: None,
        }
    }
}

/// Two-factor commit gate.
///
/// Holds the injected credentials and at most one open session. The gate
/// knows nothing about what the pending action means; the caller applies
/// it after `submit_secondary` hands it back.
pub struct AuthGate {
    primary_code: String,
    secondary_code: String,
    session: Option<AuthSession>,
}

impl AuthGate {
    pub fn new(primary_code: String, secondary_code: String) -> Self {
        Self {
            primary_code,
            secondary_code,
            session: None,
        }
    }

    /// Open a session for `action`.
    ///
    /// Refused while another action is still awaiting authorization; the
    /// caller surfaces that instead of queueing.
    pub fn begin(&mut self, action: PendingAction) -> Result<(), GateError> {
        if self.session.is_some() {
            warn!("auth: begin while a session is already open");
            return Err(GateError::AlreadyPending);
        }
        self.session = Some(AuthSession::open(action));
        Ok(())
    }

    /// Submit the primary credential.
    ///
    /// On mismatch the session stays in the primary stage with the attempt
    /// error recorded; the operator may retry.
    pub fn submit_primary(&mut self, attempt: &str) -> Result<(), GateError> {
        let Some(session) = self.session.as_mut() else {
            warn!("auth: primary submitted with no open session");
            return Err(GateError::NoSession);
        };
        if session.stage != GateStage::AwaitingPrimary {
            warn!("auth: primary submitted while awaiting the secondary code");
            return Err(GateError::WrongStage);
        }
        if attempt != self.primary_code {
            session.primary_error = Some(GateError::InvalidPrimary);
            return Err(GateError::InvalidPrimary);
        }
        session.stage = GateStage::AwaitingSecondary;
        session.primary_error = None;
        Ok(())
    }

    /// Submit the secondary one-time code.
    ///
    /// On match the session closes and the pending action is returned for
    /// the caller to apply. A code is never accepted before the primary
    /// stage has passed.
    pub fn submit_secondary(&mut self, attempt: &str) -> Result<PendingAction, GateError> {
        let Some(session) = self.session.as_mut() else {
            warn!("auth: secondary submitted with no open session");
            return Err(GateError::NoSession);
        };
        if session.stage != GateStage::AwaitingSecondary {
            warn!("auth: secondary submitted before the primary stage passed");
            return Err(GateError::WrongStage);
        }
        if attempt != self.secondary_code {
            session.secondary_error = Some(GateError::InvalidSecondary);
            return Err(GateError::InvalidSecondary);
        }
        let action = session.action;
        self.session = None;
        Ok(action)
    }

    /// Discard the session and its pending action. Safe in any state.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// The open session, if any, for status display.
    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }
}

// ── Tests ────────────────────────────────────────────────────
