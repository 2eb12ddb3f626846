//! Unified error types for the InfernoShield control core.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! facade's error handling uniform. All variants are `Copy` so refusals can
//! be passed around and matched on without allocation; `Display` carries the
//! operator-facing reason for each refusal.

use core::fmt;

use crate::lighting::LightState;
use crate::reserves::ReserveKind;

// ---------------------------------------------------------------------------
// Top-level panel error
// ---------------------------------------------------------------------------

/// Every fallible operation in the control core funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An actuator-fire request was refused by policy.
    Fire(FireError),
    /// The authorization gate refused a step.
    Gate(GateError),
    /// A reserve drain was refused.
    Reserve(ReserveError),
    /// A lighting self-test request was refused.
    Test(TestError),
    /// A lighting power command was refused.
    Power(PowerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fire(e) => write!(f, "suppression: {e}"),
            Self::Gate(e) => write!(f, "authorization: {e}"),
            Self::Reserve(e) => write!(f, "reserve: {e}"),
            Self::Test(e) => write!(f, "lighting test: {e}"),
            Self::Power(e) => write!(f, "lighting power: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Actuator-fire refusals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireError {
    /// The suppression system is disarmed.
    SystemDisarmed,
    /// Non-essential power is cut.
    PowerOff,
    /// A required reserve is empty; nothing was drained.
    ResourceExhausted(ReserveKind),
}

impl fmt::Display for FireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SystemDisarmed => {
                write!(f, "Cannot activate suppression system while it is disarmed.")
            }
            Self::PowerOff => {
                write!(f, "Cannot activate suppression system while it is turned off.")
            }
            Self::ResourceExhausted(kind) => write!(f, "{kind} reserve is empty."),
        }
    }
}

impl From<FireError> for Error {
    fn from(e: FireError) -> Self {
        Self::Fire(e)
    }
}

// ---------------------------------------------------------------------------
// Authorization gate refusals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    /// A gated action is already awaiting authorization.
    AlreadyPending,
    /// No authorization session is open.
    NoSession,
    /// The submitted factor does not match the session's current stage.
    WrongStage,
    /// Primary credential mismatch; the session stays open for retry.
    InvalidPrimary,
    /// Secondary code mismatch; the session stays open for retry.
    InvalidSecondary,
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyPending => write!(f, "Another authorization is already in progress."),
            Self::NoSession => write!(f, "No authorization is in progress."),
            Self::WrongStage => write!(f, "Authorization step submitted out of order."),
            Self::InvalidPrimary => write!(f, "Incorrect password. Please try again."),
            Self::InvalidSecondary => write!(f, "Incorrect OTP. Please try again."),
        }
    }
}

impl From<GateError> for Error {
    fn from(e: GateError) -> Self {
        Self::Gate(e)
    }
}

// ---------------------------------------------------------------------------
// Reserve refusals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveError {
    /// The reserve was already at zero before the drain.
    Exhausted(ReserveKind),
}

impl fmt::Display for ReserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted(kind) => write!(f, "{kind} reserve is empty."),
        }
    }
}

impl From<ReserveError> for Error {
    fn from(e: ReserveError) -> Self {
        Self::Reserve(e)
    }
}

impl From<ReserveError> for FireError {
    fn from(e: ReserveError) -> Self {
        match e {
            ReserveError::Exhausted(kind) => Self::ResourceExhausted(kind),
        }
    }
}

// ---------------------------------------------------------------------------
// Lighting refusals
// ---------------------------------------------------------------------------

/// Self-tests only run from a fully charged standby state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestError {
    NotCharged(LightState),
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCharged(state) => {
                write!(f, "Cannot start test while system is {}.", state.label_lower())
            }
        }
    }
}

impl From<TestError> for Error {
    fn from(e: TestError) -> Self {
        Self::Test(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerError {
    /// Power-off requires the system to be in charged standby.
    NotCharged(LightState),
    /// Power-on only applies to a system that is off.
    NotOff(LightState),
}

impl fmt::Display for PowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCharged(state) => {
                write!(f, "Cannot power off while system is {}.", state.label_lower())
            }
            Self::NotOff(state) => {
                write!(f, "Cannot power on while system is {}.", state.label_lower())
            }
        }
    }
}

impl From<PowerError> for Error {
    fn from(e: PowerError) -> Self {
        Self::Power(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
