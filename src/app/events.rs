//! Outbound panel events.
//!
//! The state machines emit these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them — print to the console, render a toast,
//! feed a building-management bus. Refusals that only concern the caller
//! (wrong credential, disarmed system) travel back as typed errors instead.

use crate::lighting::LightState;
use crate::reserves::ReserveKind;
use crate::suppression::ActuatorKind;

/// Structured events emitted by the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The suppression system was armed after authorization.
    SystemArmed,

    /// The suppression system was disarmed after authorization.
    SystemDisarmed,

    /// Non-essential power was cut after authorization.
    PowerCut,

    /// Non-essential power was restored after authorization.
    PowerRestored,

    /// Power was cut automatically right after a successful discharge.
    /// Distinct from [`PanelEvent::PowerCut`] so observers can tell the
    /// automatic protocol from a manual action.
    AutoPowerCut,

    /// An actuator discharged successfully.
    ActuatorFired {
        kind: ActuatorKind,
        pressure: &'static str,
        water_liters: u32,
        foam_liters: u32,
    },

    /// A fire request was refused because a required reserve is empty.
    ResourceExhausted { kind: ReserveKind },

    /// The lighting self-test started.
    TestStarted { duration_secs: u32 },

    /// The lighting self-test completed; the system is fully operational.
    TestCompleted,

    /// A self-test request was refused; carries the blocking state.
    TestBlocked { state: LightState },

    /// The lighting state machine moved to a new state.
    LightingStateChanged { state: LightState },
}
