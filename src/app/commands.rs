//! Inbound commands to the panel service.
//!
//! These represent actions requested by the outside world (operator UI,
//! serial console, test harness) that the
//! [`PanelService`](super::service::PanelService) interprets and acts upon.

use crate::suppression::ActuatorKind;

/// Commands that external adapters can send into the control core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    /// Open the authorization gate to arm (`true`) or disarm the system.
    RequestArmToggle(bool),

    /// Open the authorization gate to restore (`true`) or cut
    /// non-essential power.
    RequestPowerToggle(bool),

    /// Submit the primary credential for the open authorization session.
    SubmitPrimary(String),

    /// Submit the secondary one-time code; commits the pending action on
    /// success.
    SubmitSecondary(String),

    /// Discard the open authorization session and its pending action.
    CancelAuthorization,

    /// Discharge a suppression actuator.
    FireActuator(ActuatorKind),

    /// Start the emergency-lighting self-test.
    StartTest,

    /// Power the emergency lighting back on from its off state.
    LightingPowerOn,

    /// Power the emergency lighting off from charged standby.
    LightingPowerOff,

    /// Latch the emergency lighting into its fault state (service hook).
    InjectLightingFault,

    /// Report the building mains supply lost (`true`) or restored.
    SetMainsLost(bool),

    /// Advance panel time by whole seconds.
    Tick(u32),
}
