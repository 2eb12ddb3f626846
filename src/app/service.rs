//! Panel service — the hexagonal core.
//!
//! [`PanelService`] owns both state machines and exposes a clean
//! command/query API. All I/O flows through port traits injected at call
//! sites, making the entire service testable with mock adapters.
//!
//! ```text
//!  PanelCommand ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                   │       PanelService       │
//!  TimeSource  ──▶  │  Suppression · Lighting  │ ──▶ snapshots
//!                   └──────────────────────────┘
//! ```
//!
//! The two machines share no state; the service is the only place they
//! meet, and it hands the same sink and clock to both.

use crate::audit::AuditLog;
use crate::auth::AuthSession;
use crate::config::PanelConfig;
use crate::error::{Error, Result};
use crate::lighting::{LightingPanel, LightingStatus};
use crate::suppression::{ReserveLevels, SuppressionPanel, SuppressionStatus};

use super::commands::PanelCommand;
use super::ports::{EventSink, TimeSource};

// ───────────────────────────────────────────────────────────────
// PanelService
// ───────────────────────────────────────────────────────────────

/// The panel service orchestrating the suppression and lighting cores.
pub struct PanelService {
    suppression: SuppressionPanel,
    lighting: LightingPanel,
}

impl PanelService {
    /// Construct the service from configuration: suppression armed and
    /// powered, lighting in charged standby.
    pub fn new(config: PanelConfig) -> Self {
        let suppression = SuppressionPanel::new(&config);
        let lighting = LightingPanel::new(config);
        Self {
            suppression,
            lighting,
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one external command.
    ///
    /// Commands run to completion before the next is accepted; refusals
    /// come back as typed errors, notifications go through `sink`.
    pub fn handle_command(
        &mut self,
        cmd: PanelCommand,
        clock: &dyn TimeSource,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        match cmd {
            PanelCommand::RequestArmToggle(target) => {
                self.suppression.request_arm_toggle(target)?;
            }
            PanelCommand::RequestPowerToggle(target) => {
                self.suppression.request_power_toggle(target)?;
            }
            PanelCommand::SubmitPrimary(code) => {
                self.suppression.submit_primary(&code)?;
            }
            PanelCommand::SubmitSecondary(code) => {
                self.suppression.submit_secondary(&code, clock, sink)?;
            }
            PanelCommand::CancelAuthorization => {
                self.suppression.cancel_authorization();
            }
            PanelCommand::FireActuator(kind) => {
                self.suppression.fire_actuator(kind, clock, sink)?;
            }
            PanelCommand::StartTest => {
                self.lighting.start_test(sink)?;
            }
            PanelCommand::LightingPowerOn => {
                self.lighting.power_on(sink)?;
            }
            PanelCommand::LightingPowerOff => {
                self.lighting.power_off(sink)?;
            }
            PanelCommand::InjectLightingFault => {
                self.lighting.inject_fault(sink);
            }
            PanelCommand::SetMainsLost(lost) => {
                self.lighting.set_mains_lost(lost);
            }
            PanelCommand::Tick(secs) => {
                self.tick(secs, sink);
            }
        }
        Ok(())
    }

    /// Drive both stages of the open authorization session in one call.
    pub fn complete_authorization(
        &mut self,
        primary: &str,
        secondary: &str,
        clock: &dyn TimeSource,
        sink: &mut impl EventSink,
    ) -> core::result::Result<(), crate::error::GateError> {
        self.suppression
            .complete_authorization(primary, secondary, clock, sink)
    }

    // ── Time ──────────────────────────────────────────────────

    /// Advance panel time by `elapsed_secs` whole seconds.
    ///
    /// Only the lighting subsystem evolves with time; suppression state
    /// changes are all command-driven.
    pub fn tick(&mut self, elapsed_secs: u32, sink: &mut impl EventSink) {
        self.lighting.tick(elapsed_secs, sink);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn suppression_status(&self) -> SuppressionStatus {
        self.suppression.status()
    }

    pub fn reserve_levels(&self) -> ReserveLevels {
        self.suppression.reserve_levels()
    }

    /// The suppression audit trail, newest entry first.
    pub fn audit_log(&self) -> &AuditLog {
        self.suppression.audit()
    }

    pub fn lighting_status(&self) -> LightingStatus {
        self.lighting.status()
    }

    /// Snapshot of the open authorization session, if any, with its stage
    /// and recorded attempt errors.
    pub fn authorization(&self) -> Option<AuthSession> {
        self.suppression.authorization()
    }
}
