//! Suppression control state machine.
//!
//! [`SuppressionPanel`] owns the armed/power state, the consumable
//! reserves, the audit trail, and the authorization gate. Arm and power
//! changes are gated behind the two-factor protocol; actuator fires are
//! applied directly, subject to the current state and reserve levels.
//! Every state-changing outcome is written to the audit log and reported
//! through the event sink.

use core::fmt::Write as _;

use log::{info, warn};

use crate::app::events::PanelEvent;
use crate::app::ports::{EventSink, TimeSource};
use crate::audit::AuditLog;
use crate::auth::{AuthGate, AuthSession, PendingAction};
use crate::config::PanelConfig;
use crate::error::{FireError, GateError};
use crate::reserves::{ReserveKind, ReserveTracker};

// ───────────────────────────────────────────────────────────────
// Actuators
// ───────────────────────────────────────────────────────────────

/// Suppression actuators the panel can discharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorKind {
    WaterSprinklers,
    FoamConcentrate,
    CombinationGun,
}

/// Fixed discharge profile for one actuator.
#[derive(Debug, Clone, Copy)]
pub struct ActuatorProfile {
    pub label: &'static str,
    pub pressure: &'static str,
    pub water_liters: u32,
    pub foam_liters: u32,
}

impl ActuatorKind {
    pub const fn profile(self) -> ActuatorProfile {
        match self {
            Self::WaterSprinklers => ActuatorProfile {
                label: "Water Sprinklers",
                pressure: "150 PSI",
                water_liters: 500,
                foam_liters: 0,
            },
            Self::FoamConcentrate => ActuatorProfile {
                label: "Foam Concentrate",
                pressure: "200 PSI",
                water_liters: 0,
                foam_liters: 200,
            },
            Self::CombinationGun => ActuatorProfile {
                label: "Inferno Gun",
                pressure: "300 PSI",
                water_liters: 100,
                foam_liters: 100,
            },
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Snapshots
// ───────────────────────────────────────────────────────────────

/// Read-only snapshot of the suppression system state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuppressionStatus {
    pub armed: bool,
    pub power_on: bool,
}

/// Per-reserve reading for display.
#[derive(Debug, Clone, Copy)]
pub struct ReserveReading {
    pub percent_remaining: f32,
    pub liters_remaining: f32,
    pub capacity_liters: u32,
}

/// Both reserve readings.
#[derive(Debug, Clone, Copy)]
pub struct ReserveLevels {
    pub water: ReserveReading,
    pub foam: ReserveReading,
}

// ───────────────────────────────────────────────────────────────
// SuppressionPanel
// ───────────────────────────────────────────────────────────────

/// The suppression subsystem. Starts armed and powered.
pub struct SuppressionPanel {
    armed: bool,
    power_on: bool,
    reserves: ReserveTracker,
    audit: AuditLog,
    gate: AuthGate,
}

impl SuppressionPanel {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            armed: true,
            power_on: true,
            reserves: ReserveTracker::new(
                config.water_capacity_liters,
                config.foam_capacity_liters,
            ),
            audit: AuditLog::new(),
            gate: AuthGate::new(config.primary_code.clone(), config.secondary_code.clone()),
        }
    }

    // ── Gated state changes ───────────────────────────────────

    /// Open the authorization gate to arm or disarm the system.
    pub fn request_arm_toggle(&mut self, target: bool) -> Result<(), GateError> {
        self.gate.begin(PendingAction::ToggleArmed(target))
    }

    /// Open the authorization gate to restore or cut non-essential power.
    pub fn request_power_toggle(&mut self, target: bool) -> Result<(), GateError> {
        self.gate.begin(PendingAction::TogglePower(target))
    }

    /// Submit the primary credential for the open session.
    pub fn submit_primary(&mut self, attempt: &str) -> Result<(), GateError> {
        self.gate.submit_primary(attempt)
    }

    /// Submit the secondary code; on success the pending action is applied,
    /// audited, and reported.
    pub fn submit_secondary(
        &mut self,
        attempt: &str,
        clock: &dyn TimeSource,
        sink: &mut impl EventSink,
    ) -> Result<(), GateError> {
        let action = self.gate.submit_secondary(attempt)?;
        self.apply_action(action, clock, sink);
        Ok(())
    }

    /// Drive the open session through both stages in one call.
    pub fn complete_authorization(
        &mut self,
        primary: &str,
        secondary: &str,
        clock: &dyn TimeSource,
        sink: &mut impl EventSink,
    ) -> Result<(), GateError> {
        self.submit_primary(primary)?;
        self.submit_secondary(secondary, clock, sink)
    }

    /// Discard the open session and its pending action.
    pub fn cancel_authorization(&mut self) {
        self.gate.cancel();
    }

    // ── Actuator discharge ────────────────────────────────────

    /// Discharge one actuator.
    ///
    /// Policy order: armed check, power check, then both required reserves
    /// validated before either is drained — a refused fire leaves no
    /// partial drain behind. A successful discharge audits the usage,
    /// reports it, and triggers the automatic power cut.
    pub fn fire_actuator(
        &mut self,
        kind: ActuatorKind,
        clock: &dyn TimeSource,
        sink: &mut impl EventSink,
    ) -> Result<(), FireError> {
        if !self.armed {
            warn!("suppression: fire refused, system is disarmed");
            return Err(FireError::SystemDisarmed);
        }
        if !self.power_on {
            warn!("suppression: fire refused, power is cut");
            return Err(FireError::PowerOff);
        }

        let profile = kind.profile();

        if profile.water_liters > 0 && self.reserves.is_exhausted(ReserveKind::Water) {
            warn!("suppression: fire refused, water reserve empty");
            sink.emit(&PanelEvent::ResourceExhausted {
                kind: ReserveKind::Water,
            });
            return Err(FireError::ResourceExhausted(ReserveKind::Water));
        }
        if profile.foam_liters > 0 && self.reserves.is_exhausted(ReserveKind::Foam) {
            warn!("suppression: fire refused, foam reserve empty");
            sink.emit(&PanelEvent::ResourceExhausted {
                kind: ReserveKind::Foam,
            });
            return Err(FireError::ResourceExhausted(ReserveKind::Foam));
        }

        let mut message = format!("{} activated at {}.", profile.label, profile.pressure);
        if profile.water_liters > 0 {
            self.reserves.drain(ReserveKind::Water, profile.water_liters)?;
            let _ = write!(message, " {}L Water Used.", profile.water_liters);
        }
        if profile.foam_liters > 0 {
            self.reserves.drain(ReserveKind::Foam, profile.foam_liters)?;
            let _ = write!(message, " {}L Foam Used.", profile.foam_liters);
        }

        self.audit.record(clock, &message);
        info!("suppression: {message}");
        sink.emit(&PanelEvent::ActuatorFired {
            kind,
            pressure: profile.pressure,
            water_liters: profile.water_liters,
            foam_liters: profile.foam_liters,
        });

        // Automatic power cut: a successful discharge cuts non-essential
        // power without authorization.
        if self.power_on {
            self.power_on = false;
            self.audit.record(
                clock,
                "Auto Power-Cut Protocol initiated due to suppression activation.",
            );
            warn!("suppression: auto power-cut after discharge");
            sink.emit(&PanelEvent::AutoPowerCut);
        }

        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn status(&self) -> SuppressionStatus {
        SuppressionStatus {
            armed: self.armed,
            power_on: self.power_on,
        }
    }

    pub fn reserve_levels(&self) -> ReserveLevels {
        ReserveLevels {
            water: self.reading(ReserveKind::Water),
            foam: self.reading(ReserveKind::Foam),
        }
    }

    /// The audit trail, newest entry first.
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Snapshot of the open authorization session, if any.
    pub fn authorization(&self) -> Option<AuthSession> {
        self.gate.session().copied()
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_action(
        &mut self,
        action: PendingAction,
        clock: &dyn TimeSource,
        sink: &mut impl EventSink,
    ) {
        match action {
            PendingAction::ToggleArmed(target) => {
                self.armed = target;
                let message = if target {
                    "System has been activated"
                } else {
                    "System has been deactivated"
                };
                self.audit.record(clock, message);
                info!("suppression: {message}");
                sink.emit(&if target {
                    PanelEvent::SystemArmed
                } else {
                    PanelEvent::SystemDisarmed
                });
            }
            PendingAction::TogglePower(target) => {
                self.power_on = target;
                let message = if target {
                    "Non-essential power restored"
                } else {
                    "Non-essential power cut"
                };
                self.audit.record(clock, message);
                info!("suppression: {message}");
                sink.emit(&if target {
                    PanelEvent::PowerRestored
                } else {
                    PanelEvent::PowerCut
                });
            }
        }
    }

    fn reading(&self, kind: ReserveKind) -> ReserveReading {
        let r = self.reserves.reserve(kind);
        ReserveReading {
            percent_remaining: r.percent_remaining(),
            liters_remaining: r.liters_remaining(),
            capacity_liters: r.capacity_liters(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
