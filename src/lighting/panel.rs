//! Emergency lighting panel — command surface over the state machine.
//!
//! [`LightingPanel`] owns the FSM engine and its context, exposes the
//! operator commands (self-test, manual power, mains signal, fault
//! injection), and runs the per-second tick loop. Battery charge rules are
//! applied here, after each second's transition check, so a second in
//! which the machine moves already follows the new state's rule:
//!
//! - `Active`: −`active_drain_per_sec` points, floored at the active floor
//! - `Charged` below full: +`recharge_per_sec` points, capped at 100
//! - `Testing`, `Fault`, `Off`: charge frozen (beyond the one-time test draw)

use log::info;

use crate::app::events::PanelEvent;
use crate::app::ports::EventSink;
use crate::config::PanelConfig;
use crate::error::{PowerError, TestError};

use super::context::LightingContext;
use super::states::build_state_table;
use super::{Fsm, LightState};

/// Reported link status of the lighting panel.
///
/// There is no link-monitoring path in this core; the field is part of the
/// status contract and defaults to `Online`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Online,
    Offline,
}

/// Read-only snapshot of the lighting subsystem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingStatus {
    pub state: LightState,
    pub label: &'static str,
    pub charge_percent: f32,
    pub connectivity: Connectivity,
}

/// The emergency lighting subsystem.
pub struct LightingPanel {
    fsm: Fsm,
    ctx: LightingContext,
    connectivity: Connectivity,
}

impl LightingPanel {
    /// Construct the panel in charged standby with a full battery.
    pub fn new(config: PanelConfig) -> Self {
        let mut ctx = LightingContext::new(config);
        let mut fsm = Fsm::new(build_state_table(), LightState::Charged);
        fsm.start(&mut ctx);
        Self {
            fsm,
            ctx,
            connectivity: Connectivity::Online,
        }
    }

    // ── Commands ──────────────────────────────────────────────

    /// Record the building mains supply as lost or restored.
    ///
    /// Only the signal is stored here; the `Charged`/`Active` handlers
    /// sample it on the next tick.
    pub fn set_mains_lost(&mut self, lost: bool) {
        if self.ctx.mains_lost != lost {
            info!(
                "lighting: mains reported {}",
                if lost { "lost" } else { "restored" }
            );
        }
        self.ctx.mains_lost = lost;
    }

    /// Start the timed self-test.
    ///
    /// Refused from any state but `Charged`. On success the battery takes
    /// the one-time test draw and the machine runs `Testing` until the
    /// configured duration elapses.
    pub fn start_test(&mut self, sink: &mut impl EventSink) -> Result<(), TestError> {
        let state = self.fsm.current_state();
        if state != LightState::Charged {
            sink.emit(&PanelEvent::TestBlocked { state });
            return Err(TestError::NotCharged(state));
        }

        self.ctx.charge_percent =
            (self.ctx.charge_percent - self.ctx.config.test_drain_percent).max(0.0);
        self.fsm.force_transition(LightState::Testing, &mut self.ctx);
        sink.emit(&PanelEvent::TestStarted {
            duration_secs: self.ctx.config.test_duration_secs,
        });
        sink.emit(&PanelEvent::LightingStateChanged {
            state: LightState::Testing,
        });
        Ok(())
    }

    /// Manually power the lighting system off. Only allowed from charged
    /// standby.
    pub fn power_off(&mut self, sink: &mut impl EventSink) -> Result<(), PowerError> {
        let state = self.fsm.current_state();
        if state != LightState::Charged {
            return Err(PowerError::NotCharged(state));
        }
        self.fsm.force_transition(LightState::Off, &mut self.ctx);
        sink.emit(&PanelEvent::LightingStateChanged {
            state: LightState::Off,
        });
        Ok(())
    }

    /// Power the lighting system back on into charged standby.
    pub fn power_on(&mut self, sink: &mut impl EventSink) -> Result<(), PowerError> {
        let state = self.fsm.current_state();
        if state != LightState::Off {
            return Err(PowerError::NotOff(state));
        }
        self.fsm.force_transition(LightState::Charged, &mut self.ctx);
        sink.emit(&PanelEvent::LightingStateChanged {
            state: LightState::Charged,
        });
        Ok(())
    }

    /// Latch the machine into its fault state. Service hook; there is no
    /// command path back out.
    pub fn inject_fault(&mut self, sink: &mut impl EventSink) {
        if self.fsm.current_state() == LightState::Fault {
            return;
        }
        self.fsm.force_transition(LightState::Fault, &mut self.ctx);
        sink.emit(&PanelEvent::LightingStateChanged {
            state: LightState::Fault,
        });
    }

    // ── Time ──────────────────────────────────────────────────

    /// Advance panel time by `elapsed_secs` whole seconds.
    ///
    /// Each second runs one FSM tick, then the charge rule for the state
    /// the machine ended the second in. Transitions the ticks produce are
    /// reported through the sink.
    pub fn tick(&mut self, elapsed_secs: u32, sink: &mut impl EventSink) {
        for _ in 0..elapsed_secs {
            let before = self.fsm.current_state();
            self.fsm.tick(&mut self.ctx);
            let after = self.fsm.current_state();

            self.apply_charge_rule(after);

            if after != before {
                if before == LightState::Testing && after == LightState::Charged {
                    sink.emit(&PanelEvent::TestCompleted);
                }
                sink.emit(&PanelEvent::LightingStateChanged { state: after });
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn status(&self) -> LightingStatus {
        let state = self.fsm.current_state();
        LightingStatus {
            state,
            label: state.label(),
            charge_percent: self.ctx.charge_percent,
            connectivity: self.connectivity,
        }
    }

    pub fn state(&self) -> LightState {
        self.fsm.current_state()
    }

    pub fn charge_percent(&self) -> f32 {
        self.ctx.charge_percent
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_charge_rule(&mut self, state: LightState) {
        let cfg = &self.ctx.config;
        match state {
            LightState::Active => {
                self.ctx.charge_percent = (self.ctx.charge_percent - cfg.active_drain_per_sec)
                    .max(cfg.active_floor_percent);
            }
            LightState::Charged if self.ctx.charge_percent < 100.0 => {
                self.ctx.charge_percent =
                    (self.ctx.charge_percent + cfg.recharge_per_sec).min(100.0);
            }
            _ => {}
        }
    }
}
