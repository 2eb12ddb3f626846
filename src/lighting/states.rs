//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers — no closures, no dynamic
//! dispatch, no heap. Handlers only decide transitions; battery charge
//! evolution is applied by the panel after the transition check.
//!
//! ```text
//!  CHARGED ──[mains lost]──▶ ACTIVE
//!     ▲                         │
//!     └─────[mains restored]────┘
//!
//!  CHARGED ──[start test]──▶ TESTING ──[test duration elapsed]──▶ CHARGED
//!  CHARGED ──[power off]──▶ OFF ──[power on]──▶ CHARGED
//!
//!  Any state ──[fault injected]──▶ FAULT   (no exit path)
//! ```
//!
//! Test start, manual power, and fault injection are command-driven
//! `force_transition` calls from the panel; only mains tracking and test
//! completion are decided here, per tick.

use super::context::LightingContext;
use super::{LightState, StateDescriptor};
use log::{info, warn};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table. Called once at startup.
pub fn build_state_table() -> [StateDescriptor; LightState::COUNT] {
    [
        // Index 0 — Charged
        StateDescriptor {
            id: LightState::Charged,
            name: "Charged",
            on_enter: Some(charged_enter),
            on_exit: None,
            on_update: charged_update,
        },
        // Index 1 — Active
        StateDescriptor {
            id: LightState::Active,
            name: "Active",
            on_enter: Some(active_enter),
            on_exit: Some(active_exit),
            on_update: active_update,
        },
        // Index 2 — Testing
        StateDescriptor {
            id: LightState::Testing,
            name: "Testing",
            on_enter: Some(testing_enter),
            on_exit: None,
            on_update: testing_update,
        },
        // Index 3 — Fault
        StateDescriptor {
            id: LightState::Fault,
            name: "Fault",
            on_enter: Some(fault_enter),
            on_exit: None,
            on_update: fault_update,
        },
        // Index 4 — Off
        StateDescriptor {
            id: LightState::Off,
            name: "Off",
            on_enter: Some(off_enter),
            on_exit: None,
            on_update: off_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  CHARGED state — standby on mains, battery topped up
// ═══════════════════════════════════════════════════════════════════════════

fn charged_enter(ctx: &mut LightingContext) {
    info!(
        "CHARGED: standby on mains, battery at {:.0}%",
        ctx.charge_percent
    );
}

fn charged_update(ctx: &mut LightingContext) -> Option<LightState> {
    // Trigger: building mains reported lost → carry the load.
    if ctx.mains_lost {
        return Some(LightState::Active);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  ACTIVE state — mains lost, battery carrying the emergency load
// ═══════════════════════════════════════════════════════════════════════════

fn active_enter(ctx: &mut LightingContext) {
    warn!(
        "ACTIVE: building power lost, battery at {:.0}% carrying the load",
        ctx.charge_percent
    );
}

fn active_exit(ctx: &mut LightingContext) {
    info!(
        "ACTIVE: mains restored after {}s on battery",
        ctx.secs_in_state()
    );
}

fn active_update(ctx: &mut LightingContext) -> Option<LightState> {
    if !ctx.mains_lost {
        return Some(LightState::Charged);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  TESTING state — timed self-test, returns to Charged on completion
// ═══════════════════════════════════════════════════════════════════════════

fn testing_enter(ctx: &mut LightingContext) {
    info!(
        "TESTING: self-test running for {}s",
        ctx.config.test_duration_secs
    );
}

fn testing_update(ctx: &mut LightingContext) -> Option<LightState> {
    // The mains signal is ignored while a test runs; only the timer moves
    // the machine out.
    if ctx.secs_in_state() >= ctx.config.test_duration_secs {
        info!("TESTING: self-test complete, system fully operational");
        return Some(LightState::Charged);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  FAULT state — latched until serviced, no exit path
// ═══════════════════════════════════════════════════════════════════════════

fn fault_enter(ctx: &mut LightingContext) {
    warn!(
        "FAULT: lighting system latched faulty, battery frozen at {:.0}%",
        ctx.charge_percent
    );
}

fn fault_update(_ctx: &mut LightingContext) -> Option<LightState> {
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  OFF state — manually deactivated, ignores external signals
// ═══════════════════════════════════════════════════════════════════════════

fn off_enter(_ctx: &mut LightingContext) {
    info!("OFF: system manually deactivated");
}

fn off_update(_ctx: &mut LightingContext) -> Option<LightState> {
    None
}
