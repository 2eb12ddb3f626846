//! Emergency lighting state machine.
//!
//! Function-pointer FSM:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  StateTable                                              │
//! │  ┌─────────┬───────────┬──────────┬───────────────────┐  │
//! │  │ LightState│ on_enter │ on_exit  │ on_update         │  │
//! │  ├─────────┼───────────┼──────────┼───────────────────┤  │
//! │  │ Charged  │ fn(ctx)  │ fn(ctx)  │ fn(ctx)->Option<> │  │
//! │  │ Active   │ fn(ctx)  │ fn(ctx)  │ fn(ctx)->Option<> │  │
//! │  │ Testing  │ fn(ctx)  │ fn(ctx)  │ fn(ctx)->Option<> │  │
//! │  │ Fault    │ fn(ctx)  │ fn(ctx)  │ fn(ctx)->Option<> │  │
//! │  │ Off      │ fn(ctx)  │ fn(ctx)  │ fn(ctx)->Option<> │  │
//! │  └─────────┴───────────┴──────────┴───────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! One tick is one second of panel time. Each tick the engine calls
//! `on_update` for the **current** state; if it returns `Some(next_id)` the
//! engine runs `on_exit` for the current state, then `on_enter` for the
//! next, and updates the current pointer. Handlers receive
//! `&mut LightingContext`, which holds the mains signal, battery charge,
//! configuration, and timing. Battery charge evolution is applied by
//! [`panel::LightingPanel`] after the transition check each second, so the
//! second in which a transition lands already follows the new state's rule.

pub mod context;
pub mod panel;
pub mod states;

use context::LightingContext;
use core::fmt;
use log::info;

pub use panel::{Connectivity, LightingPanel, LightingStatus};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all emergency-lighting states.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LightState {
    Charged = 0,
    Active = 1,
    Testing = 2,
    Fault = 3,
    Off = 4,
}

impl LightState {
    /// Total number of states — used to size the table array.
    pub const COUNT: usize = 5;

    /// Convert a `usize` index back to `LightState`. Panics on out-of-range
    /// in debug builds; returns `Fault` in release (safe fallback).
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Charged,
            1 => Self::Active,
            2 => Self::Testing,
            3 => Self::Fault,
            4 => Self::Off,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Fault
            }
        }
    }

    /// Operator-facing status label, as shown on the panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Charged => "Fully Charged & Ready",
            Self::Active => "Active - Building Power Lost",
            Self::Testing => "System Self-Test in Progress...",
            Self::Fault => "System Fault Detected",
            Self::Off => "System Manually Off",
        }
    }

    /// Lowercase label, used in refusal reasons.
    pub fn label_lower(self) -> &'static str {
        match self {
            Self::Charged => "fully charged & ready",
            Self::Active => "active - building power lost",
            Self::Testing => "system self-test in progress...",
            Self::Fault => "system fault detected",
            Self::Off => "system manually off",
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
/// These run exactly once on each state transition.
pub type StateActionFn = fn(&mut LightingContext);

/// Signature for the per-tick update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&mut LightingContext) -> Option<LightState>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single lighting state.
/// Stored in a fixed-size array — no heap, no `dyn`.
pub struct StateDescriptor {
    pub id: LightState,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The lighting state machine engine.
///
/// Owns the state table (array of [`StateDescriptor`]); the mutable
/// [`LightingContext`] is threaded through every handler call.
pub struct Fsm {
    /// Fixed-size table indexed by `LightState as usize`.
    table: [StateDescriptor; LightState::COUNT],
    /// Index of the currently active state.
    current: usize,
    /// Monotonically increasing tick counter.
    tick_count: u64,
    /// Tick at which the current state was entered.
    state_entry_tick: u64,
}

impl Fsm {
    /// Construct a new FSM with the given state table, starting in `initial`.
    pub fn new(table: [StateDescriptor; LightState::COUNT], initial: LightState) -> Self {
        Self {
            table,
            current: initial as usize,
            tick_count: 0,
            state_entry_tick: 0,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call once after construction, before the first `tick()`.
    pub fn start(&mut self, ctx: &mut LightingContext) {
        info!("lighting: starting in state {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Advance the FSM by one tick (one second).
    ///
    /// 1. Call `on_update` for the current state.
    /// 2. If it returns `Some(next)`, execute the transition:
    ///    `on_exit(current)` → update pointer → `on_enter(next)`.
    pub fn tick(&mut self, ctx: &mut LightingContext) {
        self.tick_count += 1;
        ctx.ticks_in_state = self.tick_count - self.state_entry_tick;
        ctx.total_ticks = self.tick_count;

        let next = (self.table[self.current].on_update)(ctx);

        if let Some(next_id) = next {
            self.transition(next_id, ctx);
        }
    }

    /// Force an immediate transition (used by panel commands — test start,
    /// manual power, fault injection — regardless of what `on_update` would
    /// return).
    pub fn force_transition(&mut self, next: LightState, ctx: &mut LightingContext) {
        if next as usize != self.current {
            self.transition(next, ctx);
        }
    }

    /// The current state's identity.
    pub fn current_state(&self) -> LightState {
        LightState::from_index(self.current)
    }

    /// How many ticks the FSM has been in the current state.
    pub fn ticks_in_current_state(&self) -> u64 {
        self.tick_count - self.state_entry_tick
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: LightState, ctx: &mut LightingContext) {
        let next_idx = next_id as usize;

        info!(
            "lighting: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        // Exit current state
        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        // Update pointer and timing
        self.current = next_idx;
        self.state_entry_tick = self.tick_count;
        ctx.ticks_in_state = 0;

        // Enter new state
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
