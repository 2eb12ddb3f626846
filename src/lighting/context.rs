//! Shared mutable context threaded through every lighting state handler.
//!
//! `LightingContext` is the single struct that state handlers read from and
//! write to. It holds the sampled mains signal, battery charge, timing
//! information, and configuration. Think of it as the "blackboard" in a
//! blackboard architecture: handlers decide transitions from it, and
//! [`super::panel::LightingPanel`] applies the charge rules to it.

use crate::config::PanelConfig;

/// The shared context passed to every state handler function.
pub struct LightingContext {
    // -- Timing --
    /// Ticks (seconds) elapsed since the current state was entered.
    pub ticks_in_state: u64,
    /// Monotonic total tick count.
    pub total_ticks: u64,

    // -- External signals --
    /// True while the building mains supply is reported lost.
    /// Written by `set_mains_lost`, sampled by state handlers each tick.
    pub mains_lost: bool,

    // -- Battery --
    /// Battery charge percentage (0 – 100).
    pub charge_percent: f32,

    // -- Configuration --
    /// Panel configuration (timing and rate parameters).
    pub config: PanelConfig,
}

impl LightingContext {
    /// Create a new context with the given configuration.
    /// The battery starts full and mains power is presumed present.
    pub fn new(config: PanelConfig) -> Self {
        Self {
            ticks_in_state: 0,
            total_ticks: 0,
            mains_lost: false,
            charge_percent: 100.0,
            config,
        }
    }

    /// Seconds elapsed since the current state was entered.
    pub fn secs_in_state(&self) -> u32 {
        // One tick is one second; saturate rather than wrap for display math.
        u32::try_from(self.ticks_in_state).unwrap_or(u32::MAX)
    }
}
