//! Panel configuration parameters
//!
//! All tunable parameters for the InfernoShield control core.
//! Values are injected by the embedder at construction time; the control
//! logic never reads credentials or capacities from globals.

use serde::{Deserialize, Serialize};

/// Core panel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    // --- Reserves ---
    /// Water reserve capacity in liters
    pub water_capacity_liters: u32,
    /// Foam reserve capacity in liters
    pub foam_capacity_liters: u32,

    // --- Authorization ---
    /// Primary credential (password stage)
    pub primary_code: String,
    /// Secondary credential (one-time code stage)
    pub secondary_code: String,

    // --- Emergency lighting ---
    /// Battery drain while carrying the building load (percent per second)
    pub active_drain_per_sec: f32,
    /// Lowest charge the battery window is simulated down to (percent)
    pub active_floor_percent: f32,
    /// Battery recovery rate on restored mains (percent per second)
    pub recharge_per_sec: f32,
    /// One-time charge draw when a self-test starts (percent)
    pub test_drain_percent: f32,
    /// Self-test duration (seconds)
    pub test_duration_secs: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            // Reserves
            water_capacity_liters: 5000,
            foam_capacity_liters: 1000,

            // Authorization (factory defaults, replaced at deployment)
            primary_code: String::from("1234"),
            secondary_code: String::from("12345"),

            // Emergency lighting
            active_drain_per_sec: 1.0,
            active_floor_percent: 85.0,
            recharge_per_sec: 2.0,
            test_drain_percent: 2.0,
            test_duration_secs: 15, // self-test runtime
        }
    }
}
