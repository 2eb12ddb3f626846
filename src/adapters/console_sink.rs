//! Console event sink for the panel simulator.
//!
//! Renders each [`PanelEvent`] as the one-line notification an operator
//! would see on the panel, prefixed with a severity tag. This is the
//! simulator's stand-in for the toast layer; delivery is fire-and-forget
//! like the real one.

use crate::app::events::PanelEvent;
use crate::app::ports::EventSink;

/// Adapter that prints every [`PanelEvent`] to stdout.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: &PanelEvent) {
        let (tag, line) = render(event);
        println!("  [{tag}] {line}");
    }
}

fn render(event: &PanelEvent) -> (&'static str, String) {
    match event {
        PanelEvent::SystemArmed => ("ok", "Suppression system armed.".into()),
        PanelEvent::SystemDisarmed => ("warn", "Suppression system disarmed.".into()),
        PanelEvent::PowerCut => ("warn", "Non-essential power cut.".into()),
        PanelEvent::PowerRestored => ("ok", "Non-essential power restored.".into()),
        PanelEvent::AutoPowerCut => (
            "warn",
            "Auto Power-Cut Protocol initiated due to suppression activation.".into(),
        ),
        PanelEvent::ActuatorFired {
            kind,
            pressure,
            water_liters,
            foam_liters,
        } => {
            let mut line = format!("{} discharged at {}.", kind.profile().label, pressure);
            if *water_liters > 0 {
                line.push_str(&format!(" {water_liters}L water used."));
            }
            if *foam_liters > 0 {
                line.push_str(&format!(" {foam_liters}L foam used."));
            }
            ("fire", line)
        }
        PanelEvent::ResourceExhausted { kind } => ("fail", format!("{kind} reserve is empty.")),
        PanelEvent::TestStarted { duration_secs } => (
            "test",
            format!("Lighting self-test started, {duration_secs}s runtime."),
        ),
        PanelEvent::TestCompleted => (
            "ok",
            "Lighting self-test completed. System fully operational.".into(),
        ),
        PanelEvent::TestBlocked { state } => (
            "fail",
            format!("Cannot start test while system is {}.", state.label_lower()),
        ),
        PanelEvent::LightingStateChanged { state } => {
            ("light", format!("Emergency lighting: {}", state.label()))
        }
    }
}
