//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured panel events to the
//! `log` facade, one pipe-separated line per event. An embedding
//! application that installs its own logger gets the panel's event
//! stream for free; a building-bus adapter would implement the same
//! trait.

use log::info;

use crate::app::events::PanelEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`PanelEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &PanelEvent) {
        match event {
            PanelEvent::SystemArmed => info!("SUPPR | system armed"),
            PanelEvent::SystemDisarmed => info!("SUPPR | system disarmed"),
            PanelEvent::PowerCut => info!("SUPPR | power cut (manual)"),
            PanelEvent::PowerRestored => info!("SUPPR | power restored"),
            PanelEvent::AutoPowerCut => info!("SUPPR | power cut (auto, post-discharge)"),
            PanelEvent::ActuatorFired {
                kind,
                pressure,
                water_liters,
                foam_liters,
            } => {
                info!(
                    "FIRE  | {:?} at {} | water={}L foam={}L",
                    kind, pressure, water_liters, foam_liters
                );
            }
            PanelEvent::ResourceExhausted { kind } => {
                info!("FIRE  | refused, {kind} reserve empty");
            }
            PanelEvent::TestStarted { duration_secs } => {
                info!("LIGHT | self-test started ({duration_secs}s)");
            }
            PanelEvent::TestCompleted => info!("LIGHT | self-test completed"),
            PanelEvent::TestBlocked { state } => {
                info!("LIGHT | self-test blocked, state={state:?}");
            }
            PanelEvent::LightingStateChanged { state } => {
                info!("LIGHT | state -> {:?} ({})", state, state.label());
            }
        }
    }
}
