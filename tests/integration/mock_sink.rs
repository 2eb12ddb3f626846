//! Mock event sink for integration tests.
//!
//! Records every emitted [`PanelEvent`] so tests can assert on the full
//! notification history without a real delivery channel. Time comes from
//! the library's own [`ManualClock`] adapter.

use infernoshield::app::events::PanelEvent;
use infernoshield::app::ports::EventSink;

pub use infernoshield::adapters::clock::ManualClock;

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<PanelEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded events matching `pred`.
    pub fn count(&self, pred: impl Fn(&PanelEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn contains(&self, event: &PanelEvent) -> bool {
        self.events.contains(event)
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &PanelEvent) {
        self.events.push(*event);
    }
}

/// A service clock reading 09:30:00.
pub fn morning_clock() -> ManualClock {
    ManualClock::at(9 * 3600 + 30 * 60)
}
