//! Suppression audit trail.
//!
//! Bounded, newest-first record of every state-changing suppression event.
//! Entries are stamped `HH:MM:SS` from the injected time source and held in
//! a fixed-capacity ring; the oldest entry is evicted when the ring fills.

use serde::{Deserialize, Serialize};

use crate::app::ports::TimeSource;

/// Ring capacity; the oldest entry is evicted beyond this.
pub const AUDIT_RING_SLOTS: usize = 256;

const MESSAGE_MAX: usize = 128;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: heapless::String<16>,
    pub message: heapless::String<MESSAGE_MAX>,
}

impl AuditEntry {
    pub fn new(seconds_of_day: u32, message: &str) -> Self {
        let mut ts = heapless::String::new();
        let h = seconds_of_day / 3600 % 24;
        let m = seconds_of_day / 60 % 60;
        let s = seconds_of_day % 60;
        let _ = core::fmt::Write::write_fmt(&mut ts, format_args!("{h:02}:{m:02}:{s:02}"));

        // Char-wise copy so over-long input truncates on a UTF-8 boundary.
        let mut msg = heapless::String::new();
        for ch in message.chars() {
            if msg.push(ch).is_err() {
                break;
            }
        }
        Self {
            timestamp: ts,
            message: msg,
        }
    }
}

/// In-memory ring of audit entries, newest first.
#[derive(Debug, Default, Clone)]
pub struct AuditLog {
    entries: heapless::Deque<AuditEntry, AUDIT_RING_SLOTS>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp `message` with the current time and prepend it, evicting the
    /// oldest entry if the ring is full.
    pub fn record(&mut self, clock: &dyn TimeSource, message: &str) {
        let entry = AuditEntry::new(clock.seconds_of_day(), message);
        if self.entries.is_full() {
            self.entries.pop_back();
        }
        let _ = self.entries.push_front(entry);
    }

    /// Entries ordered newest first.
    pub fn entries(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&AuditEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
