//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PanelService (domain)
//! ```
//!
//! Driven adapters (event sinks, clocks) implement these traits. The
//! [`PanelService`](super::service::PanelService) takes them as parameters
//! at call sites, so the domain core never touches a wall clock or an
//! output channel directly and every path is testable with mocks.

use super::events::PanelEvent;

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → notifications)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`PanelEvent`]s through this port.
/// Adapters decide where they go (console, log, toast layer, bus).
/// Delivery is fire-and-forget; the core never retries.
pub trait EventSink {
    fn emit(&mut self, event: &PanelEvent);
}

// ───────────────────────────────────────────────────────────────
// Time source port (driven adapter: clock → domain)
// ───────────────────────────────────────────────────────────────

/// Wall-clock port for audit timestamps.
///
/// Only the time of day is needed; injecting it keeps audit output
/// deterministic under test.
pub trait TimeSource {
    /// Seconds since local midnight (0 – 86399).
    fn seconds_of_day(&self) -> u32;
}
