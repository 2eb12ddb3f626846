//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements | Connects to               |
//! |----------------|------------|---------------------------|
//! | `console_sink` | EventSink  | Simulator stdout          |
//! | `log_sink`     | EventSink  | `log` crate facade        |
//! | `clock`        | TimeSource | Wall clock / manual clock |
//!
//! The domain core never imports from here; adapters are wired up by the
//! composition root (the simulator binary or an embedding application).

pub mod clock;
pub mod console_sink;
pub mod log_sink;
