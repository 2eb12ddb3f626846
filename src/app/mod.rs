//! Application core — pure domain logic, zero I/O.
//!
//! This module carries the command/event boundary of the panel:
//! the command and event vocabularies, the port traits, and the
//! [`service::PanelService`] facade that routes commands into the
//! suppression and lighting state machines. All interaction with the
//! outside world happens through the **port traits** defined in
//! [`ports`], keeping this layer fully testable without a clock or an
//! output channel.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
