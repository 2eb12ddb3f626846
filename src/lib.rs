//! InfernoShield panel control library.
//!
//! The control core of a fire-suppression and emergency-lighting panel,
//! independent of any display. Two state machines live here: the
//! suppression panel (armed/power state, gated behind two-factor
//! authorization, with consumable reserve accounting and an audit trail)
//! and the emergency lighting panel (battery-backed, time-stepped).
//! Everything is pure logic behind the [`app::service::PanelService`]
//! facade; clocks and notification delivery are injected through the
//! port traits in [`app::ports`].

#![deny(unused_must_use)]

pub mod app;
pub mod audit;
pub mod auth;
pub mod config;
pub mod error;
pub mod lighting;
pub mod reserves;
pub mod suppression;

pub mod adapters;
