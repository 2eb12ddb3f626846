//! Fuzz target: authorization gate commit protocol
//!
//! Drives arbitrary begin / submit / cancel sequences with arbitrary
//! byte-string credentials and verifies:
//! - No panics under arbitrary (including non-UTF-8-shaped) inputs
//! - The gate never hands back a pending action unless the primary stage
//!   passed earlier in the same session
//! - A committed or cancelled session never lingers
//!
//! cargo fuzz run fuzz_auth_gate

#![no_main]

use infernoshield::auth::{AuthGate, PendingAction};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let mut gate = AuthGate::new(String::from("pw"), String::from("otp"));
    let mut primary_passed = false;

    // Each input byte selects an operation; odd bytes pick the matching
    // credential so commits are actually reachable.
    for chunk in data.chunks(2) {
        let op = chunk[0] % 4;
        let correct = chunk.get(1).is_some_and(|b| b % 2 == 1);
        match op {
            0 => {
                if gate.begin(PendingAction::ToggleArmed(correct)).is_ok() {
                    primary_passed = false;
                }
            }
            1 => {
                let attempt = if correct { "pw" } else { "nope" };
                if gate.submit_primary(attempt).is_ok() {
                    primary_passed = true;
                }
            }
            2 => {
                let attempt = if correct { "otp" } else { "nope" };
                if gate.submit_secondary(attempt).is_ok() {
                    assert!(primary_passed, "commit without a passed primary stage");
                    assert!(!gate.is_open(), "session survived its commit");
                    primary_passed = false;
                }
            }
            _ => {
                gate.cancel();
                assert!(!gate.is_open());
                primary_passed = false;
            }
        }
    }
});
