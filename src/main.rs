//! InfernoShield Panel Simulator — Main Entry Point
//!
//! Hexagonal architecture: the pure control core behind a console REPL.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  stdin REPL        ConsoleSink       WallClock                 │
//! │  (commands in)     (EventSink)       (TimeSource)              │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            PanelService (pure logic)                   │    │
//! │  │  Suppression · Auth Gate · Reserves · Lighting         │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::io::{self, BufRead, Write};

use anyhow::Result;

use infernoshield::adapters::clock::WallClock;
use infernoshield::adapters::console_sink::ConsoleSink;
use infernoshield::app::commands::PanelCommand;
use infernoshield::app::service::PanelService;
use infernoshield::auth::GateStage;
use infernoshield::config::PanelConfig;
use infernoshield::suppression::ActuatorKind;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Composition root ───────────────────────────────────
    let config = PanelConfig::default();
    let mut service = PanelService::new(config);
    let clock = WallClock::new();
    let mut sink = ConsoleSink::new();

    // ── 2. Banner ─────────────────────────────────────────────
    println!("╔══════════════════════════════════════╗");
    println!("║  InfernoShield v{}                ║", env!("CARGO_PKG_VERSION"));
    println!("╚══════════════════════════════════════╝");
    println!("Type 'help' for commands.\n");

    // ── 3. REPL ───────────────────────────────────────────────
    run_repl(&mut service, &clock, &mut sink)
}

fn run_repl(service: &mut PanelService, clock: &WallClock, sink: &mut ConsoleSink) -> Result<()> {
    let stdin = io::stdin();
    loop {
        print!("panel> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(()); // EOF
        }
        let words: Vec<&str> = line.split_whitespace().collect();

        let cmd = match parse(&words) {
            Ok(Some(Action::Command(cmd))) => cmd,
            Ok(Some(Action::Status)) => {
                print_status(service);
                continue;
            }
            Ok(Some(Action::Audit)) => {
                print_audit(service);
                continue;
            }
            Ok(Some(Action::Help)) => {
                print_help();
                continue;
            }
            Ok(Some(Action::Quit)) => return Ok(()),
            Ok(None) => continue, // blank line
            Err(msg) => {
                println!("  {msg}");
                continue;
            }
        };

        if let Err(e) = service.handle_command(cmd, clock, sink) {
            println!("  [fail] {e}");
        } else if let Some(session) = service.authorization() {
            // Prompt the operator for the stage the gate is now waiting on.
            match session.stage {
                GateStage::AwaitingPrimary => println!("  Enter password: code <password>"),
                GateStage::AwaitingSecondary => println!("  Enter OTP: otp <code>"),
            }
        }
    }
}

// ── Command parsing ───────────────────────────────────────────

enum Action {
    Command(PanelCommand),
    Status,
    Audit,
    Help,
    Quit,
}

fn parse(words: &[&str]) -> Result<Option<Action>, String> {
    let cmd = match words {
        [] => return Ok(None),
        ["help"] => Action::Help,
        ["quit" | "exit"] => Action::Quit,
        ["status"] => Action::Status,
        ["audit"] => Action::Audit,
        ["arm", t @ ("on" | "off")] => {
            Action::Command(PanelCommand::RequestArmToggle(*t == "on"))
        }
        ["power", t @ ("on" | "off")] => {
            Action::Command(PanelCommand::RequestPowerToggle(*t == "on"))
        }
        ["code", secret] => Action::Command(PanelCommand::SubmitPrimary((*secret).to_string())),
        ["otp", code] => Action::Command(PanelCommand::SubmitSecondary((*code).to_string())),
        ["cancel"] => Action::Command(PanelCommand::CancelAuthorization),
        ["fire", "water"] => Action::Command(PanelCommand::FireActuator(
            ActuatorKind::WaterSprinklers,
        )),
        ["fire", "foam"] => Action::Command(PanelCommand::FireActuator(
            ActuatorKind::FoamConcentrate,
        )),
        ["fire", "combo"] => {
            Action::Command(PanelCommand::FireActuator(ActuatorKind::CombinationGun))
        }
        ["test"] => Action::Command(PanelCommand::StartTest),
        ["light", "on"] => Action::Command(PanelCommand::LightingPowerOn),
        ["light", "off"] => Action::Command(PanelCommand::LightingPowerOff),
        ["fault"] => Action::Command(PanelCommand::InjectLightingFault),
        ["mains", "lost"] => Action::Command(PanelCommand::SetMainsLost(true)),
        ["mains", "ok"] => Action::Command(PanelCommand::SetMainsLost(false)),
        ["tick", n] => {
            let secs: u32 = n.parse().map_err(|_| format!("not a second count: {n}"))?;
            Action::Command(PanelCommand::Tick(secs))
        }
        _ => return Err(format!("unknown command: {}", words.join(" "))),
    };
    Ok(Some(cmd))
}

// ── Display helpers ───────────────────────────────────────────

fn print_status(service: &PanelService) {
    let s = service.suppression_status();
    let r = service.reserve_levels();
    let l = service.lighting_status();

    println!("  ── Suppression ──");
    println!(
        "  armed: {}   power: {}",
        if s.armed { "YES" } else { "no" },
        if s.power_on { "ON" } else { "off" }
    );
    println!(
        "  water: {:5.1}% ({:.0}L of {}L)",
        r.water.percent_remaining, r.water.liters_remaining, r.water.capacity_liters
    );
    println!(
        "  foam:  {:5.1}% ({:.0}L of {}L)",
        r.foam.percent_remaining, r.foam.liters_remaining, r.foam.capacity_liters
    );
    println!("  ── Emergency lighting ──");
    println!(
        "  {} | battery {:.0}% | {:?}",
        l.label, l.charge_percent, l.connectivity
    );
}

fn print_audit(service: &PanelService) {
    let log = service.audit_log();
    if log.is_empty() {
        println!("  (audit log is empty)");
        return;
    }
    for entry in log.entries() {
        println!("  {}  {}", entry.timestamp, entry.message);
    }
}

fn print_help() {
    println!("  status                 show panel state and reserve levels");
    println!("  audit                  show the audit trail, newest first");
    println!("  arm on|off             request arm change (needs authorization)");
    println!("  power on|off           request power change (needs authorization)");
    println!("  code <password>        submit the primary credential");
    println!("  otp <code>             submit the secondary one-time code");
    println!("  cancel                 abort the open authorization");
    println!("  fire water|foam|combo  discharge an actuator");
    println!("  test                   start the lighting self-test");
    println!("  light on|off           lighting manual power");
    println!("  mains lost|ok          simulate the building mains signal");
    println!("  fault                  latch the lighting fault state");
    println!("  tick <secs>            advance panel time");
    println!("  quit                   leave the simulator");
}
