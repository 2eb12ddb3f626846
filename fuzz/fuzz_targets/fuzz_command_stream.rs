//! Fuzz target: full service facade under arbitrary command streams
//!
//! Decodes each input byte into a panel command and feeds the stream to a
//! live [`PanelService`], verifying after every command:
//! - No panics; refusals come back as typed errors
//! - Reserve percentages stay within [0,100]
//! - Lighting charge stays within [0,100]
//!
//! cargo fuzz run fuzz_command_stream

#![no_main]

use infernoshield::adapters::clock::ManualClock;
use infernoshield::app::commands::PanelCommand;
use infernoshield::app::events::PanelEvent;
use infernoshield::app::ports::EventSink;
use infernoshield::app::service::PanelService;
use infernoshield::config::PanelConfig;
use infernoshield::suppression::ActuatorKind;
use libfuzzer_sys::fuzz_target;

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &PanelEvent) {}
}

fn decode(byte: u8) -> PanelCommand {
    match byte % 14 {
        0 => PanelCommand::RequestArmToggle(byte & 0x80 != 0),
        1 => PanelCommand::RequestPowerToggle(byte & 0x80 != 0),
        2 => PanelCommand::SubmitPrimary(String::from("1234")),
        3 => PanelCommand::SubmitPrimary(String::from("wrong")),
        4 => PanelCommand::SubmitSecondary(String::from("12345")),
        5 => PanelCommand::SubmitSecondary(String::from("wrong")),
        6 => PanelCommand::CancelAuthorization,
        7 => PanelCommand::FireActuator(ActuatorKind::WaterSprinklers),
        8 => PanelCommand::FireActuator(ActuatorKind::FoamConcentrate),
        9 => PanelCommand::FireActuator(ActuatorKind::CombinationGun),
        10 => PanelCommand::StartTest,
        11 => PanelCommand::LightingPowerOn,
        12 => PanelCommand::LightingPowerOff,
        _ => {
            if byte & 0x80 == 0 {
                PanelCommand::SetMainsLost(byte & 0x40 != 0)
            } else {
                PanelCommand::Tick(u32::from(byte & 0x3f))
            }
        }
    }
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut service = PanelService::new(PanelConfig::default());
    let clock = ManualClock::at(0);
    let mut sink = NullSink;

    for &byte in data {
        let _ = service.handle_command(decode(byte), &clock, &mut sink);
        clock.advance(1);

        let levels = service.reserve_levels();
        assert!((0.0..=100.0).contains(&levels.water.percent_remaining));
        assert!((0.0..=100.0).contains(&levels.foam.percent_remaining));
        let charge = service.lighting_status().charge_percent;
        assert!((0.0..=100.0).contains(&charge));
    }
});
