//! Integration tests for the suppression side: fire policy chain,
//! reserve accounting, audit trail, auto power-cut.

use infernoshield::app::commands::PanelCommand;
use infernoshield::app::events::PanelEvent;
use infernoshield::app::service::PanelService;
use infernoshield::config::PanelConfig;
use infernoshield::error::{Error, FireError};
use infernoshield::reserves::ReserveKind;
use infernoshield::suppression::ActuatorKind;

use crate::mock_sink::{morning_clock, ManualClock, RecordingSink};

fn make_service() -> PanelService {
    PanelService::new(PanelConfig::default())
}

fn repower(service: &mut PanelService, clock: &ManualClock, sink: &mut RecordingSink) {
    service
        .handle_command(PanelCommand::RequestPowerToggle(true), clock, sink)
        .unwrap();
    service
        .complete_authorization("1234", "12345", clock, sink)
        .unwrap();
}

#[test]
fn fire_chain_checks_arm_before_power_before_reserves() {
    let mut service = make_service();
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    // Cut power and disarm; the disarm refusal must win.
    service
        .handle_command(PanelCommand::RequestPowerToggle(false), &clock, &mut sink)
        .unwrap();
    service
        .complete_authorization("1234", "12345", &clock, &mut sink)
        .unwrap();
    service
        .handle_command(PanelCommand::RequestArmToggle(false), &clock, &mut sink)
        .unwrap();
    service
        .complete_authorization("1234", "12345", &clock, &mut sink)
        .unwrap();

    let err = service
        .handle_command(
            PanelCommand::FireActuator(ActuatorKind::WaterSprinklers),
            &clock,
            &mut sink,
        )
        .unwrap_err();
    assert_eq!(err, Error::Fire(FireError::SystemDisarmed));

    // Re-arm; now the power refusal surfaces.
    service
        .handle_command(PanelCommand::RequestArmToggle(true), &clock, &mut sink)
        .unwrap();
    service
        .complete_authorization("1234", "12345", &clock, &mut sink)
        .unwrap();
    let err = service
        .handle_command(
            PanelCommand::FireActuator(ActuatorKind::WaterSprinklers),
            &clock,
            &mut sink,
        )
        .unwrap_err();
    assert_eq!(err, Error::Fire(FireError::PowerOff));

    // Neither refusal drained anything.
    let levels = service.reserve_levels();
    assert!((levels.water.percent_remaining - 100.0).abs() < f32::EPSILON);
    assert!((levels.foam.percent_remaining - 100.0).abs() < f32::EPSILON);
}

#[test]
fn each_actuator_drains_its_profile() {
    let mut service = make_service();
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    service
        .handle_command(
            PanelCommand::FireActuator(ActuatorKind::WaterSprinklers),
            &clock,
            &mut sink,
        )
        .unwrap();
    repower(&mut service, &clock, &mut sink);
    service
        .handle_command(
            PanelCommand::FireActuator(ActuatorKind::FoamConcentrate),
            &clock,
            &mut sink,
        )
        .unwrap();
    repower(&mut service, &clock, &mut sink);
    service
        .handle_command(
            PanelCommand::FireActuator(ActuatorKind::CombinationGun),
            &clock,
            &mut sink,
        )
        .unwrap();

    let levels = service.reserve_levels();
    // Water: 5000 − 500 − 100 = 4400 L → 88%; foam: 1000 − 200 − 100 = 700 L → 70%.
    assert!((levels.water.percent_remaining - 88.0).abs() < 0.01);
    assert!((levels.foam.percent_remaining - 70.0).abs() < 0.01);
    assert!((levels.water.liters_remaining - 4400.0).abs() < 0.5);
    assert!((levels.foam.liters_remaining - 700.0).abs() < 0.5);
}

#[test]
fn audit_trail_reads_newest_first_with_timestamps() {
    let mut service = make_service();
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    service
        .handle_command(
            PanelCommand::FireActuator(ActuatorKind::FoamConcentrate),
            &clock,
            &mut sink,
        )
        .unwrap();
    clock.advance(90);
    repower(&mut service, &clock, &mut sink);

    let entries: Vec<(&str, &str)> = service
        .audit_log()
        .entries()
        .map(|e| (e.timestamp.as_str(), e.message.as_str()))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("09:31:30", "Non-essential power restored"),
            (
                "09:30:00",
                "Auto Power-Cut Protocol initiated due to suppression activation."
            ),
            ("09:30:00", "Foam Concentrate activated at 200 PSI. 200L Foam Used."),
        ]
    );
}

#[test]
fn auto_power_cut_fires_exactly_once_per_discharge() {
    let mut service = make_service();
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    service
        .handle_command(
            PanelCommand::FireActuator(ActuatorKind::CombinationGun),
            &clock,
            &mut sink,
        )
        .unwrap();

    assert!(!service.suppression_status().power_on);
    assert_eq!(
        sink.count(|e| matches!(e, PanelEvent::AutoPowerCut)),
        1
    );
    // Still armed: the cut touches power only.
    assert!(service.suppression_status().armed);
}

#[test]
fn exhausted_foam_blocks_combo_without_draining_water() {
    let mut service = make_service();
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    // Five foam shots of 200 L empty the tank.
    for shot in 0..5 {
        if shot > 0 {
            repower(&mut service, &clock, &mut sink);
        }
        service
            .handle_command(
                PanelCommand::FireActuator(ActuatorKind::FoamConcentrate),
                &clock,
                &mut sink,
            )
            .unwrap();
    }
    assert_eq!(service.reserve_levels().foam.percent_remaining, 0.0);

    repower(&mut service, &clock, &mut sink);
    let water_before = service.reserve_levels().water.percent_remaining;
    let err = service
        .handle_command(
            PanelCommand::FireActuator(ActuatorKind::CombinationGun),
            &clock,
            &mut sink,
        )
        .unwrap_err();
    assert_eq!(
        err,
        Error::Fire(FireError::ResourceExhausted(ReserveKind::Foam))
    );
    assert!(
        (service.reserve_levels().water.percent_remaining - water_before).abs() < f32::EPSILON,
        "refused fire must not leave a partial drain"
    );
    // Power survives the refusal; only successful discharges cut it.
    assert!(service.suppression_status().power_on);
}

#[test]
fn water_only_actuator_ignores_an_empty_foam_tank() {
    let mut service = make_service();
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    for shot in 0..5 {
        if shot > 0 {
            repower(&mut service, &clock, &mut sink);
        }
        service
            .handle_command(
                PanelCommand::FireActuator(ActuatorKind::FoamConcentrate),
                &clock,
                &mut sink,
            )
            .unwrap();
    }
    repower(&mut service, &clock, &mut sink);

    // Sprinklers need no foam, so the empty foam tank is irrelevant.
    service
        .handle_command(
            PanelCommand::FireActuator(ActuatorKind::WaterSprinklers),
            &clock,
            &mut sink,
        )
        .unwrap();
    assert!((service.reserve_levels().water.percent_remaining - 90.0).abs() < f32::EPSILON);
}
