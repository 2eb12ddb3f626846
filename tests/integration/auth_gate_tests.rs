//! Integration tests for the authorization gate driven through the
//! service facade: session lifecycle, retries, ordering, cancellation.

use infernoshield::app::commands::PanelCommand;
use infernoshield::app::service::PanelService;
use infernoshield::auth::{GateStage, PendingAction};
use infernoshield::config::PanelConfig;
use infernoshield::error::{Error, GateError};

use crate::mock_sink::{morning_clock, RecordingSink};

fn make_service() -> PanelService {
    PanelService::new(PanelConfig::default())
}

#[test]
fn no_session_refuses_both_factors() {
    let mut service = make_service();
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    let err = service
        .handle_command(
            PanelCommand::SubmitPrimary(String::from("1234")),
            &clock,
            &mut sink,
        )
        .unwrap_err();
    assert_eq!(err, Error::Gate(GateError::NoSession));

    let err = service
        .handle_command(
            PanelCommand::SubmitSecondary(String::from("12345")),
            &clock,
            &mut sink,
        )
        .unwrap_err();
    assert_eq!(err, Error::Gate(GateError::NoSession));
}

#[test]
fn secondary_before_primary_is_out_of_order() {
    let mut service = make_service();
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    service
        .handle_command(PanelCommand::RequestArmToggle(false), &clock, &mut sink)
        .unwrap();

    let err = service
        .handle_command(
            PanelCommand::SubmitSecondary(String::from("12345")),
            &clock,
            &mut sink,
        )
        .unwrap_err();
    assert_eq!(err, Error::Gate(GateError::WrongStage));
    // The session did not advance past the primary stage.
    assert_eq!(
        service.authorization().unwrap().stage,
        GateStage::AwaitingPrimary
    );
    assert!(service.suppression_status().armed);
}

#[test]
fn session_reports_its_pending_action_and_stage() {
    let mut service = make_service();
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    service
        .handle_command(PanelCommand::RequestPowerToggle(false), &clock, &mut sink)
        .unwrap();
    let session = service.authorization().unwrap();
    assert_eq!(session.action, PendingAction::TogglePower(false));
    assert_eq!(session.stage, GateStage::AwaitingPrimary);
    assert_eq!(session.primary_error, None);
    assert_eq!(session.secondary_error, None);

    service
        .handle_command(
            PanelCommand::SubmitPrimary(String::from("1234")),
            &clock,
            &mut sink,
        )
        .unwrap();
    assert_eq!(
        service.authorization().unwrap().stage,
        GateStage::AwaitingSecondary
    );
}

#[test]
fn indefinite_retries_are_allowed_on_both_stages() {
    let mut service = make_service();
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    service
        .handle_command(PanelCommand::RequestArmToggle(false), &clock, &mut sink)
        .unwrap();

    for _ in 0..20 {
        let err = service
            .handle_command(
                PanelCommand::SubmitPrimary(String::from("nope")),
                &clock,
                &mut sink,
            )
            .unwrap_err();
        assert_eq!(err, Error::Gate(GateError::InvalidPrimary));
    }
    service
        .handle_command(
            PanelCommand::SubmitPrimary(String::from("1234")),
            &clock,
            &mut sink,
        )
        .unwrap();

    for _ in 0..20 {
        let err = service
            .handle_command(
                PanelCommand::SubmitSecondary(String::from("00000")),
                &clock,
                &mut sink,
            )
            .unwrap_err();
        assert_eq!(err, Error::Gate(GateError::InvalidSecondary));
    }
    service
        .handle_command(
            PanelCommand::SubmitSecondary(String::from("12345")),
            &clock,
            &mut sink,
        )
        .unwrap();
    assert!(!service.suppression_status().armed);
}

#[test]
fn cancel_mid_session_then_reopen_with_a_different_action() {
    let mut service = make_service();
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    service
        .handle_command(PanelCommand::RequestArmToggle(false), &clock, &mut sink)
        .unwrap();
    service
        .handle_command(
            PanelCommand::SubmitPrimary(String::from("1234")),
            &clock,
            &mut sink,
        )
        .unwrap();
    service
        .handle_command(PanelCommand::CancelAuthorization, &clock, &mut sink)
        .unwrap();
    assert!(service.authorization().is_none());

    // The cancelled disarm never applies, even with the right code later.
    service
        .handle_command(PanelCommand::RequestPowerToggle(false), &clock, &mut sink)
        .unwrap();
    service
        .complete_authorization("1234", "12345", &clock, &mut sink)
        .unwrap();
    assert!(service.suppression_status().armed, "cancelled action leaked");
    assert!(!service.suppression_status().power_on);
}

#[test]
fn custom_credentials_from_config_are_honored() {
    let config = PanelConfig {
        primary_code: String::from("s3cret"),
        secondary_code: String::from("024680"),
        ..PanelConfig::default()
    };
    let mut service = PanelService::new(config);
    let clock = morning_clock();
    let mut sink = RecordingSink::new();

    service
        .handle_command(PanelCommand::RequestArmToggle(false), &clock, &mut sink)
        .unwrap();
    // The factory defaults no longer pass.
    let err = service
        .complete_authorization("1234", "12345", &clock, &mut sink)
        .unwrap_err();
    assert_eq!(err, GateError::InvalidPrimary);

    service
        .complete_authorization("s3cret", "024680", &clock, &mut sink)
        .unwrap();
    assert!(!service.suppression_status().armed);
}
