use std::sync::Once;

use odds_form_core::{
    update, Effect, FailureKind, FormState, Msg, Phase, Status, StatusKind, REJECTED_FALLBACK,
    SENDING_MESSAGE, SUCCESS_FALLBACK, SUCCESS_PREFIX, UNEXPECTED_ERROR,
};

const RACE_URL: &str = "https://race.netkeiba.com/race/shutuba.html?race_id=1";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(odds_logging::initialize_for_tests);
}

fn submit(state: FormState, input: &str) -> (FormState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn error_text(state: &FormState) -> String {
    match state.status() {
        Some(Status::Error(text)) => text.clone(),
        other => panic!("expected error status, got {other:?}"),
    }
}

#[test]
fn mount_starts_idle_without_status() {
    init_logging();
    let state = FormState::new();
    let view = state.view();

    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.status(), None);
    assert_eq!(view.input, "");
    assert!(!view.in_flight);
    assert!(!view.submit_enabled);
    assert_eq!(view.banner, None);
}

#[test]
fn submit_sets_in_flight_and_info_before_any_response() {
    init_logging();
    let (state, effects) = submit(FormState::new(), RACE_URL);

    assert!(state.in_flight());
    assert_eq!(state.phase(), Phase::Submitting);
    assert_eq!(
        state.status(),
        Some(&Status::Info(SENDING_MESSAGE.to_string()))
    );
    assert_eq!(state.input(), RACE_URL);
    assert_eq!(
        effects,
        vec![Effect::PostFetchRequest {
            id: 1,
            url: RACE_URL.to_string(),
        }]
    );

    let view = state.view();
    assert!(!view.submit_enabled);
    assert_eq!(view.banner.unwrap().kind, StatusKind::Info);
}

#[test]
fn empty_input_submit_is_noop() {
    init_logging();
    let mut state = FormState::new();
    assert!(!state.consume_dirty());

    let (mut next, effects) = update(state.clone(), Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert!(!next.consume_dirty());
}

#[test]
fn whitespace_input_is_not_treated_as_empty() {
    init_logging();
    let (state, effects) = submit(FormState::new(), "   ");

    assert!(state.in_flight());
    assert_eq!(
        effects,
        vec![Effect::PostFetchRequest {
            id: 1,
            url: "   ".to_string(),
        }]
    );
}

#[test]
fn success_sets_status_and_clears_input() {
    init_logging();
    let (state, _) = submit(FormState::new(), RACE_URL);
    let (state, effects) = update(
        state,
        Msg::SubmissionSucceeded {
            id: 1,
            message: Some("started".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Succeeded);
    assert_eq!(
        state.status(),
        Some(&Status::Success("成功: started".to_string()))
    );
    assert_eq!(state.input(), "");
    assert!(!state.in_flight());
    assert!(!state.view().submit_enabled);
}

#[test]
fn success_with_missing_or_empty_message_uses_fallback() {
    init_logging();
    for message in [None, Some(String::new())] {
        let (state, _) = submit(FormState::new(), RACE_URL);
        let (state, _) = update(state, Msg::SubmissionSucceeded { id: 1, message });

        assert_eq!(
            state.status(),
            Some(&Status::Success(format!("{SUCCESS_PREFIX}{SUCCESS_FALLBACK}")))
        );
        assert_eq!(state.input(), "");
    }
}

#[test]
fn rejection_shows_server_message_and_keeps_input() {
    init_logging();
    let (state, _) = submit(FormState::new(), RACE_URL);
    let (state, _) = update(
        state,
        Msg::SubmissionFailed {
            id: 1,
            failure: FailureKind::Rejected {
                status: 400,
                message: Some("invalid url".to_string()),
            },
        },
    );

    assert_eq!(state.phase(), Phase::Failed);
    assert!(error_text(&state).contains("invalid url"));
    assert_eq!(state.input(), RACE_URL);
    assert!(!state.in_flight());
    assert!(state.view().submit_enabled);
}

#[test]
fn rejection_with_missing_or_empty_message_uses_same_fallback() {
    init_logging();
    let mut texts = Vec::new();
    for message in [None, Some(String::new())] {
        let (state, _) = submit(FormState::new(), RACE_URL);
        let (state, _) = update(
            state,
            Msg::SubmissionFailed {
                id: 1,
                failure: FailureKind::Rejected {
                    status: 500,
                    message,
                },
            },
        );
        texts.push(error_text(&state));
        assert_eq!(state.input(), RACE_URL);
    }

    assert_eq!(texts[0], texts[1]);
    assert!(texts[0].contains(REJECTED_FALLBACK));
}

#[test]
fn transport_and_parse_failures_show_generic_fallback() {
    init_logging();
    let failures = [
        FailureKind::Transport {
            detail: "connection refused".to_string(),
        },
        FailureKind::MalformedResponse {
            detail: "expected value at line 1 column 1".to_string(),
        },
    ];
    for failure in failures {
        let (state, _) = submit(FormState::new(), RACE_URL);
        let (state, _) = update(state, Msg::SubmissionFailed { id: 1, failure });

        let text = error_text(&state);
        assert!(text.contains(UNEXPECTED_ERROR));
        assert!(!text.contains("connection refused"));
        assert_eq!(state.input(), RACE_URL);
        assert!(!state.in_flight());
    }
}

#[test]
fn unresolved_submission_stays_in_flight() {
    init_logging();
    let (state, effects) = submit(FormState::new(), RACE_URL);
    assert_eq!(effects.len(), 1);

    // Editing the input is the only thing that can happen before the
    // response; it must not resolve or time out the submission.
    let (state, effects) = update(state, Msg::InputChanged(format!("{RACE_URL}2")));

    assert!(effects.is_empty());
    assert!(state.in_flight());
    assert_eq!(state.phase(), Phase::Submitting);
    assert_eq!(
        state.status(),
        Some(&Status::Info(SENDING_MESSAGE.to_string()))
    );
    assert!(!state.view().submit_enabled);
}

#[test]
fn status_is_kept_until_next_submission() {
    init_logging();
    let (state, _) = submit(FormState::new(), RACE_URL);
    let (state, _) = update(
        state,
        Msg::SubmissionFailed {
            id: 1,
            failure: FailureKind::Transport {
                detail: "dns".to_string(),
            },
        },
    );
    let (state, _) = update(state, Msg::InputChanged("https://example.com".to_string()));
    assert_eq!(state.status().unwrap().kind(), StatusKind::Error);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(state.status().unwrap().kind(), StatusKind::Info);
    assert_eq!(
        effects,
        vec![Effect::PostFetchRequest {
            id: 2,
            url: "https://example.com".to_string(),
        }]
    );
}

#[test]
fn late_resolution_applies_after_input_edit() {
    init_logging();
    let (state, _) = submit(FormState::new(), RACE_URL);
    let (state, _) = update(state, Msg::InputChanged("https://other.example".to_string()));
    let (state, _) = update(
        state,
        Msg::SubmissionSucceeded {
            id: 1,
            message: Some("started".to_string()),
        },
    );

    assert_eq!(state.input(), "");
    assert_eq!(state.status().unwrap().kind(), StatusKind::Success);
}

#[test]
fn handler_does_not_guard_reentry_while_in_flight() {
    init_logging();
    let (state, _) = submit(FormState::new(), RACE_URL);
    assert!(!state.view().submit_enabled);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::PostFetchRequest {
            id: 2,
            url: RACE_URL.to_string(),
        }]
    );
    assert!(state.in_flight());
}

#[test]
fn input_change_marks_dirty_only_when_different() {
    init_logging();
    let (mut state, _) = update(FormState::new(), Msg::InputChanged("h".to_string()));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::InputChanged("h".to_string()));
    assert!(!state.consume_dirty());
    assert!(state.view().submit_enabled);
}
