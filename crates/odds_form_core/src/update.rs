use crate::{Effect, FormState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(input) => {
            state.set_input(input);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Only the exact empty string is refused. Re-entry while a request is
            // in flight is prevented by the disabled control, not here.
            if state.input().is_empty() {
                return (state, Vec::new());
            }
            let url = state.input().to_string();
            let id = state.begin_submission();
            vec![Effect::PostFetchRequest { id, url }]
        }
        Msg::SubmissionSucceeded { id: _, message } => {
            state.apply_success(message);
            Vec::new()
        }
        Msg::SubmissionFailed { id: _, failure } => {
            state.apply_failure(failure.display_message());
            Vec::new()
        }
    };

    (state, effects)
}
