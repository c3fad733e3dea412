use super::main::{Outcome, PredictionResponse, Session};
use crate::library::state_machine::StateMachine;
use crate::session::core::{init, transition, Effect, Event, State};
use crate::upload::Upload;

impl Session {
    /// Runs one upload through validate, normalize, classify and record.
    /// Failures end the request; only a recorded outcome touches the ledger.
    pub fn predict(&mut self, upload: Upload) -> PredictionResponse {
        let logger = self.logger.with_namespace("predict");
        let _ = logger.info(&format!("Predict requested for {}", upload.name));

        let logged_transition = |state: State, event: Event| {
            let _ = logger.info(&format!(
                "\nold state:\n\t{:?}\nevent:\n\t{:?}",
                state, event
            ));

            let (new_state, effects) = transition(state, event);

            let _ = logger.info(&format!(
                "\nnew state:\n\t{:?}\neffects:\n\t{:?}",
                new_state, effects
            ));

            (new_state, effects)
        };

        let final_state = StateMachine::new(logged_transition, |effect: Effect| {
            self.run_effect(effect)
        })
        .run(init(upload));

        if !final_state.is_terminal() {
            let _ = logger.error(&format!("Request ended early in {:?}", final_state));
        }

        let outcome = Outcome::from_final_state(final_state);

        match &outcome {
            Outcome::Recorded { .. } => {
                let _ = logger.info(&outcome.message());
            }
            Outcome::Rejected { .. } | Outcome::Errored { .. } => {
                let _ = logger.error(&outcome.message());
            }
        }

        PredictionResponse {
            outcome,
            history: self.ledger.all().to_vec(),
        }
    }
}
