use crate::config::Config;
use crate::error::ClassifyError;
use crate::image_classifier::interface::{Decision, ImageClassifier};
use crate::image_validator::interface::ImageValidator;
use crate::library::logger::interface::Logger;
use crate::prediction_ledger::ledger::{Ledger, LedgerEntry};
use crate::session::core::State;
use std::sync::Arc;

/// One interactive session: shares the loaded classifier, owns its own ledger.
pub struct Session {
    pub(super) config: Config,
    pub(super) logger: Arc<dyn Logger + Send + Sync>,
    pub(super) validator: Arc<dyn ImageValidator + Send + Sync>,
    pub(super) classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub(super) ledger: Ledger,
}

impl Session {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        validator: Arc<dyn ImageValidator + Send + Sync>,
        classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("session");
        let _ = logger.info(&format!(
            "Session started, classifier expects {:?}",
            classifier.input_shape()
        ));

        Self {
            config,
            logger,
            validator,
            classifier,
            ledger: Ledger::new(),
        }
    }

    pub fn history(&self) -> &[LedgerEntry] {
        self.ledger.all()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Recorded {
        entry: LedgerEntry,
        decision: Decision,
    },
    Rejected {
        identifier: String,
    },
    Errored {
        identifier: String,
        error: ClassifyError,
    },
}

impl Outcome {
    pub fn from_final_state(state: State) -> Self {
        match state {
            State::Recorded { entry, decision } => Outcome::Recorded { entry, decision },
            State::Rejected { identifier } => Outcome::Rejected { identifier },
            State::Errored { identifier, error } => Outcome::Errored { identifier, error },
            State::Uploaded { upload } => Self::stalled(upload.name, "uploaded"),
            State::Validated { identifier } => Self::stalled(identifier, "validated"),
            State::Normalized { identifier, .. } => Self::stalled(identifier, "normalized"),
            State::Classified { identifier, .. } => Self::stalled(identifier, "classified"),
        }
    }

    fn stalled(identifier: String, stage: &str) -> Self {
        Outcome::Errored {
            identifier,
            error: ClassifyError::Inference(format!("Request stopped after being {}", stage)),
        }
    }

    pub fn is_recorded(&self) -> bool {
        matches!(self, Outcome::Recorded { .. })
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Recorded { entry, .. } => {
                let risk = if entry.is_low_risk { "low" } else { "high" };
                format!(
                    "The image {} is classified as {} risk for cancer.",
                    entry.identifier, risk
                )
            }
            Outcome::Rejected { identifier } => {
                format!("The file {} is not a valid image and was rejected.", identifier)
            }
            Outcome::Errored { identifier, error } => {
                format!("Could not classify {}. {}", identifier, error)
            }
        }
    }
}

/// What the shell gets back for one predict interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResponse {
    pub outcome: Outcome,
    pub history: Vec<LedgerEntry>,
}
