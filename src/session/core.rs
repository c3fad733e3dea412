use crate::error::ClassifyError;
use crate::image_classifier::interface::Decision;
use crate::image_normalizer::tensor::ImageTensor;
use crate::prediction_ledger::ledger::LedgerEntry;
use crate::upload::Upload;

/// Lifecycle of a single prediction request.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Uploaded {
        upload: Upload,
    },
    Validated {
        identifier: String,
    },
    Normalized {
        identifier: String,
        shape: [usize; 4],
    },
    Classified {
        identifier: String,
        decision: Decision,
    },
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

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            State::Recorded { .. } | State::Rejected { .. } | State::Errored { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ValidateDone(bool),
    NormalizeDone(Result<ImageTensor, ClassifyError>),
    ClassifyDone(Result<Decision, ClassifyError>),
    RecordDone(LedgerEntry),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Validate { upload: Upload },
    Normalize { upload: Upload },
    Classify { tensor: ImageTensor },
    Record { identifier: String, decision: Decision },
}

pub fn init(upload: Upload) -> (State, Vec<Effect>) {
    (
        State::Uploaded {
            upload: upload.clone(),
        },
        vec![Effect::Validate { upload }],
    )
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        (State::Uploaded { upload }, Event::ValidateDone(true)) => (
            State::Validated {
                identifier: upload.name.clone(),
            },
            vec![Effect::Normalize { upload }],
        ),
        (State::Uploaded { upload }, Event::ValidateDone(false)) => (
            State::Rejected {
                identifier: upload.name,
            },
            vec![],
        ),

        (State::Validated { identifier }, Event::NormalizeDone(Ok(tensor))) => (
            State::Normalized {
                identifier,
                shape: tensor.shape(),
            },
            vec![Effect::Classify { tensor }],
        ),
        (State::Validated { identifier }, Event::NormalizeDone(Err(error))) => {
            (State::Errored { identifier, error }, vec![])
        }

        (State::Normalized { identifier, .. }, Event::ClassifyDone(Ok(decision))) => (
            State::Classified {
                identifier: identifier.clone(),
                decision,
            },
            vec![Effect::Record {
                identifier,
                decision,
            }],
        ),
        (State::Normalized { identifier, .. }, Event::ClassifyDone(Err(error))) => {
            (State::Errored { identifier, error }, vec![])
        }

        (State::Classified { decision, .. }, Event::RecordDone(entry)) => {
            (State::Recorded { entry, decision }, vec![])
        }

        // Anything else leaves the request where it is.
        (state, _) => (state, vec![]),
    }
}
