use super::main::Session;
use crate::image_normalizer::normalize::normalize;
use crate::session::core::{Effect, Event};

impl Session {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Event {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::Validate { upload } => Event::ValidateDone(self.validator.validate(&upload.bytes)),
            Effect::Normalize { upload } => Event::NormalizeDone(normalize(
                &upload.bytes,
                self.config.input_width,
                self.config.input_height,
            )),
            Effect::Classify { tensor } => Event::ClassifyDone(self.classifier.classify(&tensor)),
            Effect::Record {
                identifier,
                decision,
            } => Event::RecordDone(self.ledger.append(&identifier, &decision)),
        }
    }
}
