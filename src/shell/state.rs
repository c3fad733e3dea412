use crate::config::Config;
use crate::prediction_ledger::ledger::LedgerEntry;
use crate::session::main::Session;
use crate::upload::Upload;

pub const ABOUT_TEXT: &str = "This is a breast cancer prediction app. You can upload an image, \
and the app will classify the risk of cancer based on the image.";

pub const NO_UPLOADS_TEXT: &str = "Please upload some images to test the system.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    About,
    Predict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Everything the window shows, kept apart from the egui drawing code.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub view: View,
    pub uploads: Vec<Upload>,
    pub notice: Option<Notice>,
    pub history: Vec<LedgerEntry>,
    accepted_extensions: Vec<String>,
}

impl ShellState {
    pub fn new(config: &Config) -> Self {
        Self {
            view: View::default(),
            uploads: vec![],
            notice: None,
            history: vec![],
            accepted_extensions: config.accepted_extensions.clone(),
        }
    }

    /// Adds an upload, replacing any earlier one with the same name.
    /// Files with an unexpected extension are refused here.
    pub fn add_upload(&mut self, upload: Upload) -> bool {
        if !upload.has_accepted_extension(&self.accepted_extensions) {
            self.notice = Some(Notice::Error(format!(
                "{} is not an accepted file type ({}).",
                upload.name,
                self.accepted_extensions.join(", ")
            )));
            return false;
        }

        match self.uploads.iter_mut().find(|u| u.name == upload.name) {
            Some(existing) => *existing = upload,
            None => self.uploads.push(upload),
        }
        self.notice = None;
        true
    }

    pub fn remove_upload(&mut self, name: &str) {
        self.uploads.retain(|u| u.name != name);
    }

    pub fn predict(&mut self, session: &mut Session, name: &str) {
        let upload = match self.uploads.iter().find(|u| u.name == name) {
            Some(upload) => upload.clone(),
            None => {
                self.notice = Some(Notice::Error(format!("{} is no longer uploaded.", name)));
                return;
            }
        };

        let response = session.predict(upload);

        self.notice = Some(if response.outcome.is_recorded() {
            Notice::Info(response.outcome.message())
        } else {
            Notice::Error(response.outcome.message())
        });
        self.history = response.history;
    }

    pub fn history_lines(&self) -> Vec<String> {
        self.history
            .iter()
            .map(LedgerEntry::to_display_string)
            .collect()
    }
}
