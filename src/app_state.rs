use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::analysis::Severity;
use crate::workflow::{self, ButtonPresentation, PresentationMap, Stage};

/// The whole application in one struct. The UI is a one-way projection
/// of this state; handlers mutate it and the next frame redraws from it.
pub struct AppState {
    /// The text under analysis. Replaced wholesale on open or clear,
    /// never partially edited by the checkers.
    pub source_code: String,

    pub result_message: String,
    /// `None` renders the neutral at-rest background.
    pub result_severity: Option<Severity>,

    pub stage: Stage,
    pub presentation: PresentationMap,

    // File dialog runs on its own thread and reports back over mpsc so
    // the UI thread never blocks on the native picker.
    pub file_dialog_rx: Receiver<PathBuf>,
    pub file_dialog_tx: Sender<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        let (tx, rx) = channel();
        let mut state = Self {
            source_code: String::new(),
            result_message: String::new(),
            result_severity: None,
            stage: Stage::Initial,
            presentation: [ButtonPresentation::from_locked(true); 5],
            file_dialog_rx: rx,
            file_dialog_tx: tx,
        };
        workflow::apply_stage(&mut state.presentation, state.stage);
        state
    }
}

impl AppState {
    /// Advance the workflow and project the new stage onto the button
    /// presentation.
    pub fn enter_stage(&mut self, stage: Stage) {
        self.stage = stage;
        workflow::apply_stage(&mut self.presentation, stage);
    }

    pub fn set_result(&mut self, message: impl Into<String>, severity: Severity) {
        self.result_message = message.into();
        self.result_severity = Some(severity);
    }

    /// Wipe both surfaces and return the workflow to its starting point.
    pub fn clear(&mut self) {
        self.source_code.clear();
        self.result_message.clear();
        self.result_severity = None;
        self.enter_stage(Stage::Initial);
    }

    /// Drain the dialog channel. Multiple queued picks collapse to the
    /// newest one (last-read-wins).
    pub fn take_picked_file(&mut self) -> Option<PathBuf> {
        self.file_dialog_rx.try_iter().last()
    }
}
