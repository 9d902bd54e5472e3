use eframe::egui;

use crate::analysis::{self, CheckResult, Severity};
use crate::app_state::AppState;
use crate::workflow::{Action, ButtonPresentation, Stage};

pub struct AnalyzerApp {
    state: AppState,
}

pub fn create_app() -> AnalyzerApp {
    AnalyzerApp {
        state: AppState::default(),
    }
}

impl eframe::App for AnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = &mut self.state;

        poll_file_dialog(state);

        // 1. Action bar (top)
        egui::TopBottomPanel::top("action_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for action in Action::ALL {
                    if action_button(ui, state, action) {
                        run_action(state, action);
                    }
                }
            });
            ui.add_space(6.0);
        });

        // 2. Result surface (bottom, read-only, color-coded)
        egui::TopBottomPanel::bottom("result_panel")
            .resizable(false)
            .min_height(90.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.label(egui::RichText::new("Result").weak());

                ui.style_mut().visuals.extreme_bg_color =
                    result_background(state.result_severity);
                ui.add_sized(
                    egui::vec2(ui.available_width(), 70.0),
                    egui::TextEdit::multiline(&mut state.result_message.as_str())
                        .font(egui::FontId::monospace(13.0))
                        .interactive(false),
                );
            });

        // 3. Code panel (central, editable)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(egui::RichText::new("Source code").weak());
            egui::ScrollArea::vertical()
                .id_source("source_scroll")
                .show(ui, |ui| {
                    ui.add_sized(
                        ui.available_size(),
                        egui::TextEdit::multiline(&mut state.source_code)
                            .code_editor()
                            .font(egui::FontId::monospace(14.0))
                            .desired_width(f32::INFINITY),
                    );
                });
        });
    }
}

/// Draw one action button from its cached presentation. Returns true on
/// a click of an interactive button; locked buttons never fire.
fn action_button(ui: &mut egui::Ui, state: &AppState, action: Action) -> bool {
    let look = state.presentation[action.index()];
    let response = ui.add_enabled(look.interactive, egui::Button::new(action.label()));
    if response.contains_pointer() {
        ui.ctx().set_cursor_icon(look.cursor);
    }
    look.interactive && response.clicked()
}

fn run_action(state: &mut AppState, action: Action) {
    match action {
        Action::OpenFile => spawn_file_dialog(state),
        Action::Lexical => {
            let result = analysis::lexical::check(&state.source_code);
            apply_check(state, result, Stage::LexicalPassed);
        }
        Action::Syntax => {
            let result = analysis::syntax::check(&state.source_code);
            let passed = result.passed;
            apply_check(state, result, Stage::SyntaxPassed);
            if passed {
                // Redundant with the stage snapshot, but done explicitly:
                // the semantic button gets the enabled look regardless.
                state.presentation[Action::Semantic.index()] = ButtonPresentation::enabled();
            }
        }
        Action::Semantic => {
            let result = analysis::semantic::check(&state.source_code);
            apply_check(state, result, Stage::SemanticPassed);
        }
        Action::Clear => state.clear(),
    }
}

/// Surface the check outcome; advance the workflow only on a pass.
fn apply_check(state: &mut AppState, result: CheckResult, next: Stage) {
    log::debug!(
        "{:?} -> {:?}: {}",
        state.stage,
        if result.passed { Some(next) } else { None },
        result.message
    );
    if result.passed {
        state.enter_stage(next);
    }
    state.set_result(result.message, result.severity);
}

/// The native picker blocks, so it runs on its own thread and sends the
/// chosen path back over the channel. The extension filter is advisory;
/// nothing checks the content against it.
fn spawn_file_dialog(state: &AppState) {
    let tx = state.file_dialog_tx.clone();
    std::thread::spawn(move || {
        let dialog = rfd::FileDialog::new()
            .set_title("Open source file")
            .add_filter("Source files", &["txt", "js", "cpp", "py"]);
        if let Some(path) = dialog.pick_file() {
            let _ = tx.send(path);
        }
    });
}

/// Deliver the newest picked file, if any. Reading happens here on the
/// UI thread, so the workflow cannot advance before the text is in.
/// Cancelled dialogs send nothing and change nothing.
fn poll_file_dialog(state: &mut AppState) {
    if let Some(path) = state.take_picked_file() {
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                log::info!("loaded {}", path.display());
                state.source_code = text;
                state.enter_stage(Stage::Opened);
            }
            Err(err) => {
                log::warn!("failed to read {}: {err}", path.display());
                state.set_result(
                    format!("Could not read {}: {err}", path.display()),
                    Severity::Error,
                );
            }
        }
    }
}

fn result_background(severity: Option<Severity>) -> egui::Color32 {
    match severity {
        None => egui::Color32::WHITE,
        Some(Severity::Success) => egui::Color32::from_rgb(144, 238, 144),
        Some(Severity::Error) => egui::Color32::from_rgb(240, 128, 128),
    }
}
