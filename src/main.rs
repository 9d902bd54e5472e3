mod analysis;
mod app_state;
mod ui;
mod workflow;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();
    let _ = eframe::run_native(
        "Heuristic Source Analyzer",
        native_options,
        Box::new(|_cc| Box::new(ui::create_app())),
    );
    Ok(())
}
