//! EduNexus desktop entry point.

use edunexus::app::App;
use edunexus::ui::theme::{EduColors, Theme};
use edunexus::ui::widgets::icons::initialize_material_icons;
use edunexus::ui::DesktopApp;
use edunexus::{debug, utils, AppError};
use lib_core::catalog::BRAND_NAME;

fn main() -> Result<(), AppError> {
    // Logging first so configuration problems end up in the log file
    debug::init();

    let config = lib_core::config::init_config()?;
    tracing::info!(
        model = %config.generation_model,
        has_api_key = config.api_key.is_some(),
        debug_mode = debug::is_debug_mode(),
        "Starting EduNexus"
    );

    // Handlers spawn onto this runtime from the UI thread
    let runtime = utils::runtime::runtime()?;
    let _guard = runtime.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(BRAND_NAME)
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        BRAND_NAME,
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            initialize_material_icons(&cc.egui_ctx);
            Theme::apply(&cc.egui_ctx, &EduColors::default());
            Ok(Box::new(DesktopApp::new(App::new())))
        }),
    )?;

    tracing::info!(
        active_tasks = debug::active_task_count(),
        "EduNexus shut down"
    );
    Ok(())
}
