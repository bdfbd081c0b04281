//! # GUI Rendering Framework
//!
//! Draws one frame from a cloned [`AppState`] snapshot and hosts the
//! [`DesktopApp`] glue that eframe calls every frame.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use egui;
use lib_core::View;

use crate::app::{App, AppState};
use crate::ui::theme::EduColors;

/// Idle repaint period; keeps carousel ticks and query results flowing
/// without user input.
const IDLE_REPAINT: Duration = Duration::from_millis(200);

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Read state for rendering
    let state: AppState = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        None => {
            // Lock is held by another task, skip this frame
            return;
        }
    }; // Lock released here - rendering happens without holding lock

    let colors = EduColors::default();
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors.background))
        .show(ctx, |ui| match state.current_view() {
            View::Landing => screens::landing::render(ui, &state, app),
            View::Workspace => screens::workspace::render(ui, &state, app),
        });
}

/// eframe entry point wrapping the [`App`] orchestrator.
pub struct DesktopApp {
    app: App,
    window_title: String,
}

impl DesktopApp {
    pub fn new(app: App) -> Self {
        let window_title = app.state.read().window_title();
        Self { app, window_title }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Push a title change to the native window.
    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.app.state.read().window_title();
        if title != self.window_title {
            tracing::debug!(title = %title, "Window title changed");
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        render(ctx, &mut self.app);
        self.sync_window_title(ctx);

        if self.app.take_repaint_request() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use lib_core::{Config, GenerationError, Subject};

    use crate::app::AppLike;
    use crate::core::service::GenerationService;

    struct Silent;

    #[async_trait]
    impl GenerationService for Silent {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Ok(String::new())
        }
    }

    fn frame(ctx: &egui::Context, app: &mut App) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| render(ctx, app));
    }

    #[tokio::test]
    async fn test_render_both_views_headless() {
        let ctx = egui::Context::default();
        let mut app = App::with_service(Arc::new(Silent), &Config::default());

        frame(&ctx, &mut app);

        app.handle_explore(Subject::Physics);
        app.handle_pick_simulation("pendulum");
        frame(&ctx, &mut app);

        app.handle_back();
        frame(&ctx, &mut app);
        assert_eq!(app.state.read().current_view(), View::Landing);
    }

    #[tokio::test]
    async fn test_desktop_app_tracks_window_title() {
        let ctx = egui::Context::default();
        let mut desktop = DesktopApp::new(App::with_service(Arc::new(Silent), &Config::default()));
        assert_eq!(desktop.window_title, "EduNexus");

        desktop.app.handle_explore(Subject::Chemistry);
        desktop.sync_window_title(&ctx);
        assert_eq!(desktop.window_title, "EduNexus - Chemistry Workspace");
        assert_eq!(desktop.app().state().read().window_title(), desktop.window_title);
    }
}
