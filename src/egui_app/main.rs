/**
 * Factual Desktop Client - Main Entry Point
 *
 * Sets up logging and the tokio runtime, then hands control to eframe.
 */
use eframe::egui;
use factual::egui_app::session::FileSessionStore;
use factual::egui_app::{styles, views, AppState, Config};
use tokio::runtime::Runtime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::load()?;
    tracing::info!(server = config.server_url(), "starting factual client");

    let runtime = Runtime::new()?;
    let store = FileSessionStore::new(config.session_path());
    let mut state = AppState::new(config, Box::new(store), runtime.handle().clone())?;
    state.start();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "factual",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(FactualApp { state, _runtime: runtime }))
        }),
    )?;
    Ok(())
}

/// Main application
struct FactualApp {
    state: AppState,
    // Declared last so the state (and its refresh timer) drops first.
    _runtime: Runtime,
}

impl eframe::App for FactualApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_events();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Results arrive from background tasks; keep polling while waiting.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
