mod action;
mod app;
mod components;
mod state;

use action::{DialogTheme, PanelConfig, load_panel};

fn main() {
    dioxus::logger::initialize_default();

    let panel = match load_panel() {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to load panel config, using defaults: {}", e);
            PanelConfig::default()
        }
    };

    dioxus::LaunchBuilder::new()
        .with_context(DialogTheme::bootstrap())
        .with_context(panel)
        .launch(app::App);
}
