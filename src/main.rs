//! Kanban Board Frontend Entry Point

mod config;
mod logging;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use reactive_stores::Store;
use store::KanbanState;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logging::init(config.log_level.into());
    if let Some(e) = config_error {
        log::warn!("[CONFIG] Malformed config, using defaults: {}", e);
    }

    let state = KanbanState::new(config.initial_board(), config.title.clone());
    log::info!(
        "[APP] Starting with {} lists, {} items",
        state.board.lists().len(),
        state.board.item_count()
    );

    mount_to_body(move || {
        provide_context(Store::new(state.clone()));
        view! { <App /> }
    });
}
