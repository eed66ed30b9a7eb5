// roster: terminal gallery of students and their evaluations.
// Wires config, logging, the session cache, and the API client into the TUI.

mod api;
mod app;
mod cache;
mod config;
mod controller;
mod error;
mod logging;
mod notify;
mod paths;
mod state;
mod ui;

use std::sync::Arc;

use crate::api::ApiClient;
use crate::app::App;
use crate::cache::{MemoryStore, SessionCache};
use crate::config::Config;
use crate::controller::GalleryController;
use crate::error::Result;
use crate::notify::ToastQueue;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let log_path = logging::init(&config.log_filter)?;
    tracing::info!(api_url = %config.api_url, log = ?log_path, "starting roster");

    let client = ApiClient::new(&config.api_url, &config.api_key)?;
    // Lives exactly as long as this process, like a browser tab's session storage
    let store = match config.cache_quota {
        Some(quota) => MemoryStore::with_quota(quota),
        None => MemoryStore::new(),
    };
    let cache = SessionCache::new(Arc::new(store));
    let toasts = Arc::new(ToastQueue::new());
    let controller = GalleryController::new(Arc::new(client), cache, toasts.clone());

    let mut app = App::new(controller, toasts);
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result?;
    tracing::info!("roster exited");
    Ok(())
}
