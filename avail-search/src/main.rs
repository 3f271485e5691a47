use actix::prelude::*;
use avail_search_actors::SearchActor;
use avail_search_config::Config;
use avail_search_core::AppMessage;
use std::error;
use tracing_subscriber::EnvFilter;

mod app;

#[actix::main]
async fn main() -> Result<(), Box<dyn error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Could not load config, using defaults: {}", e);
            Config::default()
        }
    };
    tracing::info!("Searching against {}", cfg.api_base_url);

    let client = nasa_images_fetch::build_client(cfg.request_timeout())?;

    let (tx_app_message, rx_app_message) = tokio::sync::mpsc::unbounded_channel::<AppMessage>();

    let search_addr = SearchActor::start_in_arbiter(&Arbiter::new().handle(), {
        let tx_app_message = tx_app_message.clone();
        let base_url = cfg.api_base_url.clone();
        let query_options = cfg.query_options();
        let normalize_mode = cfg.normalize_mode;
        move |_ctx| {
            SearchActor::new(
                tx_app_message,
                client,
                base_url,
                query_options,
                normalize_mode,
            )
        }
    });

    eframe::run_native(
        "NASA AVAIL Advanced Search",
        eframe::NativeOptions::default(),
        Box::new(move |_| {
            Ok(Box::new(app::App::new(
                tx_app_message,
                rx_app_message,
                search_addr,
                &cfg,
            )))
        }),
    )?;

    Ok(())
}
