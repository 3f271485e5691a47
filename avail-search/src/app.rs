use avail_search_actors::{CancelSearchMessage, SearchActor, SubmitSearchMessage};
use avail_search_config::Config;
use avail_search_core::{AppMessage, AppState};
use avail_search_ui::Ui;
use std::time::Duration;

pub(crate) struct App {
    pub rx_app_message: tokio::sync::mpsc::UnboundedReceiver<AppMessage>,
    pub search_addr: actix::Addr<SearchActor>,
    pub state: AppState,
    pub ui: Ui,
}

impl App {
    pub fn new(
        tx_app_message: tokio::sync::mpsc::UnboundedSender<AppMessage>,
        rx_app_message: tokio::sync::mpsc::UnboundedReceiver<AppMessage>,
        search_addr: actix::Addr<SearchActor>,
        cfg: &Config,
    ) -> Self {
        Self {
            rx_app_message,
            search_addr,
            state: AppState::new(cfg.normalize_mode),
            ui: Ui::new(tx_app_message, cfg.grid_columns),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages();
        self.ui.update(ctx, &mut self.state);

        // Results arrive from another thread; keep polling while one is due.
        if self.state.status.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl App {
    fn process_messages(&mut self) {
        while let Ok(message) = self.rx_app_message.try_recv() {
            match message {
                AppMessage::SubmitSearch => {
                    let request = self.state.begin_search();
                    tracing::info!("Submitting search {}: {:?}", request.id, request.params);
                    self.search_addr.do_send(SubmitSearchMessage(request));
                }
                AppMessage::ResetSearch => {
                    tracing::info!("Resetting search form");
                    self.state.reset();
                    self.search_addr.do_send(CancelSearchMessage);
                }
                AppMessage::SearchCompleted { request_id, result } => {
                    if let Err(e) = &result {
                        tracing::warn!("Search {} returned an error: {}", request_id, e);
                    }
                    if !self.state.apply_search_result(request_id, result) {
                        tracing::info!("Ignored stale response for search {}", request_id);
                    }
                }
            }
        }
    }
}
