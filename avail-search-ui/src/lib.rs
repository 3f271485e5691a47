pub mod panels;

pub mod views;

pub mod widgets;

pub mod utils;

use crate::{
    panels::{SearchFormPanel, TopPanel},
    views::ResultsView,
    widgets::item_details::ItemDetailsWidget,
};

use avail_search_core::{AppMessage, AppState};
use eframe::egui;

use tokio::sync::mpsc::UnboundedSender;

#[derive(Default)]
struct AppPanels {
    top: TopPanel,
    search_form: SearchFormPanel,
}

pub struct Ui {
    panels: AppPanels,
    results: ResultsView,
    tx_app_message: UnboundedSender<AppMessage>,
}

impl Ui {
    pub fn new(tx_app_message: UnboundedSender<AppMessage>, grid_columns: usize) -> Self {
        Self {
            panels: AppPanels::default(),
            results: ResultsView::new(grid_columns),
            tx_app_message,
        }
    }

    pub fn update(&mut self, ctx: &egui::Context, state: &mut AppState) {
        egui_extras::install_image_loaders(ctx);

        self.render_ui(ctx, state);

        if state.show_detail {
            self.show_detail_modal(ctx, state);
        }
    }

    fn render_ui(&mut self, ctx: &egui::Context, state: &mut AppState) {
        self.panels.top.show(ctx, &state.status);
        self.panels
            .search_form
            .show(ctx, &mut state.params, &self.tx_app_message);
        self.results.show(ctx, state);
    }

    fn show_detail_modal(&mut self, ctx: &egui::Context, state: &mut AppState) {
        let Some(item) = state.selected_item().cloned() else {
            state.close_detail();
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new(item.title.clone().unwrap_or_else(|| "Details".to_string()))
            .id(egui::Id::new("result_detail_window"))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(640.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add(ItemDetailsWidget { item: &item });
                ui.add_space(10.0);
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });

        if !open || close_clicked {
            state.close_detail();
        }
    }
}
