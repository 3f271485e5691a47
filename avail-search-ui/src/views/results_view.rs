use crate::widgets::result_grid::ResultGridWidget;
use avail_search_core::{AppState, SearchStatus};
use egui::RichText;
use nasa_images_fetch::NormalizeMode;

pub struct ResultsView {
    grid_columns: usize,
}

impl ResultsView {
    pub fn new(grid_columns: usize) -> Self {
        Self { grid_columns }
    }

    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let SearchStatus::Failed(message) = &state.status {
                ui.colored_label(egui::Color32::RED, format!("Search failed: {}", message));
                ui.separator();
            }

            if state.results.is_empty() {
                self.show_empty(ui, &state.status);
                return;
            }

            match state.total_hits {
                Some(total_hits) => ui.heading(format!(
                    "Results ({} of {})",
                    state.results.len(),
                    total_hits
                )),
                None => ui.heading(format!("Results ({})", state.results.len())),
            };
            ui.separator();

            let mut clicked = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add(ResultGridWidget {
                    items: &state.results,
                    columns: self.grid_columns,
                    selectable: state.normalize_mode == NormalizeMode::Records,
                    clicked: &mut clicked,
                });
            });
            if let Some(index) = clicked {
                state.select(index);
            }
        });
    }

    fn show_empty(&mut self, ui: &mut egui::Ui, status: &SearchStatus) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            if status.is_submitting() {
                ui.spinner();
                ui.add_space(10.0);
                ui.label("Searching the NASA image library...");
            } else {
                ui.label(RichText::new("No Results").size(16.0).weak().italics());
            }
        });
    }
}
