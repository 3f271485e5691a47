use avail_search_core::SearchStatus;

#[derive(Default)]
pub struct TopPanel;

impl TopPanel {
    pub fn show(&mut self, ctx: &egui::Context, status: &SearchStatus) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match status {
                        SearchStatus::Submitting => {
                            ui.label(
                                egui::RichText::new("Searching...")
                                    .color(egui::Color32::from_rgb(100, 150, 255))
                                    .italics(),
                            );
                            ui.spinner();
                        }
                        SearchStatus::Failed(_) => {
                            ui.colored_label(egui::Color32::RED, "⚠ Last search failed");
                        }
                        SearchStatus::Idle | SearchStatus::Loaded => {}
                    }
                });
            });
        });
    }
}
