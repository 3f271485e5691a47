use avail_search_core::AppMessage;
use nasa_images_fetch::{Center, MediaType, SearchParams, YEAR_MAX, YEAR_MIN};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Default)]
pub struct SearchFormPanel;

impl SearchFormPanel {
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        params: &mut SearchParams,
        tx_app_message: &UnboundedSender<AppMessage>,
    ) {
        egui::SidePanel::left("search_form_panel")
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.heading("NASA AVAIL Advanced Search");
                ui.label(
                    egui::RichText::new(
                        "Advanced search of NASA's image and video library. \
                         All data from images.nasa.gov.",
                    )
                    .weak(),
                );
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    let submitted_with_enter = self.render_fields(ui, params);
                    ui.add_space(10.0);
                    self.render_year_range(ui, params);
                    ui.add_space(10.0);

                    let years_valid = params.has_valid_years();
                    ui.horizontal(|ui| {
                        let submit = ui.add_enabled(years_valid, egui::Button::new("🔍 Submit"));
                        if submit.clicked() || (submitted_with_enter && years_valid) {
                            send(tx_app_message, AppMessage::SubmitSearch);
                        }
                        if ui.button("Reset").clicked() {
                            send(tx_app_message, AppMessage::ResetSearch);
                        }
                    });
                });
            });
    }

    /// Returns true when Enter was pressed in one of the text fields.
    fn render_fields(&mut self, ui: &mut egui::Ui, params: &mut SearchParams) -> bool {
        let mut submitted = false;

        egui::Grid::new("search_form_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                let text_fields: [(&str, &mut String); 5] = [
                    ("Search terms:", &mut params.query),
                    ("Location:", &mut params.location),
                    ("Photographer:", &mut params.photographer),
                    ("Secondary creator:", &mut params.secondary_creator),
                    ("Keywords:", &mut params.keywords),
                ];
                for (label, value) in text_fields {
                    ui.label(label);
                    let response = ui.text_edit_singleline(value);
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submitted = true;
                    }
                    ui.end_row();
                }

                ui.label("NASA Center:");
                egui::ComboBox::from_id_salt("center_combo")
                    .selected_text(params.center.label())
                    .show_ui(ui, |ui| {
                        for center in Center::ALL {
                            ui.selectable_value(&mut params.center, center, center.label());
                        }
                    });
                ui.end_row();

                ui.label("Media Type:");
                egui::ComboBox::from_id_salt("media_type_combo")
                    .selected_text(params.media_type.label())
                    .show_ui(ui, |ui| {
                        for media_type in MediaType::ALL {
                            ui.selectable_value(
                                &mut params.media_type,
                                media_type,
                                media_type.label(),
                            );
                        }
                    });
                ui.end_row();
            });

        submitted
    }

    fn render_year_range(&mut self, ui: &mut egui::Ui, params: &mut SearchParams) {
        ui.label("Year Range");
        let start =
            ui.add(egui::Slider::new(&mut params.year_start, YEAR_MIN..=YEAR_MAX).text("From"));
        let end = ui.add(egui::Slider::new(&mut params.year_end, YEAR_MIN..=YEAR_MAX).text("To"));

        // Behave like a two-thumb slider: the moved thumb pushes the other one.
        if params.year_start > params.year_end {
            if start.changed() {
                params.year_end = params.year_start;
            } else if end.changed() {
                params.year_start = params.year_end;
            } else {
                params.clamp_years();
            }
        }

        ui.label(format!(
            "Selected Range: {} - {}",
            params.year_start, params.year_end
        ));
    }
}

fn send(tx_app_message: &UnboundedSender<AppMessage>, message: AppMessage) {
    if let Err(e) = tx_app_message.send(message) {
        tracing::error!("Failed to send form message: {}", e);
    }
}
