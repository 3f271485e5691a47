use nasa_images_fetch::ResultItem;

const GAP: f32 = 12.0;
const MIN_TILE_WIDTH: f32 = 64.0;

pub struct ResultGridWidget<'a> {
    pub items: &'a [ResultItem],
    pub columns: usize,
    /// Tiles only react to clicks when there is a detail view to open.
    pub selectable: bool,
    pub clicked: &'a mut Option<usize>,
}

impl<'a> egui::Widget for ResultGridWidget<'a> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let columns = self.columns.max(1);
        let tile_width = ((ui.available_width() - GAP * (columns - 1) as f32)
            / columns as f32)
            .max(MIN_TILE_WIDTH);

        egui::Grid::new("result_grid")
            .spacing([GAP, GAP])
            .show(ui, |ui| {
                for (index, item) in self.items.iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.set_max_width(tile_width);
                        let response = tile(ui, item, tile_width, self.selectable);
                        let response = match &item.title {
                            Some(title) => response.on_hover_text(title.as_str()),
                            None => response,
                        };
                        if self.selectable && response.clicked() {
                            tracing::info!("Selected result {}", index);
                            *self.clicked = Some(index);
                        }
                        if let Some(title) = &item.title {
                            ui.label(egui::RichText::new(title.as_str()).small());
                        }
                    });
                    if (index + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            })
            .response
    }
}

fn tile(
    ui: &mut egui::Ui,
    item: &ResultItem,
    tile_width: f32,
    selectable: bool,
) -> egui::Response {
    let sense = if selectable {
        egui::Sense::click()
    } else {
        egui::Sense::hover()
    };
    match &item.thumbnail_url {
        Some(url) => ui.add(
            egui::Image::new(url.as_str())
                .fit_to_exact_size(egui::Vec2::splat(tile_width))
                .sense(sense),
        ),
        None => ui.add_sized(
            [tile_width, tile_width],
            egui::Label::new(egui::RichText::new("No preview").weak()).sense(sense),
        ),
    }
}
