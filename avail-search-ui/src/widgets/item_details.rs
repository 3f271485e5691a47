use crate::utils::{details_page_url, to_medium_image_url};
use nasa_images_fetch::ResultItem;

/// Full metadata for one result, shown inside the detail window.
pub struct ItemDetailsWidget<'a> {
    pub item: &'a ResultItem,
}

impl<'a> egui::Widget for ItemDetailsWidget<'a> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let item = self.item;
        ui.vertical(|ui| {
            if let Some(url) = &item.thumbnail_url {
                let image_size = egui::Vec2::new(ui.available_width(), 400.0);
                let medium_url = to_medium_image_url(url).into_owned();
                ui.add(egui::Image::new(medium_url).max_size(image_size));
            }

            if let Some(title) = &item.title {
                ui.heading(title.as_str());
            }
            if let Some(date_created) = &item.date_created {
                ui.label(format!("Created: {}", date_created.format("%Y-%m-%d")));
            }
            if let Some(center) = &item.center {
                ui.label(format!("Center: {}", center));
            }
            if let Some(photographer) = &item.photographer {
                ui.label(format!("Photographer: {}", photographer));
            }
            if let Some(secondary_creator) = &item.secondary_creator {
                ui.label(format!("Secondary creator: {}", secondary_creator));
            }
            if let Some(location) = &item.location {
                ui.label(format!("Location: {}", location));
            }
            if !item.keywords.is_empty() {
                ui.label(format!("Keywords: {}", item.keywords.join(", ")));
            }
            if let Some(nasa_id) = &item.nasa_id {
                ui.hyperlink_to(format!("🌎 {}", nasa_id), details_page_url(nasa_id));
            }
            if let Some(description) = &item.description {
                ui.separator();
                egui::ScrollArea::vertical()
                    .max_height(200.0)
                    .show(ui, |ui| {
                        ui.label(description.as_str());
                    });
            }
        })
        .response
    }
}
