mod search_form_panel;
mod top_panel;

pub use search_form_panel::SearchFormPanel;
pub use top_panel::TopPanel;
