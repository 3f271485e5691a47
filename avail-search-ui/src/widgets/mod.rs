pub mod item_details;
pub mod result_grid;
