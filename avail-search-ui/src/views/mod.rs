pub mod results_view;

pub use results_view::ResultsView;
