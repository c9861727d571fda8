pub mod app;
pub mod definition_panel;
pub mod maze_view;
pub mod result_panel;
pub mod settings_panel;
pub mod solution_panel;

pub use app::App;
