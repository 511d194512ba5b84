//! Terminal UI: renders a game and turns key presses into drops.

mod app;
pub mod board_widget;
mod game_view;
pub mod palette;

pub use app::App;
