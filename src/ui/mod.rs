//! Terminal UI: renders a game with the players' colors and turns key
//! presses into engine calls.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
