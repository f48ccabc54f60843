mod menu;
mod state;

pub use menu::HOW_TO_PLAY;
pub use state::{AppState, InputAction, Scene};
