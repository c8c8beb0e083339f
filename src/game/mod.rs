//! Shared value types, events and constants for the snake game.

mod components;
mod constants;
mod events;

pub use components::*;
pub use constants::*;
pub use events::*;
