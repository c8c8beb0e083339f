//! Board geometry, timing rules and palette.

use macroquad::prelude::*;

use super::Position;

// Board
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const SEGMENT_SIZE: i32 = 20;
pub const FOOD_SIZE: i32 = 10;

// Top strip reserved for the speed/score HUD. Food never spawns above it.
pub const HUD_HEIGHT: i32 = 60;
// A head at or above this row has run into the HUD.
pub const STATUS_BAR_LIMIT: i32 = 55;

pub const START_POSITION: Position = Position {
    x: SCREEN_WIDTH / 2,
    y: SCREEN_HEIGHT / 2,
};

// Speed is measured in steps per second
pub const BASE_SPEED: u32 = 10;
pub const SPEED_INCREMENT: u32 = 2;
pub const POINTS_PER_MILESTONE: u32 = 5;

// Palette
pub const BACKGROUND: Color = BLACK;
pub const FOREGROUND: Color = WHITE;
pub const BUTTON_TEXT: Color = BLACK;

pub const FONT_SIZE: f32 = 40.0;
pub const ARENA_BORDER: f32 = 2.0;
