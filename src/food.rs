use crate::game::{FOOD_SIZE, HUD_HEIGHT, Position, SCREEN_HEIGHT, SCREEN_WIDTH};

/// The single food item on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
    pub size: i32,
}

impl Food {
    /// Places a food item at a random cell below the HUD.
    pub fn spawn() -> Self {
        let mut food = Self::at(Position::new(0, HUD_HEIGHT));
        food.respawn();
        food
    }

    pub fn at(position: Position) -> Self {
        Self {
            position,
            size: FOOD_SIZE,
        }
    }

    /// Moves the food to a uniformly random in-bounds spot. It may land on the snake.
    pub fn respawn(&mut self) {
        // gen_range's upper bound is exclusive
        self.position = Position::new(
            macroquad::rand::gen_range(0, SCREEN_WIDTH - self.size + 1),
            macroquad::rand::gen_range(HUD_HEIGHT, SCREEN_HEIGHT - self.size + 1),
        );
    }

    /// Axis-aligned box overlap between a `segment`-sized square at `head` and the food.
    pub fn overlaps(&self, head: Position, segment: i32) -> bool {
        head.x < self.position.x + self.size
            && head.x + segment > self.position.x
            && head.y < self.position.y + self.size
            && head.y + segment > self.position.y
    }
}
