//! Grid positions and movement directions.

use std::ops::Add;

/// Pixel position of a segment's top-left corner, aligned to the segment grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Heading of the snake. `None` until the player first steers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Returns the opposite direction. `None` is its own opposite.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::None => Direction::None,
        }
    }

    /// Offset applied to the head for one step of `segment` pixels.
    pub fn offset(self, segment: i32) -> Position {
        match self {
            Direction::Up => Position::new(0, -segment),
            Direction::Down => Position::new(0, segment),
            Direction::Left => Position::new(-segment, 0),
            Direction::Right => Position::new(segment, 0),
            Direction::None => Position::new(0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for d in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::None,
        ] {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn offsets_scale_with_segment() {
        assert_eq!(Direction::Up.offset(20), Position::new(0, -20));
        assert_eq!(Direction::Right.offset(20) + Position::new(400, 300), Position::new(420, 300));
        assert_eq!(Direction::None.offset(20), Position::new(0, 0));
    }
}
