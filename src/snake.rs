use crate::game::{
    BASE_SPEED, Direction, POINTS_PER_MILESTONE, Position, SEGMENT_SIZE, SPEED_INCREMENT,
    START_POSITION,
};

/// The player's snake: body cells (head first), heading, speed and score.
#[derive(Clone, Debug)]
pub struct Snake {
    pub(crate) body: Vec<Position>,
    pub(crate) direction: Direction,
    // Heading of the last completed step
    pub(crate) stepped: Direction,
    pub(crate) speed: u32,
    pub(crate) score: u32,
    pub(crate) grow: bool,
    pub(crate) speed_increases: u32,
    pub(crate) last_step_at: f64,
}

impl Snake {
    /// A one-segment snake resting at the board centre.
    pub fn new(now: f64) -> Self {
        Self {
            body: vec![START_POSITION],
            direction: Direction::None,
            stepped: Direction::None,
            speed: BASE_SPEED,
            score: 0,
            grow: false,
            speed_increases: 0,
            last_step_at: now,
        }
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn segment_size(&self) -> i32 {
        SEGMENT_SIZE
    }

    /// Changes heading unless `requested` would turn the snake back on itself,
    /// either against the pending heading or the one it last moved in.
    pub fn set_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() && requested != self.stepped.opposite() {
            self.direction = requested;
        }
    }

    /// Seconds between two steps at the current speed.
    pub fn step_interval(&self) -> f64 {
        1.0 / self.speed as f64
    }

    pub fn is_due(&self, now: f64) -> bool {
        now - self.last_step_at >= self.step_interval()
    }

    /// Moves one segment along the heading. A pending growth keeps the tail.
    pub fn advance(&mut self, now: f64) {
        let new_head = self.head() + self.direction.offset(SEGMENT_SIZE);
        self.body.insert(0, new_head);

        if self.grow {
            self.grow = false;
        } else {
            self.body.pop();
        }

        self.stepped = self.direction;
        self.last_step_at = now;
    }

    /// True when the head sits on any other segment.
    pub fn bites_itself(&self) -> bool {
        if self.direction == Direction::None {
            return false;
        }
        let head = self.head();
        self.body[1..].iter().any(|segment| *segment == head)
    }

    /// Scores a point and defers growth to the next step.
    pub fn award_point(&mut self) {
        self.score += 1;
        self.grow = true;
    }

    /// Raises the speed once per reached milestone. Returns whether it did.
    pub fn apply_milestone(&mut self) -> bool {
        let reached = self.score / POINTS_PER_MILESTONE;
        if self.score > 0 && self.score % POINTS_PER_MILESTONE == 0 && self.speed_increases < reached
        {
            self.speed += SPEED_INCREMENT;
            self.speed_increases += 1;
            return true;
        }
        false
    }
}
