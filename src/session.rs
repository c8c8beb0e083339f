use tracing::{debug, info};

use crate::food::Food;
use crate::game::{AudioCue, Outcome, Position, SCREEN_HEIGHT, SCREEN_WIDTH, STATUS_BAR_LIMIT};
use crate::snake::Snake;

/// One playthrough: a snake and its food. Never reused after game over.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) snake: Snake,
    pub(crate) food: Food,
}

impl GameSession {
    pub fn new(now: f64) -> Self {
        Self {
            snake: Snake::new(now),
            food: Food::spawn(),
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    pub fn speed(&self) -> u32 {
        self.snake.speed()
    }

    /// Advances at most one step if the snake is due, then applies collision rules.
    pub fn update(&mut self, now: f64, cues: &mut Vec<AudioCue>) -> Outcome {
        if !self.snake.is_due(now) {
            return Outcome::Waiting;
        }
        self.snake.advance(now);

        let head = self.snake.head();
        if out_of_bounds(head) || self.snake.bites_itself() {
            return self.game_over();
        }

        let mut outcome = Outcome::Continuing;
        if self.food.overlaps(head, self.snake.segment_size()) {
            self.snake.award_point();
            self.food.respawn();
            cues.push(AudioCue::Eat);
            debug!(score = self.snake.score(), food = ?self.food.position, "food eaten");
            outcome = Outcome::Ate;
        }

        if head.y <= STATUS_BAR_LIMIT {
            return self.game_over();
        }

        if self.snake.apply_milestone() {
            cues.push(AudioCue::Bonus);
            info!(speed = self.snake.speed(), score = self.snake.score(), "speed increased");
        }

        outcome
    }

    fn game_over(&self) -> Outcome {
        info!(
            score = self.snake.score(),
            speed = self.snake.speed(),
            length = self.snake.body().len(),
            direction = ?self.snake.direction(),
            "game over"
        );
        Outcome::GameOver {
            score: self.snake.score(),
        }
    }
}

fn out_of_bounds(head: Position) -> bool {
    head.x < 0 || head.x >= SCREEN_WIDTH || head.y < 0 || head.y >= SCREEN_HEIGHT
}
