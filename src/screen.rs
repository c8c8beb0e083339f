//! Screen state machine: menu, help, playing and game over.

use tracing::info;

use crate::game::{AudioCue, Direction, Outcome};
use crate::session::GameSession;

/// The active screen. Playing owns the only live session.
pub enum Screen {
    Menu,
    Help,
    Playing(GameSession),
    GameOver { score: u32 },
}

/// Identifier of a screen without its data.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScreenKind {
    Menu,
    Help,
    Playing,
    GameOver,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Menu => ScreenKind::Menu,
            Screen::Help => ScreenKind::Help,
            Screen::Playing(_) => ScreenKind::Playing,
            Screen::GameOver { .. } => ScreenKind::GameOver,
        }
    }
}

/// Logical request produced by a click or key press.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Start,
    ShowHelp,
    Back,
    Restart,
    Quit,
}

/// Whether the main loop should keep running.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct ScreenController {
    screen: Screen,
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenController {
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Applies `action` if the active screen accepts it; anything else is ignored.
    pub fn apply(&mut self, action: Action, now: f64) -> Flow {
        let next = match (&self.screen, action) {
            (_, Action::Quit) => return Flow::Quit,
            (Screen::Menu, Action::Start) | (Screen::GameOver { .. }, Action::Restart) => {
                Screen::Playing(GameSession::new(now))
            }
            (Screen::Menu, Action::ShowHelp) => Screen::Help,
            (Screen::Help, Action::Back) => Screen::Menu,
            _ => return Flow::Continue,
        };
        self.switch_to(next);
        Flow::Continue
    }

    /// Forwards a steering intent to the live session, if any.
    pub fn steer(&mut self, direction: Direction) {
        if let Screen::Playing(session) = &mut self.screen {
            session.snake_mut().set_direction(direction);
        }
    }

    /// Advances the live session and moves to game over when it ends.
    pub fn tick(&mut self, now: f64, cues: &mut Vec<AudioCue>) -> Outcome {
        let Screen::Playing(session) = &mut self.screen else {
            return Outcome::Waiting;
        };
        let outcome = session.update(now, cues);
        if let Outcome::GameOver { score } = outcome {
            self.switch_to(Screen::GameOver { score });
        }
        outcome
    }

    fn switch_to(&mut self, next: Screen) {
        info!(from = ?self.screen.kind(), to = ?next.kind(), "screen transition");
        self.screen = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::Food;
    use crate::game::Position;

    fn playing(controller: &mut ScreenController) -> &mut GameSession {
        match &mut controller.screen {
            Screen::Playing(session) => session,
            _ => panic!("not playing"),
        }
    }

    #[test]
    fn starts_on_the_menu() {
        assert_eq!(ScreenController::new().kind(), ScreenKind::Menu);
    }

    #[test]
    fn start_opens_a_fresh_session() {
        let mut controller = ScreenController::new();
        assert_eq!(controller.apply(Action::Start, 0.0), Flow::Continue);
        assert_eq!(controller.kind(), ScreenKind::Playing);
        assert_eq!(playing(&mut controller).score(), 0);
    }

    #[test]
    fn help_and_back() {
        let mut controller = ScreenController::new();
        controller.apply(Action::ShowHelp, 0.0);
        assert_eq!(controller.kind(), ScreenKind::Help);
        // start is not offered on the help screen
        controller.apply(Action::Start, 0.0);
        assert_eq!(controller.kind(), ScreenKind::Help);
        controller.apply(Action::Back, 0.0);
        assert_eq!(controller.kind(), ScreenKind::Menu);
    }

    #[test]
    fn actions_outside_their_screen_are_ignored() {
        let mut controller = ScreenController::new();
        controller.apply(Action::Restart, 0.0);
        controller.apply(Action::Back, 0.0);
        assert_eq!(controller.kind(), ScreenKind::Menu);

        controller.apply(Action::Start, 0.0);
        controller.apply(Action::ShowHelp, 0.0);
        controller.apply(Action::Restart, 0.0);
        assert_eq!(controller.kind(), ScreenKind::Playing);
    }

    #[test]
    fn quit_from_anywhere() {
        let mut controller = ScreenController::new();
        assert_eq!(controller.apply(Action::Quit, 0.0), Flow::Quit);
        controller.apply(Action::Start, 0.0);
        assert_eq!(controller.apply(Action::Quit, 0.0), Flow::Quit);
    }

    #[test]
    fn crash_moves_to_game_over_and_restart_plays_again() {
        let mut controller = ScreenController::new();
        controller.apply(Action::Start, 0.0);
        {
            let session = playing(&mut controller);
            session.food = Food::at(Position::new(20, 580));
            session.snake.body = vec![Position::new(780, 300)];
            session.snake.score = 2;
        }
        controller.steer(Direction::Right);

        let mut cues = Vec::new();
        assert_eq!(controller.tick(1.0, &mut cues), Outcome::GameOver { score: 2 });
        assert!(matches!(controller.screen(), Screen::GameOver { score: 2 }));

        // the dead session no longer ticks
        assert_eq!(controller.tick(2.0, &mut cues), Outcome::Waiting);

        controller.apply(Action::Restart, 3.0);
        let session = playing(&mut controller);
        assert_eq!(session.score(), 0);
        assert_eq!(session.snake().body(), &[Position::new(400, 300)]);
        assert_eq!(session.snake().direction(), Direction::None);
    }

    #[test]
    fn steering_outside_play_is_dropped() {
        let mut controller = ScreenController::new();
        controller.steer(Direction::Up);
        assert_eq!(controller.kind(), ScreenKind::Menu);
    }
}
