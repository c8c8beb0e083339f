use macroquad::prelude::*;

use crate::game::Direction;
use crate::screen::{Action, ScreenKind};
use crate::ui;

/// Discrete input gathered from the host each frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputEvent {
    Steer(Direction),
    Click(Vec2),
    Confirm,
    ShowHelp,
    Escape,
}

/// Reads this frame's key presses and clicks, in a fixed order.
pub fn poll() -> Vec<InputEvent> {
    let mut events = Vec::new();

    let steering = [
        (KeyCode::Up, KeyCode::W, Direction::Up),
        (KeyCode::Down, KeyCode::S, Direction::Down),
        (KeyCode::Left, KeyCode::A, Direction::Left),
        (KeyCode::Right, KeyCode::D, Direction::Right),
    ];
    for (arrow, letter, direction) in steering {
        if is_key_pressed(arrow) || is_key_pressed(letter) {
            events.push(InputEvent::Steer(direction));
        }
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        events.push(InputEvent::Click(vec2(x, y)));
    }
    if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space) {
        events.push(InputEvent::Confirm);
    }
    if is_key_pressed(KeyCode::H) {
        events.push(InputEvent::ShowHelp);
    }
    if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
        events.push(InputEvent::Escape);
    }

    events
}

/// Maps a non-steering event to the action it requests on the active screen.
pub fn action_for(kind: ScreenKind, event: InputEvent) -> Option<Action> {
    match (kind, event) {
        (_, InputEvent::Steer(_)) => None,
        (_, InputEvent::Click(point)) => ui::action_at(kind, point),
        (ScreenKind::Menu, InputEvent::Confirm) => Some(Action::Start),
        (ScreenKind::GameOver, InputEvent::Confirm) => Some(Action::Restart),
        (ScreenKind::Menu, InputEvent::ShowHelp) => Some(Action::ShowHelp),
        (ScreenKind::Help, InputEvent::Escape) => Some(Action::Back),
        (_, InputEvent::Escape) => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_backs_out_of_help_and_quits_elsewhere() {
        assert_eq!(action_for(ScreenKind::Help, InputEvent::Escape), Some(Action::Back));
        assert_eq!(action_for(ScreenKind::Menu, InputEvent::Escape), Some(Action::Quit));
        assert_eq!(action_for(ScreenKind::Playing, InputEvent::Escape), Some(Action::Quit));
    }

    #[test]
    fn confirm_depends_on_the_screen() {
        assert_eq!(action_for(ScreenKind::Menu, InputEvent::Confirm), Some(Action::Start));
        assert_eq!(action_for(ScreenKind::GameOver, InputEvent::Confirm), Some(Action::Restart));
        assert_eq!(action_for(ScreenKind::Playing, InputEvent::Confirm), None);
        assert_eq!(action_for(ScreenKind::Help, InputEvent::Confirm), None);
    }

    #[test]
    fn clicks_go_through_hit_testing() {
        let start = InputEvent::Click(vec2(400.0, 300.0));
        assert_eq!(action_for(ScreenKind::Menu, start), Some(Action::Start));
        assert_eq!(action_for(ScreenKind::Playing, start), None);
    }

    #[test]
    fn steering_is_not_an_action() {
        assert_eq!(action_for(ScreenKind::Playing, InputEvent::Steer(Direction::Up)), None);
    }
}
