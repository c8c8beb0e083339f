//! Drawing and clickable regions for every screen.

use macroquad::prelude::*;

use crate::game::{
    ARENA_BORDER, BACKGROUND, BUTTON_TEXT, FONT_SIZE, FOREGROUND, HUD_HEIGHT, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use crate::screen::{Action, Screen, ScreenKind};
use crate::session::GameSession;

const BUTTON_WIDTH: f32 = 250.0;
const BUTTON_HEIGHT: f32 = 100.0;
const LINE_SPACING: f32 = 50.0;

const HELP_LINES: [&str; 4] = [
    "Help Screen",
    "",
    "Use arrow keys to move",
    "Each score of 5 increase speed by 2",
];

/// A labelled rectangle that triggers `action` when clicked.
#[derive(Clone, Copy, Debug)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub action: Action,
}

impl Button {
    /// Button horizontally centred on the board, `dy` below the vertical middle.
    fn centred(label: &'static str, dy: f32, action: Action) -> Self {
        let cx = SCREEN_WIDTH as f32 / 2.0;
        let cy = SCREEN_HEIGHT as f32 / 2.0;
        Self {
            label,
            rect: Rect::new(cx - BUTTON_WIDTH / 2.0, cy + dy, BUTTON_WIDTH, BUTTON_HEIGHT),
            action,
        }
    }

    fn draw(&self) {
        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, FOREGROUND);
        draw_centred_text(self.label, self.rect.center(), BUTTON_TEXT);
    }
}

/// Buttons shown on a screen. Playing has none.
pub fn buttons(kind: ScreenKind) -> Vec<Button> {
    match kind {
        ScreenKind::Menu => vec![
            Button::centred("Start Game", -50.0, Action::Start),
            Button::centred("Help", 60.0, Action::ShowHelp),
        ],
        ScreenKind::Help => vec![Button::centred("Back", 180.0, Action::Back)],
        ScreenKind::GameOver => vec![Button::centred("Restart", 120.0, Action::Restart)],
        ScreenKind::Playing => Vec::new(),
    }
}

/// Action of the button under `point`, if any.
pub fn action_at(kind: ScreenKind, point: Vec2) -> Option<Action> {
    buttons(kind)
        .into_iter()
        .find(|button| button.rect.contains(point))
        .map(|button| button.action)
}

pub fn draw(screen: &Screen) {
    clear_background(BACKGROUND);
    match screen {
        Screen::Menu => draw_menu(),
        Screen::Help => draw_lines(&HELP_LINES),
        Screen::Playing(session) => draw_session(session),
        Screen::GameOver { score } => {
            let score_line = format!("Score: {score}");
            draw_lines(&["Game Over", score_line.as_str()]);
        }
    }
    for button in buttons(screen.kind()) {
        button.draw();
    }
}

fn draw_menu() {
    let title = "SNAKE";
    let centre = vec2(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 4.0);
    draw_centred_text(title, centre, FOREGROUND);
}

fn draw_session(session: &GameSession) {
    let snake = session.snake();
    let size = snake.segment_size() as f32;
    for segment in snake.body() {
        draw_rectangle(segment.x as f32, segment.y as f32, size, size, FOREGROUND);
    }

    let food = session.food();
    draw_rectangle(
        food.position.x as f32,
        food.position.y as f32,
        food.size as f32,
        food.size as f32,
        FOREGROUND,
    );

    // HUD: speed on the left, score on the right
    let baseline = 10.0 + FONT_SIZE * 0.75;
    draw_text(&format!("Speed: {}", session.speed()), 10.0, baseline, FONT_SIZE, FOREGROUND);
    let score = format!("Score: {}", session.score());
    let m = measure_text(&score, None, FONT_SIZE as u16, 1.0);
    draw_text(
        &score,
        SCREEN_WIDTH as f32 - 10.0 - m.width,
        baseline,
        FONT_SIZE,
        FOREGROUND,
    );

    draw_rectangle_lines(
        0.0,
        HUD_HEIGHT as f32,
        SCREEN_WIDTH as f32,
        SCREEN_HEIGHT as f32,
        ARENA_BORDER,
        FOREGROUND,
    );
}

// Lines stack downwards from the middle of the board.
fn line_centre(index: usize) -> Vec2 {
    vec2(
        SCREEN_WIDTH as f32 / 2.0,
        SCREEN_HEIGHT as f32 / 2.0 + index as f32 * LINE_SPACING,
    )
}

fn draw_lines(lines: &[&str]) {
    for (i, line) in lines.iter().enumerate() {
        draw_centred_text(line, line_centre(i), FOREGROUND);
    }
}

fn draw_centred_text(text: &str, centre: Vec2, color: Color) {
    if text.is_empty() {
        return;
    }
    let m = measure_text(text, None, FONT_SIZE as u16, 1.0);
    draw_text(
        text,
        centre.x - m.width / 2.0,
        centre.y + m.offset_y / 2.0,
        FONT_SIZE,
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_clicks_hit_their_buttons() {
        assert_eq!(action_at(ScreenKind::Menu, vec2(400.0, 300.0)), Some(Action::Start));
        assert_eq!(action_at(ScreenKind::Menu, vec2(400.0, 400.0)), Some(Action::ShowHelp));
    }

    #[test]
    fn clicks_outside_any_button_are_ignored() {
        assert_eq!(action_at(ScreenKind::Menu, vec2(10.0, 10.0)), None);
        assert_eq!(action_at(ScreenKind::Playing, vec2(400.0, 300.0)), None);
        // between the two menu buttons
        assert_eq!(action_at(ScreenKind::Menu, vec2(400.0, 355.0)), None);
    }

    #[test]
    fn game_over_offers_restart_and_help_offers_back() {
        assert_eq!(action_at(ScreenKind::GameOver, vec2(400.0, 470.0)), Some(Action::Restart));
        assert_eq!(action_at(ScreenKind::Help, vec2(400.0, 530.0)), Some(Action::Back));
        assert_eq!(action_at(ScreenKind::GameOver, vec2(400.0, 300.0)), None);
    }

    #[test]
    fn help_text_stays_clear_of_its_buttons() {
        for (i, line) in HELP_LINES.iter().enumerate() {
            let centre = line_centre(i);
            for button in buttons(ScreenKind::Help) {
                let top = centre.y - FONT_SIZE / 2.0;
                let bottom = centre.y + FONT_SIZE / 2.0;
                assert!(
                    bottom < button.rect.y || top > button.rect.y + button.rect.h,
                    "{line:?} at y={} overlaps {} button",
                    centre.y,
                    button.label
                );
            }
        }
    }
}
