use macroquad::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod audio;
mod food;
mod game;
mod input;
mod screen;
mod session;
mod settings;
mod snake;
mod ui;

use audio::Sounds;
use game::{SCREEN_HEIGHT, SCREEN_WIDTH};
use input::InputEvent;
use screen::{Flow, ScreenController};
use settings::{SETTINGS_PATH, Settings};

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let settings = Settings::load(SETTINGS_PATH).unwrap_or_else(|err| {
        warn!(error = ?err, "using default settings");
        Settings::default()
    });
    let sounds = match Sounds::load().await {
        Ok(sounds) => Some(sounds),
        Err(err) => {
            warn!(error = ?err, "audio disabled");
            None
        }
    };
    let volume = settings.volume();
    info!(volume, audio = sounds.is_some(), "starting");

    let mut controller = ScreenController::new();
    let mut cues = Vec::new();

    loop {
        let now = get_time();

        // Input is applied before the step that consumes it
        for event in input::poll() {
            if let InputEvent::Steer(direction) = event {
                controller.steer(direction);
                continue;
            }
            if let Some(action) = input::action_for(controller.kind(), event)
                && controller.apply(action, now) == Flow::Quit
            {
                info!("quit requested");
                return;
            }
        }

        controller.tick(now, &mut cues);
        for cue in cues.drain(..) {
            if let Some(sounds) = &sounds {
                sounds.play(cue, volume);
            }
        }

        ui::draw(controller.screen());

        next_frame().await;
    }
}
