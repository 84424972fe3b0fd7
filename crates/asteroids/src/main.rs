//! Headless asteroids demo
//!
//! Runs a scripted game and logs frames. Pass a TOML or RON config path as
//! the first argument to override the defaults.

use arcade_engine::config::Config;
use arcade_engine::foundation::logging;
use arcade_engine::input::{InputEvent, KeyCode};
use arcade_engine::{Engine, ScriptedInput};
use asteroids::{AppConfig, GameController, LogRenderer};

fn demo_script() -> ScriptedInput {
    ScriptedInput::new()
        .at(10, InputEvent::char(' '))
        .at(30, InputEvent::code(KeyCode::Right))
        .at(75, InputEvent::KeyUp)
        .at(80, InputEvent::char(' '))
        .at(90, InputEvent::code(KeyCode::Up))
        .at(140, InputEvent::KeyUp)
        .at(150, InputEvent::code(KeyCode::Left))
        .at(170, InputEvent::KeyUp)
        .at(175, InputEvent::char(' '))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };

    logging::init(&config.engine.log_level);
    log::info!("Starting asteroids");

    let mut game = GameController::new(config.game)?;
    let mut engine = Engine::new(config.engine)?;
    let mut renderer = LogRenderer::default();
    let mut script = demo_script();

    let frames = engine.run(&mut game, &mut renderer, &mut script)?;

    match game.game_over_message() {
        Some(message) => log::info!("{} after {} frames", message, frames),
        None => log::info!("Stopped after {} frames with {} asteroids left", frames, game.asteroids().len()),
    }

    Ok(())
}
