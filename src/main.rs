use log::info;
use macroquad::prelude::*;
use twenty48::{GameConfig, GameState, GridEngine, input, rendering, ui};

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: "2048".to_owned(),
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: config.window.resizable,
        ..Default::default()
    }
}

async fn run(config: GameConfig) {
    let mut state = GameState::new(GridEngine::seeded(config.seed)).with_animation_fps(config.animation_fps);

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        // At most one command reaches the engine per input event
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state);

        // Animation frames run at a fixed rate, independent of vsync
        state = state.advance(get_frame_time());

        clear_background(ui::BACKGROUND_COLOR);
        rendering::draw_board(&state.engine);
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load()?;
    match config.seed {
        Some(seed) => info!("starting with seed {seed}"),
        None => info!("starting with random seed"),
    }

    macroquad::Window::from_config(window_conf(&config), run(config));
    Ok(())
}
