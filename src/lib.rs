//! Donut Runner
//!
//! A torus jumps over incoming cubes. Runs natively and in the browser.

pub mod app;

use anyhow::Context as _;
use donut_game::GameConfig;
use three_d::{Window, WindowSettings};

use app::App;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "DONUT_RUNNER_CONFIG";

/// Open the window and run the game until it is closed.
pub fn run() -> anyhow::Result<()> {
    let config = load_config()?;

    let window = Window::new(WindowSettings {
        title: config.render.title.clone(),
        #[cfg(not(target_arch = "wasm32"))]
        max_size: Some((1280, 720)),
        ..Default::default()
    })?;

    let context = window.gl();
    let mut app = App::new(&context, window.viewport(), config);

    log::info!("Starting Donut Runner");
    window.render_loop(move |frame_input| app.frame(frame_input));

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> anyhow::Result<GameConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let config = GameConfig::load(&path)
                .with_context(|| format!("loading config from {}", path.to_string_lossy()))?;
            log::info!("Loaded config from {}", path.to_string_lossy());
            Ok(config)
        }
        None => {
            log::info!("{CONFIG_ENV} not set, using default config");
            Ok(GameConfig::default())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> anyhow::Result<GameConfig> {
    Ok(GameConfig::default())
}

/// WASM entry point - called from JavaScript.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Err means a logger is already installed, which is fine
    console_log::init_with_level(log::Level::Info).ok();

    if let Err(e) = run() {
        log::error!("Fatal error: {e:#}");
    }
}
