//! Browser bindings
//!
//! The page owns the DOM and the `requestAnimationFrame` loop; it calls
//! `frame()` each animation frame and swaps in `svg()` output.

use std::sync::Once;

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::consts::{FORM_TYPES, SIM_DT};
use crate::renderer::render_svg;
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, tick};

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        // Another module may have installed a logger already
        let _ = console_log::init_with_level(log::Level::Info);
    });
}

#[wasm_bindgen]
pub struct FormsApp {
    state: GameState,
    input: TickInput,
}

#[wasm_bindgen]
impl FormsApp {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<FormsApp, JsValue> {
        init_logging();

        let settings = Settings::with_canvas(width, height);
        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let mut state =
            GameState::new(&settings, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        state.start();

        log::info!("Forms playground {}x{} (seed {})", width, height, seed);
        Ok(Self {
            state,
            input: TickInput::default(),
        })
    }

    /// Names for the type selector
    pub fn form_types() -> Vec<JsValue> {
        FORM_TYPES.iter().map(|t| JsValue::from_str(t)).collect()
    }

    pub fn select_form_type(&mut self, name: &str) {
        self.input.select_form_type = Some(name.to_string());
    }

    pub fn add(&mut self) {
        self.input.add = true;
    }

    pub fn launch_new_game(&mut self) {
        self.input.new_game = true;
    }

    pub fn click(&mut self, x: f32, y: f32) {
        self.input.click = Some(Vec2::new(x, y));
    }

    pub fn toggle_running(&mut self) {
        self.input.toggle_running = true;
    }

    /// Run one tick with the input gathered since the last frame.
    /// Returns false once the game is stopped so the page can stop scheduling.
    pub fn frame(&mut self) -> bool {
        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input, SIM_DT);
        for event in self.state.drain_events() {
            log::debug!("{:?}", event);
        }
        self.state.running
    }

    pub fn running(&self) -> bool {
        self.state.running
    }

    pub fn score(&self) -> f64 {
        self.state.score as f64
    }

    pub fn form_count(&self) -> usize {
        self.state.forms.len()
    }

    pub fn svg(&self) -> String {
        render_svg(&self.state)
    }
}
