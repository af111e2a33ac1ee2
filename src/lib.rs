//! Forms Playground - bouncing shapes you can split for points
//!
//! Core modules:
//! - `sim`: Deterministic simulation (forms, movement, division, game state)
//! - `renderer`: SVG snapshot of the board
//! - `settings`: Canvas and balance configuration
//! - `tuning`: Data-driven game balance
//! - `web`: Browser bindings (wasm32 only)

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::GameError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one browser frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default canvas dimensions
    pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

    /// Every form type offered by the selector, including ones not implemented yet
    pub const FORM_TYPES: [&str; 3] = ["circle", "square", "triangle"];

    /// Canvas background color
    pub const BACKGROUND_COLOR: &str = "gray";
}
