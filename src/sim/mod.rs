//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order of forms)
//! - No rendering or platform dependencies

pub mod canvas;
pub mod form;
pub mod service;
pub mod state;
pub mod tick;

pub use canvas::Canvas;
pub use form::{Form, FormKind, FormType};
pub use service::FormService;
pub use state::{DivisionOutcome, GameEvent, GameState, RngState};
pub use tick::{TickInput, tick};
