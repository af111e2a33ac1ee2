//! Canvas bounds
//!
//! The drawing surface is an axis-aligned rectangle with its origin at the top
//! left, y pointing down (SVG convention).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GameError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Largest top-left coordinate at which a box of `size` still fits.
    /// Zero on any axis where the box is bigger than the canvas.
    #[inline]
    pub fn max_origin(&self, size: Vec2) -> Vec2 {
        (self.size() - size).max(Vec2::ZERO)
    }

    /// Whether a box at `origin` with `size` lies fully inside (with tolerance
    /// for float rounding)
    pub fn contains_box(&self, origin: Vec2, size: Vec2) -> bool {
        const EPS: f32 = 1e-3;
        origin.x >= -EPS
            && origin.y >= -EPS
            && origin.x + size.x <= self.width + EPS
            && origin.y + size.y <= self.height + EPS
    }
}
