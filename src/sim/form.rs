//! Forms: the shapes bouncing around the board
//!
//! A form is a shared body (id, position, velocity) plus per-type geometry.
//! Position is always the top-left corner of the bounding box; anything else
//! (circle center, extents) is derived from it so it can never go stale.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use crate::error::GameError;

/// Selector value for the kind of form to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    Circle,
    Square,
}

impl FormType {
    /// Every type the generator can actually build
    pub const SUPPORTED: [FormType; 2] = [FormType::Circle, FormType::Square];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Circle => "circle",
            FormType::Square => "square",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(FormType::Circle),
            "square" => Ok(FormType::Square),
            "triangle" => Err(GameError::UnsupportedFormType(s.to_string())),
            "" => Err(GameError::NoFormTypeSelected),
            _ => Err(GameError::UnknownFormType(s.to_string())),
        }
    }
}

/// Per-type geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormKind {
    Circle { radius: f32 },
    Square { side: f32 },
}

impl FormKind {
    pub fn form_type(&self) -> FormType {
        match self {
            FormKind::Circle { .. } => FormType::Circle,
            FormKind::Square { .. } => FormType::Square,
        }
    }

    /// Bounding box extent
    pub fn size(&self) -> Vec2 {
        match *self {
            FormKind::Circle { radius } => Vec2::splat(radius * 2.0),
            FormKind::Square { side } => Vec2::splat(side),
        }
    }
}

/// A form on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: u32,
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Pixels per second
    pub vel: Vec2,
    pub kind: FormKind,
}

impl Form {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, kind: FormKind) -> Self {
        Self { id, pos, vel, kind }
    }

    /// Circle placed by its center, like the SVG `<circle>` it renders as
    pub fn circle(id: u32, center: Vec2, radius: f32, vel: Vec2) -> Self {
        Self::new(id, center - Vec2::splat(radius), vel, FormKind::Circle { radius })
    }

    pub fn square(id: u32, pos: Vec2, side: f32, vel: Vec2) -> Self {
        Self::new(id, pos, vel, FormKind::Square { side })
    }

    #[inline]
    pub fn form_type(&self) -> FormType {
        self.kind.form_type()
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.kind.size()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size().x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size().y
    }

    /// Center of the bounding box (the circle center for circles)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size() * 0.5
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Whether a canvas point hits this form
    pub fn contains_point(&self, point: Vec2) -> bool {
        match self.kind {
            FormKind::Circle { radius } => point.distance_squared(self.center()) <= radius * radius,
            FormKind::Square { side } => {
                let local = point - self.pos;
                local.x >= 0.0 && local.y >= 0.0 && local.x <= side && local.y <= side
            }
        }
    }

    /// Advance by one timestep, bouncing off the canvas edges.
    ///
    /// On each axis where the new position would leave the canvas the velocity
    /// component is turned back inward and the position clamped to the edge.
    pub fn step(&mut self, canvas: &Canvas, dt: f32) {
        let max = canvas.max_origin(self.size());
        let mut pos = self.pos + self.vel * dt;

        if pos.x < 0.0 {
            pos.x = 0.0;
            self.vel.x = self.vel.x.abs();
        } else if pos.x > max.x {
            pos.x = max.x;
            self.vel.x = -self.vel.x.abs();
        }

        if pos.y < 0.0 {
            pos.y = 0.0;
            self.vel.y = self.vel.y.abs();
        } else if pos.y > max.y {
            pos.y = max.y;
            self.vel.y = -self.vel.y.abs();
        }

        self.set_position(pos);
    }
}
