//! Data-driven game balance
//!
//! All the numbers that shape a game: how many forms a new game spawns, how big
//! and fast they are, when division stops and how many points it pays.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Upper bound on `point_scale`
pub const MAX_POINT_SCALE: f32 = 1.0e6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fewest forms spawned by a new game
    pub min_forms: u32,
    /// Most forms spawned by a new game (inclusive)
    pub max_forms: u32,

    /// Circle radius range for freshly generated circles (pixels)
    pub min_circle_radius: f32,
    pub max_circle_radius: f32,
    /// Square side range for freshly generated squares (pixels)
    pub min_square_side: f32,
    pub max_square_side: f32,

    /// Speed range (pixels/second)
    pub min_speed: f32,
    pub max_speed: f32,

    /// Offspring smaller than this are not produced (circle radius, pixels)
    pub min_split_radius: f32,
    /// Offspring smaller than this are not produced (square side, pixels)
    pub min_split_side: f32,
    /// Max random deviation of offspring heading (radians)
    pub split_jitter: f32,

    /// Points = ceil(point_scale / width), at least 1
    pub point_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            min_forms: 1,
            max_forms: 20,

            min_circle_radius: 20.0,
            max_circle_radius: 60.0,
            min_square_side: 40.0,
            max_square_side: 120.0,

            min_speed: 60.0,
            max_speed: 180.0,

            min_split_radius: 5.0,
            min_split_side: 10.0,
            split_jitter: 0.35,

            point_scale: 400.0,
        }
    }
}

impl Tuning {
    /// Reject ranges that would make generation or division meaningless
    pub fn validate(&self) -> Result<()> {
        fn check_range(name: &str, lo: f32, hi: f32) -> Result<()> {
            if !(lo > 0.0 && lo <= hi && hi.is_finite()) {
                return Err(GameError::InvalidTuning(format!(
                    "{name} range [{lo}, {hi}] must be positive and ordered"
                )));
            }
            Ok(())
        }

        if self.min_forms > self.max_forms {
            return Err(GameError::InvalidTuning(format!(
                "min_forms {} exceeds max_forms {}",
                self.min_forms, self.max_forms
            )));
        }
        check_range("circle radius", self.min_circle_radius, self.max_circle_radius)?;
        check_range("square side", self.min_square_side, self.max_square_side)?;
        check_range("speed", self.min_speed, self.max_speed)?;
        for (name, value) in [
            ("min_split_radius", self.min_split_radius),
            ("min_split_side", self.min_split_side),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidTuning(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if !(self.split_jitter.is_finite() && self.split_jitter >= 0.0) {
            return Err(GameError::InvalidTuning(format!(
                "split_jitter must be finite and not negative, got {}",
                self.split_jitter
            )));
        }
        if !(self.point_scale.is_finite()
            && self.point_scale > 0.0
            && self.point_scale <= MAX_POINT_SCALE)
        {
            return Err(GameError::InvalidTuning(format!(
                "point_scale must be in (0, {MAX_POINT_SCALE}], got {}",
                self.point_scale
            )));
        }
        Ok(())
    }

    /// Points awarded for dividing a form of the given width
    pub fn points_for_width(&self, width: f32) -> u64 {
        if width <= 0.0 {
            return 1;
        }
        ((self.point_scale / width).ceil() as u64).max(1)
    }
}
