//! Form generation and division
//!
//! The factory side spawns fresh forms somewhere on the canvas; the policy side
//! decides what a form breaks into when divided. Both draw from a caller-owned
//! RNG so the simulation stays deterministic.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::form::{Form, FormKind, FormType};
use crate::tuning::Tuning;

/// Id given to forms the service builds; the game state assigns real ids
pub const UNASSIGNED_ID: u32 = 0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormService {
    pub tuning: Tuning,
}

impl FormService {
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning }
    }

    /// Build a form of the requested type with random size, placement and
    /// heading, fully inside the canvas
    pub fn generate_form<R: Rng>(&self, form_type: FormType, canvas: &Canvas, rng: &mut R) -> Form {
        let t = &self.tuning;
        let fit = canvas.width.min(canvas.height);

        let kind = match form_type {
            FormType::Circle => {
                let radius = rng.random_range(t.min_circle_radius..=t.max_circle_radius);
                FormKind::Circle {
                    radius: radius.min(fit / 2.0),
                }
            }
            FormType::Square => {
                let side = rng.random_range(t.min_square_side..=t.max_square_side);
                FormKind::Square { side: side.min(fit) }
            }
        };

        let max = canvas.max_origin(kind.size());
        let pos = Vec2::new(
            rng.random_range(0.0..=max.x),
            rng.random_range(0.0..=max.y),
        );

        let heading = rng.random_range(0.0..TAU);
        let speed = rng.random_range(t.min_speed..=t.max_speed);
        let vel = Vec2::from_angle(heading) * speed;

        Form::new(UNASSIGNED_ID, pos, vel, kind)
    }

    /// Points awarded for dividing this form
    pub fn score_value(&self, form: &Form) -> u64 {
        self.tuning.points_for_width(form.width())
    }

    /// What a form breaks into. Empty once the pieces would be too small.
    ///
    /// Offspring tile the parent's bounding box and fly away from its center at
    /// the parent's speed, so they start inside the canvas whenever the parent
    /// was.
    pub fn divide<R: Rng>(&self, form: &Form, rng: &mut R) -> Vec<Form> {
        let t = &self.tuning;
        let speed = form.vel.length().max(t.min_speed);
        let center = form.center();

        match form.kind {
            FormKind::Circle { radius } => {
                let child_radius = radius / 2.0;
                if child_radius < t.min_split_radius {
                    return Vec::new();
                }
                [-1.0f32, 1.0]
                    .into_iter()
                    .map(|side| {
                        let child_center = center + Vec2::new(side * child_radius, 0.0);
                        let dir = self.jitter(Vec2::new(side, 0.0), rng);
                        Form::circle(UNASSIGNED_ID, child_center, child_radius, dir * speed)
                    })
                    .collect()
            }
            FormKind::Square { side } => {
                let child_side = side / 2.0;
                if child_side < t.min_split_side {
                    return Vec::new();
                }
                [(0.0f32, 0.0f32), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
                    .into_iter()
                    .map(|(qx, qy)| {
                        let pos = form.pos + Vec2::new(qx, qy) * child_side;
                        let outward = Vec2::new(qx * 2.0 - 1.0, qy * 2.0 - 1.0).normalize();
                        let dir = self.jitter(outward, rng);
                        Form::square(UNASSIGNED_ID, pos, child_side, dir * speed)
                    })
                    .collect()
            }
        }
    }

    /// Rotate a unit direction by a random angle within the split jitter
    fn jitter<R: Rng>(&self, dir: Vec2, rng: &mut R) -> Vec2 {
        let j = self.tuning.split_jitter;
        if j <= 0.0 {
            return dir;
        }
        Vec2::from_angle(rng.random_range(-j..=j)).rotate(dir)
    }
}
