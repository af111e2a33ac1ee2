//! Game state: the board controller
//!
//! Owns the form collection and the score, and is the only thing that mutates
//! either. Everything except the transient event log is serializable.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::form::{Form, FormType};
use super::service::FormService;
use crate::error::{GameError, Result};
use crate::settings::Settings;

/// Something the host may want to react to (HUD refresh, sounds, logs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FormAdded { id: u32, form_type: FormType },
    FormDivided { id: u32, offspring: usize, points: u64 },
    NewGame { forms: usize },
    RunningChanged { running: bool },
}

/// Most events kept between drains
pub const MAX_PENDING_EVENTS: usize = 1024;

/// Result of dividing one form
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionOutcome {
    /// The form that was removed
    pub divided: Form,
    /// Ids of the forms appended in its place
    pub offspring: Vec<u32>,
    /// Points added to the score
    pub points: u64,
}

/// RNG state wrapper for serialization
///
/// Each draw group gets its own generator derived from the seed and a stream
/// counter, so saving `(seed, stream)` is enough to resume deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next draw group
    pub fn fork(&mut self) -> Pcg32 {
        let mixed = self
            .seed
            .wrapping_add(self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.stream += 1;
        Pcg32::seed_from_u64(mixed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Drawing surface bounds
    pub canvas: Canvas,
    /// Generation and division policy
    pub service: FormService,
    /// Type spawned by "add"; `None` until the user picks one
    pub current_form_type: Option<FormType>,
    /// Forms on the board, in insertion order
    pub forms: Vec<Form>,
    /// Score
    pub score: u64,
    /// Whether ticks move the forms
    pub running: bool,
    /// Simulation tick counter (only counts running ticks)
    pub time_ticks: u64,
    /// Events since the host last drained them. Capped at
    /// `MAX_PENDING_EVENTS`; the oldest are dropped when nobody drains.
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an empty, stopped board
    pub fn new(settings: &Settings, seed: u64) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            seed,
            rng_state: RngState::new(seed),
            canvas: settings.canvas()?,
            service: FormService::new(settings.tuning.clone()),
            current_form_type: settings.default_form_type,
            forms: Vec::new(),
            score: 0,
            running: false,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start the frame loop
    pub fn start(&mut self) {
        self.set_running(true);
    }

    pub fn toggle_running(&mut self) {
        self.set_running(!self.running);
    }

    fn set_running(&mut self, running: bool) {
        if self.running != running {
            self.running = running;
            self.emit(GameEvent::RunningChanged { running });
        }
    }

    /// Change the selector value. A bad name leaves the selection untouched.
    pub fn select_form_type(&mut self, name: &str) -> Result<FormType> {
        let form_type: FormType = name.parse()?;
        self.current_form_type = Some(form_type);
        Ok(form_type)
    }

    /// Add one form of the selected type. Without a selection this only warns.
    pub fn add_form(&mut self) -> Option<u32> {
        let Some(form_type) = self.current_form_type else {
            log::warn!("No form type selected..");
            return None;
        };
        Some(self.spawn(form_type))
    }

    fn spawn(&mut self, form_type: FormType) -> u32 {
        let mut rng = self.rng_state.fork();
        let mut form = self.service.generate_form(form_type, &self.canvas, &mut rng);
        let id = self.next_entity_id();
        form.id = id;
        self.forms.push(form);
        self.emit(GameEvent::FormAdded { id, form_type });
        id
    }

    /// Move every form one timestep
    pub fn move_forms(&mut self, dt: f32) {
        let canvas = self.canvas;
        for form in &mut self.forms {
            form.step(&canvas, dt);
        }
    }

    pub fn form(&self, id: u32) -> Option<&Form> {
        self.forms.iter().find(|f| f.id == id)
    }

    /// Topmost form under a canvas point (the one drawn last)
    pub fn form_at(&self, point: Vec2) -> Option<&Form> {
        self.forms.iter().rev().find(|f| f.contains_point(point))
    }

    /// Remove a form, append what it breaks into and pay out its points
    pub fn divide(&mut self, id: u32) -> Result<DivisionOutcome> {
        let index = self
            .forms
            .iter()
            .position(|f| f.id == id)
            .ok_or(GameError::FormNotFound(id))?;

        let mut rng = self.rng_state.fork();
        let children = self.service.divide(&self.forms[index], &mut rng);
        let divided = self.forms.remove(index);

        let mut offspring = Vec::with_capacity(children.len());
        for mut child in children {
            child.id = self.next_entity_id();
            offspring.push(child.id);
            self.forms.push(child);
        }

        let points = self.service.score_value(&divided);
        self.score = self.score.saturating_add(points);

        log::debug!(
            "Divided {} #{} into {} (+{} points, score {})",
            divided.form_type(),
            id,
            offspring.len(),
            points,
            self.score
        );
        self.emit(GameEvent::FormDivided {
            id,
            offspring: offspring.len(),
            points,
        });

        Ok(DivisionOutcome {
            divided,
            offspring,
            points,
        })
    }

    /// Divide whatever form is under the point, if any
    pub fn click(&mut self, point: Vec2) -> Option<DivisionOutcome> {
        let id = self.form_at(point)?.id;
        self.divide(id).ok()
    }

    /// Reset the score, clear the board and fill it with a random number of
    /// forms. Uses the selected type, or a random type per form when nothing
    /// is selected.
    pub fn launch_new_game(&mut self) {
        self.score = 0;
        self.forms.clear();

        let tuning = &self.service.tuning;
        let (min, max) = (tuning.min_forms, tuning.max_forms);
        let mut rng = self.rng_state.fork();
        let count = rng.random_range(min..=max) as usize;

        for _ in 0..count {
            let form_type = match self.current_form_type {
                Some(t) => t,
                None => FormType::SUPPORTED[rng.random_range(0..FormType::SUPPORTED.len())],
            };
            self.spawn(form_type);
        }

        log::info!("New game with {} forms", count);
        self.emit(GameEvent::NewGame { forms: count });
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
