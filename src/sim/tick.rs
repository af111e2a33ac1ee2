//! Fixed timestep simulation tick
//!
//! The host calls `tick` once per animation frame with whatever the user did
//! since the previous frame.

use glam::Vec2;

use super::state::GameState;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start/stop the movement
    pub toggle_running: bool,
    /// New selector value (raw, as typed or picked)
    pub select_form_type: Option<String>,
    /// "Launch a new game!" button
    pub new_game: bool,
    /// "Add Form" button
    pub add: bool,
    /// Click on the canvas (canvas coordinates)
    pub click: Option<Vec2>,
}

/// Apply one frame of input, then advance the forms if running
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.toggle_running {
        state.toggle_running();
    }

    if let Some(name) = &input.select_form_type {
        if let Err(e) = state.select_form_type(name) {
            log::warn!("Ignoring form type selection: {}", e);
        }
    }

    if input.new_game {
        state.launch_new_game();
    }

    if input.add {
        state.add_form();
    }

    if let Some(point) = input.click {
        state.click(point);
    }

    if !state.running {
        return;
    }

    state.move_forms(dt);
    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::Settings;
    use crate::sim::{Form, FormType};

    fn state() -> GameState {
        GameState::new(&Settings::default(), 12345).unwrap()
    }

    #[test]
    fn test_tick_stopped_does_not_move() {
        let mut state = state();
        state.forms.push(Form::square(1, Vec2::new(10.0, 10.0), 20.0, Vec2::new(60.0, 0.0)));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.forms[0].pos, Vec2::new(10.0, 10.0));
        assert_eq!(state.time_ticks, 0);

        state.start();
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!((state.forms[0].pos.x - 11.0).abs() < 1e-4);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_toggle() {
        let mut state = state();
        let input = TickInput {
            toggle_running: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert!(state.running);
        assert_eq!(state.time_ticks, 1);

        tick(&mut state, &input, SIM_DT);
        assert!(!state.running);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_select_then_add() {
        let mut state = state();
        let input = TickInput {
            select_form_type: Some("square".to_string()),
            add: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.current_form_type, Some(FormType::Square));
        assert_eq!(state.forms.len(), 1);
    }

    #[test]
    fn test_tick_add_without_selection() {
        let mut state = state();
        let input = TickInput {
            add: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert!(state.forms.is_empty());
    }

    #[test]
    fn test_tick_bad_selection_ignored() {
        let mut state = state();
        let input = TickInput {
            select_form_type: Some("triangle".to_string()),
            add: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert!(state.current_form_type.is_none());
        assert!(state.forms.is_empty());
    }

    #[test]
    fn test_tick_click_divides() {
        let mut state = state();
        state.forms.push(Form::circle(1, Vec2::new(100.0, 100.0), 30.0, Vec2::ZERO));
        let input = TickInput {
            click: Some(Vec2::new(100.0, 100.0)),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert!(state.form(1).is_none());
        assert_eq!(state.forms.len(), 2);
        assert!(state.score > 0);
    }

    #[test]
    fn test_tick_new_game_resets_score() {
        let mut state = state();
        state.score = 99;
        let input = TickInput {
            new_game: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.score, 0);
        assert!(!state.forms.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = state();
        let mut state2 = state();

        let inputs = [
            TickInput {
                new_game: true,
                toggle_running: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                select_form_type: Some("circle".to_string()),
                add: true,
                ..Default::default()
            },
            TickInput {
                click: Some(Vec2::new(400.0, 300.0)),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in &inputs {
            tick(&mut state1, input, SIM_DT);
            tick(&mut state2, input, SIM_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.forms, state2.forms);
    }
}
