//! Forms Playground entry point
//!
//! The browser build is driven by `web::FormsApp`; natively this runs a
//! headless session: a new game, a few seconds of frames, random clicks.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use forms_playground::consts::SIM_DT;
    use forms_playground::renderer::render_svg;
    use forms_playground::sim::{GameEvent, GameState, TickInput, tick};
    use forms_playground::{GameError, Settings};

    /// Frames to simulate (10 seconds)
    const FRAMES: u32 = 600;
    /// Click a form every this many frames
    const CLICK_EVERY: u32 = 30;

    pub fn run() -> Result<(), GameError> {
        let mut settings_path = None;
        let mut print_svg = false;
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--svg" => print_svg = true,
                _ => settings_path = Some(arg),
            }
        }

        let settings = match settings_path {
            Some(path) => Settings::load_from(path)?,
            None => Settings::default(),
        };

        let clock_seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let seed = settings.seed_or(clock_seed);
        log::info!("Seed: {}", seed);

        let mut state = GameState::new(&settings, seed)?;
        state.start();
        tick(
            &mut state,
            &TickInput {
                new_game: true,
                ..Default::default()
            },
            SIM_DT,
        );

        // The "player" gets its own stream so it never perturbs the game RNG
        let mut player = Pcg32::seed_from_u64(seed ^ 0xC1C1);

        for frame in 1..=FRAMES {
            let mut input = TickInput::default();
            if frame % CLICK_EVERY == 0 && !state.forms.is_empty() {
                let target = &state.forms[player.random_range(0..state.forms.len())];
                input.click = Some(target.center());
            }
            tick(&mut state, &input, SIM_DT);

            for event in state.drain_events() {
                match event {
                    GameEvent::FormDivided { id, offspring, points } => log::info!(
                        "Frame {}: divided #{} into {} (+{}), score {}",
                        frame,
                        id,
                        offspring,
                        points,
                        state.score
                    ),
                    other => log::debug!("Frame {}: {:?}", frame, other),
                }
            }

            if state.forms.is_empty() {
                log::info!("Board cleared at frame {}", frame);
                break;
            }
        }

        log::info!(
            "Finished after {} ticks: score {}, {} forms left",
            state.time_ticks,
            state.score,
            state.forms.len()
        );

        if print_svg {
            println!("{}", render_svg(&state));
        } else {
            println!("Score : {}", state.score);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Forms Playground (native) starting...");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::FormsApp, this is just to satisfy the compiler
}
