//! Burger Defense headless driver
//!
//! Runs the simulation without a window: an autopilot steers the burger, sound
//! cues go to the log, and the final score is printed when the burger dies or
//! the frame budget runs out.
//!
//! Usage: burger-defense [--seed N] [--frames N] [--settings PATH] [--print-settings]

use glam::Vec2;

use burger_defense::Settings;
use burger_defense::audio::LogSink;
use burger_defense::consts::*;
use burger_defense::renderer::build_draw_list;
use burger_defense::sim::{GamePhase, GameState, ProjectileKind, RandomSource, TickInput, tick};

/// Wall-clock frame length the driver pretends to render at (30 FPS)
const FRAME_TIME: f32 = 1.0 / 30.0;
/// Default frame budget (two minutes at 30 FPS)
const DEFAULT_FRAMES: u64 = 3600;

/// Game instance holding all state
struct Game {
    state: GameState,
    sounds: LogSink,
    accumulator: f32,
    input: TickInput,
}

impl Game {
    fn new(settings: Settings, rng: RandomSource) -> Self {
        Self {
            state: GameState::new(settings, rng),
            sounds: LogSink::new(),
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    /// Steer toward the lowest bear and keep firing; sidestep incoming shots
    fn autopilot(&mut self) {
        let player = self.state.player.pos;

        let target = self
            .state
            .enemies
            .iter()
            .filter(|e| e.active)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|e| e.pos.x);

        let threat = self.state.projectiles.iter().find(|p| {
            p.kind == ProjectileKind::EnemyThrown
                && p.pos.y < player.y
                && (p.pos.x - player.x).abs() < PLAYER_WIDTH as f32
        });

        let dx = match (threat, target) {
            (Some(shot), _) => {
                if shot.pos.x >= player.x {
                    -1.0
                } else {
                    1.0
                }
            }
            (None, Some(x)) if (x - player.x).abs() > 4.0 => (x - player.x).signum(),
            _ => 0.0,
        };

        self.input.movement = Vec2::new(dx, 0.0);
        self.input.fire = true;
    }

    /// Run simulation ticks for one rendered frame
    fn update(&mut self, frame_dt: f32) {
        self.accumulator += frame_dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.autopilot();
            tick(&mut self.state, &self.input, SIM_DT, &mut self.sounds);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.pause = false;
            self.input.quit = false;
        }
    }

    fn is_over(&self) -> bool {
        self.state.phase == GamePhase::Ended || self.state.quit_requested
    }
}

struct Args {
    seed: Option<u64>,
    frames: u64,
    settings: Option<String>,
    print_settings: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: None,
        frames: DEFAULT_FRAMES,
        settings: None,
        print_settings: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = Some(value.parse().map_err(|_| format!("bad seed: {value}"))?);
            }
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.frames = value.parse().map_err(|_| format!("bad frame count: {value}"))?;
            }
            "--settings" => {
                args.settings = Some(iter.next().ok_or("--settings needs a path")?);
            }
            "--print-settings" => args.print_settings = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!(
                "usage: burger-defense [--seed N] [--frames N] [--settings PATH] [--print-settings]"
            );
            std::process::exit(2);
        }
    };

    let settings = match &args.settings {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    if args.print_settings {
        match settings.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
        return;
    }

    let rng = match args.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };
    log::info!("Burger Defense (headless) starting...");

    let (width, height) = (settings.world_width, settings.world_height);
    let mut game = Game::new(settings, rng);

    let mut frames = 0;
    while frames < args.frames && !game.is_over() {
        game.update(FRAME_TIME);
        let draw_list = build_draw_list(&game.state.snapshot(), width, height);
        log::trace!("frame {frames}: {} draw items", draw_list.len());
        frames += 1;
    }

    log::info!(
        "Stopped after {frames} frames ({} sound cues)",
        game.sounds.played()
    );
    println!("{}", game.state.health_text());
    println!("{}", game.state.score_text());
    if game.state.phase == GamePhase::Ended {
        println!("You Lost! Final Score: {}", game.state.score);
    }
}
