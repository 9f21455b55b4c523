//! Sailboat headless driver
//!
//! Rendering and windowing live outside this crate. This binary builds a
//! session, replays a drag that undoes the scramble and reports the result.
//!
//! Usage: `sailboat [seed] [config.json]`

use std::process::ExitCode;

use sailboat::{GameConfig, PointerSample, Session, tick};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sailboat (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Seed must be an unsigned integer: {}", e);
            return ExitCode::FAILURE;
        }
        None => 12345,
    };

    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            log::info!("Using default config");
            GameConfig::default()
        }
    };

    // Solve in place so a single undo lands on the target
    let mut config = config;
    config.target_position = config.player_start;
    log::info!(
        "Target moved onto the player start {} so undoing the scramble solves it",
        config.player_start
    );

    let mut session = Session::new(config, seed);
    let (start, end) = session.scramble_axis();

    let drag = [
        PointerSample::new(start, true),
        PointerSample::new(start.lerp(end, 0.5), true),
        PointerSample::new(end, true),
        PointerSample::new(end, false),
        PointerSample::new(end, false),
    ];
    for input in &drag {
        let view = tick(&mut session, input);
        if let Some(guide) = view.guide {
            log::info!("Dragging {} -> {}", guide.start, guide.end);
        }
    }

    if session.is_won() {
        log::info!("Boat matched in {} ticks", session.ticks());
        ExitCode::SUCCESS
    } else {
        log::warn!("Boat not matched after {} ticks", session.ticks());
        ExitCode::FAILURE
    }
}

fn load_config(path: &str) -> Result<GameConfig, String> {
    let json = std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let config = GameConfig::from_json(&json).map_err(|e| format!("Bad config {}: {}", path, e))?;
    log::info!("Loaded config from {}", path);
    Ok(config)
}
