//! Shape Slice entry point
//!
//! Native: loads a level directory and replays scripted swipes through the
//! first level, logging every event. Web: sets up logging and reads the save
//! record; the page drives `Game` through its own bindings.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    use shape_slice::RecordStore;
    use shape_slice::settings::LocalStorageStore;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Shape Slice starting...");
    match LocalStorageStore.load() {
        Ok(record) => log::info!("Highest level reached: {}", record.highest()),
        Err(e) => log::warn!("Save record unavailable: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Shape Slice (native) starting...");

    let mut args = std::env::args().skip(1);
    let level_dir = args.next().unwrap_or_else(|| "levels".to_string());
    let record_path = args.next();

    if let Err(e) = demo::run(&level_dir, record_path.as_deref()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::DVec2;

    use shape_slice::consts::{REF_HEIGHT, REF_WIDTH};
    use shape_slice::geom::BallSnapshot;
    use shape_slice::level::LevelDir;
    use shape_slice::settings::{FileStore, MemoryStore};
    use shape_slice::{Game, GameError, GameEvent, LevelSource, PointerEvent, RecordStore, Tuning};

    /// Pointer travel between samples (level units)
    const SAMPLE_STEP: f64 = 8.0;
    /// Simulated time between samples (ms)
    const SAMPLE_MS: u32 = 16;

    pub fn run(level_dir: &str, record_path: Option<&str>) -> Result<(), GameError> {
        let levels = LevelDir::new(level_dir);
        let tuning = Tuning::default();
        match record_path {
            Some(path) => play(Game::new(levels, FileStore::new(path), tuning)?),
            None => play(Game::new(levels, MemoryStore::new(), tuning)?),
        }
    }

    /// Vertical swipes across the outline until the level is solved or frozen
    fn play<L: LevelSource, S: RecordStore>(mut game: Game<L, S>) -> Result<(), GameError> {
        log_events(&mut game);

        // No physics here: balls stay at their initial placement
        let balls = game.level_data().ball_snapshots();
        let (min, max) = bounds(game.engine().polygon().vertices());
        if min.x < 0.0 || min.y < 0.0 || max.x > REF_WIDTH || max.y > REF_HEIGHT {
            log::warn!(
                "Level {} outline leaves the {}x{} reference area",
                game.level(),
                REF_WIDTH,
                REF_HEIGHT
            );
        }

        for fraction in [0.2, 0.4, 0.6, 0.75, 0.9] {
            if game.is_solved() || game.is_transitioning() {
                break;
            }
            let x = min.x + (max.x - min.x) * fraction;
            swipe(
                &mut game,
                DVec2::new(x, min.y - 10.0),
                DVec2::new(x, max.y + 10.0),
                &balls,
            )?;
        }

        // Let a pending level load fire
        let limit = game
            .tuning()
            .blocked_cooldown_ms
            .max(game.tuning().transition_delay_ms);
        let mut waited = 0;
        while game.is_transitioning() && waited <= limit {
            let dt = game.tuning().poll_interval_ms;
            game.tick(dt, &balls)?;
            waited += dt;
        }
        log_events(&mut game);

        log::info!(
            "Finished on level {} with progress {:.3}",
            game.level(),
            game.progress()
        );
        Ok(())
    }

    fn swipe<L: LevelSource, S: RecordStore>(
        game: &mut Game<L, S>,
        from: DVec2,
        to: DVec2,
        balls: &[BallSnapshot],
    ) -> Result<(), GameError> {
        let samples = ((to - from).length() / SAMPLE_STEP).ceil().max(1.0) as u32;
        game.pointer(PointerEvent::Down(from), balls);
        let mut elapsed = 0;
        for i in 1..=samples {
            let p = from.lerp(to, i as f64 / samples as f64);
            game.pointer(PointerEvent::Move(p), balls);
            elapsed += SAMPLE_MS;
            if elapsed >= game.tuning().poll_interval_ms {
                game.tick(elapsed, balls)?;
                elapsed = 0;
            }
        }
        game.pointer(PointerEvent::Up, balls);
        log_events(game);
        Ok(())
    }

    fn bounds(vertices: &[DVec2]) -> (DVec2, DVec2) {
        vertices.iter().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(min, max), v| (min.min(*v), max.max(*v)),
        )
    }

    fn log_events<L: LevelSource, S: RecordStore>(game: &mut Game<L, S>) {
        for event in game.drain_events() {
            match event {
                GameEvent::ChordChanged(_) => log::debug!("{:?}", event),
                GameEvent::LevelLoaded { id, walls, balls } => log::info!(
                    "Level {} loaded: {} walls, {} balls",
                    id,
                    walls.len(),
                    balls.len()
                ),
                GameEvent::PieceRemoved(piece) => {
                    log::info!("Piece removed ({} vertices)", piece.len())
                }
                GameEvent::Cue(cue) => match cue.sound_asset() {
                    Some(sound) => log::info!("Cue {:?} ({})", cue, sound),
                    None => log::info!("Cue {:?}", cue),
                },
                other => log::info!("{:?}", other),
            }
        }
    }
}
