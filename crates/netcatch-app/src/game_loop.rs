//! Game loop thread. Runs the engine at the tick rate and publishes snapshots.
//!
//! The engine is built before the thread starts and is then owned by it
//! alone. Commands arrive over an `mpsc` channel; each tick integrates the
//! measured wall-clock delta (the engine clamps long frames) and stores the
//! snapshot for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::{debug, info};

use netcatch_core::config::GameConfig;
use netcatch_core::constants::TICK_RATE;
use netcatch_core::state::GameStateSnapshot;
use netcatch_sim::engine::GameEngine;

use crate::scoreboard::LoggedLeaderboard;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop in a new thread and return the command sender.
/// An invalid config is reported as `InvalidInput`.
pub fn spawn_game_loop(
    config: GameConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    leaderboard: LoggedLeaderboard,
) -> io::Result<mpsc::Sender<GameLoopCommand>> {
    let engine = GameEngine::new(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
        .with_leaderboard(leaderboard);
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("netcatch-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok(cmd_tx)
}

/// Forward every pending command. Returns false once the loop should stop.
pub fn drain_commands(engine: &mut GameEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: GameEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    info!("game loop running at {TICK_RATE} Hz");
    let mut last_frame = Instant::now();
    let mut next_tick_time = last_frame;

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            break;
        }

        // 2. Advance by the measured frame delta
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;
        let snapshot = engine.tick(dt);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; the engine clamps the long frame
            debug!("game loop fell behind by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }

    info!("game loop stopped");
}
