//! Simulation engine, the core of the game.
//!
//! `GameEngine` owns the hecs ECS world of butterflies, processes player
//! commands, advances the level/wave state machine and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use netcatch_core::commands::PlayerCommand;
use netcatch_core::components::{Pursuer, SpawnSerial};
use netcatch_core::config::GameConfig;
use netcatch_core::constants::COUNTDOWN_STEP_SECS;
use netcatch_core::enums::{CatchOutcome, CompletionReason, GamePhase};
use netcatch_core::error::Result;
use netcatch_core::events::GameEvent;
use netcatch_core::state::{GameRecord, GameStateSnapshot, SessionState};
use netcatch_core::types::{Position, SimTime};

use crate::leaderboard::LeaderboardSink;
use crate::progression::{LevelAdvance, LevelState, Phase};
use crate::spawn_queue::SpawnQueue;
use crate::systems;
use crate::systems::spawner::PlannedSpawn;
use crate::world_setup;

/// Clamp a host frame delta into `[0, max]`. Non-finite deltas become 0.
pub fn clamp_frame_delta(dt: f64, max: f64) -> f64 {
    if dt.is_finite() {
        dt.clamp(0.0, max)
    } else {
        0.0
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct GameEngine {
    config: GameConfig,
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    progress: LevelState,
    spawn_queue: SpawnQueue,
    pursuer: Pursuer,
    next_serial: u64,
    /// Commands stamped with the epoch they were issued under.
    command_queue: VecDeque<(u64, PlayerCommand)>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    /// Set when a level ends during the current tick.
    transition_began: bool,
    leaderboard: Option<Box<dyn LeaderboardSink>>,
    final_record: Option<GameRecord>,
}

impl GameEngine {
    /// Create a new engine. The game does not start until `start_game`.
    /// Fails if the config does not pass `GameConfig::validate`.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let pursuer = Pursuer {
            position: config.canvas.center(),
            radius: config.pursuer_radius,
        };
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            progress: LevelState::new(),
            spawn_queue: SpawnQueue::default(),
            pursuer,
            next_serial: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            transition_began: false,
            leaderboard: None,
            final_record: None,
            config,
        })
    }

    /// Attach the sink that receives each completed run.
    pub fn with_leaderboard(mut self, sink: impl LeaderboardSink + 'static) -> Self {
        self.leaderboard = Some(Box::new(sink));
        self
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back((self.progress.epoch, command));
    }

    /// Start a session: reset everything and begin the countdown.
    /// Ignored while a session is in progress.
    pub fn start_game(&mut self) -> bool {
        if !matches!(self.progress.phase, Phase::Idle | Phase::Complete) {
            return false;
        }

        self.world.clear();
        self.spawn_queue.clear();
        self.next_serial = 0;
        self.final_record = None;
        self.progress.begin_countdown(self.config.countdown_start);
        info!(
            "game started (seed {}, countdown {})",
            self.config.seed, self.config.countdown_start
        );

        if self.config.countdown_start == 0 {
            self.start_next_level();
        }
        true
    }

    /// Start over after a completed run.
    pub fn play_again(&mut self) -> bool {
        self.progress.phase == Phase::Complete && self.start_game()
    }

    /// Track the pointer.
    pub fn move_pursuer(&mut self, x: f64, y: f64) {
        self.pursuer.position = Position::new(x, y);
    }

    /// Hit-test a click against live butterflies. No-op unless playing.
    /// Returns the outcome for the butterfly hit, or `None` if nothing was.
    pub fn handle_click(&mut self, x: f64, y: f64) -> Option<CatchOutcome> {
        self.move_pursuer(x, y);
        if !self.progress.is_playing() {
            return None;
        }

        let click = Position::new(x, y);
        let resolution = systems::catch::resolve_click(
            &mut self.world,
            &click,
            self.pursuer.radius,
            &mut self.rng,
        )?;

        match resolution.outcome {
            CatchOutcome::Caught => {
                let points = self.progress.record_catch(resolution.level);
                self.events.push(GameEvent::Caught {
                    level: resolution.level,
                    points,
                    boss: resolution.is_boss,
                });
                if resolution.is_boss && self.progress.level.is_max() {
                    self.level_complete(CompletionReason::BossDefeated);
                }
            }
            CatchOutcome::Wounded { remaining } => {
                self.events.push(GameEvent::BossWounded { remaining });
            }
            CatchOutcome::Miss => {}
        }
        Some(resolution.outcome)
    }

    /// Finish the current level. Returns false if the request was ignored
    /// (not playing, e.g. already transitioning).
    pub fn level_complete(&mut self, reason: CompletionReason) -> bool {
        match self.progress.complete_level(self.config.transition_secs) {
            LevelAdvance::Ignored => false,
            LevelAdvance::Advanced { from, to } => {
                self.world.clear();
                self.spawn_queue.clear();
                self.transition_began = true;
                self.events.push(GameEvent::LevelComplete {
                    level: from,
                    reason,
                });
                info!("level {from} complete ({reason:?}), advancing to {to}");
                true
            }
            LevelAdvance::Finished { last } => {
                self.transition_began = true;
                self.events.push(GameEvent::LevelComplete {
                    level: last,
                    reason,
                });
                self.game_complete();
                true
            }
        }
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        let dt = self.sanitize_delta(dt);
        self.transition_began = false;
        let was_playing = self.progress.is_playing();
        self.time.advance(dt);

        match self.progress.phase {
            Phase::Countdown { .. } => {
                if let Some(remaining) = self.progress.advance_countdown(dt, COUNTDOWN_STEP_SECS) {
                    self.events.push(GameEvent::CountdownTick { remaining });
                    if remaining == 0 {
                        self.start_next_level();
                    }
                }
            }
            Phase::Transitioning { .. } => {
                if self.progress.advance_transition(dt) {
                    self.start_next_level();
                }
            }
            Phase::Idle | Phase::Playing | Phase::Complete => {}
        }

        self.process_commands();

        if was_playing && self.progress.is_playing() {
            self.run_systems(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.progress,
            &self.pursuer,
            events,
        )
    }

    /// Compact session summary.
    pub fn state(&self) -> SessionState {
        SessionState {
            level: self.progress.level,
            score: self.progress.score,
            live_entities: world_setup::live_count(&self.world),
            phase: self.progress.phase.kind(),
        }
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.progress.phase.kind()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Level, score and phase state.
    pub fn level_state(&self) -> &LevelState {
        &self.progress
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Spawns still scheduled for the current epoch.
    pub fn pending_spawns(&self) -> usize {
        self.spawn_queue.pending_for(self.progress.epoch)
    }

    /// The record of the last completed run, if the run has ended.
    pub fn final_record(&self) -> Option<&GameRecord> {
        self.final_record.as_ref()
    }

    /// Skip the countdown and begin play at `level` (for tests).
    #[cfg(test)]
    pub fn start_at_level(&mut self, level: netcatch_core::types::Level) {
        self.start_game();
        self.progress.level = level;
        self.start_next_level();
    }

    /// Queue a command as if it had been issued under `epoch` (for tests).
    #[cfg(test)]
    pub fn queue_command_at_epoch(&mut self, epoch: u64, command: PlayerCommand) {
        self.command_queue.push_back((epoch, command));
    }

    /// Process all queued commands. Clicks issued under an older epoch are dropped.
    fn process_commands(&mut self) {
        while let Some((epoch, command)) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::StartGame => {
                    self.start_game();
                }
                PlayerCommand::PlayAgain => {
                    self.play_again();
                }
                PlayerCommand::PointerMove { x, y } => self.move_pursuer(x, y),
                PlayerCommand::Click { x, y } => {
                    if epoch == self.progress.epoch {
                        self.handle_click(x, y);
                    } else {
                        self.move_pursuer(x, y);
                    }
                }
            }
        }
    }

    /// Run one frame of play in order: insertion, flight, cleanup,
    /// completion check, then opportunistic spawns.
    fn run_systems(&mut self, dt: f64) {
        self.progress.level_timer += dt;

        // 1. Deferred insertions for this epoch
        let due = self
            .spawn_queue
            .take_due(self.time.elapsed_secs, self.progress.epoch);
        for blueprint in due {
            let serial = SpawnSerial(self.next_serial);
            self.next_serial += 1;
            world_setup::spawn_butterfly(&mut self.world, blueprint, serial);
        }

        // 2. Flight
        systems::flight::run(
            &mut self.world,
            &mut self.rng,
            &self.config.canvas,
            self.config.offscreen_margin,
            dt,
        );

        // 3. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        // 4. Completion
        let live = world_setup::live_count(&self.world);
        let pending = self.pending_spawns();
        if let Some(reason) = self.progress.completion_due(
            live,
            pending,
            self.config.level_time_limit_secs,
            self.config.completion_guard_secs,
        ) {
            self.level_complete(reason);
        }

        // 5. Opportunistic spawns, never in the tick a level ended
        if self.transition_began || !self.progress.is_playing() {
            return;
        }
        if live < self.config.opportunistic_max_live
            && self.config.opportunistic_chance > 0.0
            && self.rng.gen_bool(self.config.opportunistic_chance)
        {
            let group = systems::spawner::plan_opportunistic_group(
                self.progress.level,
                &self.config.canvas,
                &mut self.rng,
            );
            debug!(
                "opportunistic group of {} at level {}",
                group.len(),
                self.progress.level
            );
            self.schedule(group);
        }
    }

    /// Enter play for the current level and issue its wave.
    fn start_next_level(&mut self) {
        self.progress.start_level();
        let wave = systems::spawner::plan_level_wave(
            self.progress.level,
            self.config.wave_size,
            &self.config.canvas,
            &mut self.rng,
        );
        debug!(
            "level {} wave: {} butterflies",
            self.progress.level,
            wave.len()
        );
        self.schedule(wave);
        self.events.push(GameEvent::LevelStarted {
            level: self.progress.level,
        });
        info!("level {} started", self.progress.level);
    }

    /// Queue planned spawns relative to now under the current epoch.
    fn schedule(&mut self, planned: Vec<PlannedSpawn>) {
        let now = self.time.elapsed_secs;
        for (delay, blueprint) in planned {
            self.spawn_queue
                .schedule(now + delay, self.progress.epoch, blueprint);
        }
    }

    /// End the run and hand the record to the leaderboard once.
    fn game_complete(&mut self) {
        self.world.clear();
        self.spawn_queue.clear();

        let record = GameRecord::new(self.progress.score, self.progress.catch_counts);
        if let Some(sink) = self.leaderboard.as_mut() {
            sink.submit(&record);
        }
        info!(
            "game complete: score {}, {} caught",
            record.score, record.total_caught
        );
        self.events.push(GameEvent::GameComplete {
            record: record.clone(),
        });
        self.final_record = Some(record);
    }

    fn sanitize_delta(&self, dt: f64) -> f64 {
        debug_assert!(
            dt.is_finite() && dt >= 0.0,
            "frame delta must be finite and non-negative, got {dt}"
        );
        let clamped = clamp_frame_delta(dt, self.config.max_frame_delta);
        if clamped != dt {
            warn!("frame delta {dt} clamped to {clamped}");
        }
        clamped
    }
}
