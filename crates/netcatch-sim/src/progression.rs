//! Level/wave state machine.
//!
//! Pure state transitions over plain data; the engine performs the world
//! mutations (clearing butterflies, issuing waves) each transition implies.
//! Every transition bumps `epoch`, which invalidates deferred spawns and
//! queued clicks issued under the previous state.

use netcatch_core::enums::{CompletionReason, GamePhase};
use netcatch_core::state::CatchCounts;
use netcatch_core::types::Level;

/// The active sub-state. Exactly one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Countdown {
        remaining: u32,
        /// Seconds accumulated toward the next step.
        step_timer: f64,
    },
    Playing,
    Transitioning {
        elapsed: f64,
        duration: f64,
    },
    Complete,
}

impl Phase {
    pub fn kind(&self) -> GamePhase {
        match self {
            Phase::Idle => GamePhase::Idle,
            Phase::Countdown { .. } => GamePhase::Countdown,
            Phase::Playing => GamePhase::Playing,
            Phase::Transitioning { .. } => GamePhase::Transitioning,
            Phase::Complete => GamePhase::Complete,
        }
    }
}

/// Result of a `complete_level` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAdvance {
    /// Not playing (already transitioning, counting down, or finished).
    Ignored,
    /// Moved on to `to`; a transition is now running.
    Advanced { from: Level, to: Level },
    /// The last level was finished; the run is complete.
    Finished { last: Level },
}

/// Level, score and phase for one session.
#[derive(Debug, Clone, Default)]
pub struct LevelState {
    pub level: Level,
    /// Seconds elapsed in the current level.
    pub level_timer: f64,
    pub score: u32,
    pub catch_counts: CatchCounts,
    pub epoch: u64,
    pub phase: Phase,
}

impl LevelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every session field and enter the countdown.
    /// The epoch keeps counting so nothing from a previous session survives.
    pub fn begin_countdown(&mut self, start: u32) {
        let epoch = self.epoch + 1;
        *self = Self {
            epoch,
            phase: Phase::Countdown {
                remaining: start,
                step_timer: 0.0,
            },
            ..Self::default()
        };
    }

    /// Advance the countdown. Returns the new value when it stepped.
    pub fn advance_countdown(&mut self, dt: f64, step_secs: f64) -> Option<u32> {
        let Phase::Countdown {
            remaining,
            step_timer,
        } = &mut self.phase
        else {
            return None;
        };

        *step_timer += dt;
        let mut stepped = None;
        while *remaining > 0 && *step_timer >= step_secs {
            *step_timer -= step_secs;
            *remaining -= 1;
            stepped = Some(*remaining);
        }
        stepped
    }

    /// Enter normal play for the current level.
    pub fn start_level(&mut self) {
        self.level_timer = 0.0;
        self.epoch += 1;
        self.phase = Phase::Playing;
    }

    /// End the current level. Only acts while playing, so repeated calls
    /// during a transition cannot advance the level twice.
    pub fn complete_level(&mut self, transition_secs: f64) -> LevelAdvance {
        if self.phase != Phase::Playing {
            return LevelAdvance::Ignored;
        }

        let from = self.level;
        self.level_timer = 0.0;
        self.epoch += 1;

        match from.next() {
            Some(to) => {
                self.level = to;
                self.phase = Phase::Transitioning {
                    elapsed: 0.0,
                    duration: transition_secs,
                };
                LevelAdvance::Advanced { from, to }
            }
            None => {
                self.phase = Phase::Complete;
                LevelAdvance::Finished { last: from }
            }
        }
    }

    /// Advance the transition. Returns true on the frame it reaches full progress.
    pub fn advance_transition(&mut self, dt: f64) -> bool {
        let Phase::Transitioning { elapsed, .. } = &mut self.phase else {
            return false;
        };
        *elapsed += dt;
        self.transition_progress().is_some_and(|p| p >= 1.0)
    }

    /// Transition progress in `[0, 1]`.
    pub fn transition_progress(&self) -> Option<f64> {
        match self.phase {
            Phase::Transitioning { elapsed, duration } => {
                Some((elapsed / duration).clamp(0.0, 1.0))
            }
            _ => None,
        }
    }

    pub fn countdown(&self) -> Option<u32> {
        match self.phase {
            Phase::Countdown { remaining, .. } => Some(remaining),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Award points for a catch and count it. Returns the points awarded.
    pub fn record_catch(&mut self, level: Level) -> u32 {
        let points = level.points();
        self.score += points;
        self.catch_counts.record(level);
        points
    }

    /// Which completion condition, if any, holds this frame.
    pub fn completion_due(
        &self,
        live: usize,
        pending: usize,
        time_limit_secs: f64,
        guard_secs: f64,
    ) -> Option<CompletionReason> {
        if !self.is_playing() || self.level_timer < guard_secs {
            return None;
        }
        if self.level_timer >= time_limit_secs {
            Some(CompletionReason::TimeLimit)
        } else if live == 0 && pending == 0 {
            Some(CompletionReason::Cleared)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_at(level: u8) -> LevelState {
        let mut state = LevelState::new();
        state.begin_countdown(0);
        state.level = Level::new(level).unwrap();
        state.start_level();
        state
    }

    #[test]
    fn test_countdown_steps_once_per_second() {
        let mut state = LevelState::new();
        state.begin_countdown(3);
        assert_eq!(state.countdown(), Some(3));

        assert_eq!(state.advance_countdown(0.5, 1.0), None);
        assert_eq!(state.advance_countdown(0.5, 1.0), Some(2));
        assert_eq!(state.advance_countdown(0.75, 1.0), None);
        assert_eq!(state.advance_countdown(0.25, 1.0), Some(1));
        assert_eq!(state.advance_countdown(1.0, 1.0), Some(0));
        assert_eq!(state.advance_countdown(5.0, 1.0), None, "stops at zero");
        assert_eq!(state.phase.kind(), GamePhase::Countdown);
    }

    #[test]
    fn test_begin_countdown_resets_session() {
        let mut state = playing_at(6);
        state.record_catch(Level::new(6).unwrap());
        let epoch = state.epoch;

        state.begin_countdown(3);
        assert_eq!(state.level, Level::FIRST);
        assert_eq!(state.score, 0);
        assert_eq!(state.catch_counts.total(), 0);
        assert!(state.epoch > epoch);
    }

    #[test]
    fn test_complete_level_is_idempotent_while_transitioning() {
        let mut state = playing_at(3);
        let advance = state.complete_level(1.0);
        assert_eq!(
            advance,
            LevelAdvance::Advanced {
                from: Level::new(3).unwrap(),
                to: Level::new(4).unwrap()
            }
        );
        let epoch = state.epoch;

        assert_eq!(state.complete_level(1.0), LevelAdvance::Ignored);
        assert_eq!(state.level.get(), 4);
        assert_eq!(state.epoch, epoch);
    }

    #[test]
    fn test_transition_completes_once() {
        let mut state = playing_at(1);
        state.complete_level(1.0);

        assert!(!state.advance_transition(0.4));
        assert!((state.transition_progress().unwrap() - 0.4).abs() < 1e-12);
        assert!(state.advance_transition(0.7));
        assert_eq!(state.transition_progress(), Some(1.0));

        state.start_level();
        assert!(!state.advance_transition(1.0), "no second hand-off");
        assert!(state.is_playing());
        assert_eq!(state.level_timer, 0.0);
    }

    #[test]
    fn test_last_level_finishes() {
        let mut state = playing_at(10);
        assert_eq!(
            state.complete_level(1.0),
            LevelAdvance::Finished { last: Level::MAX }
        );
        assert_eq!(state.phase, Phase::Complete);
        assert_eq!(state.level, Level::MAX);
        assert_eq!(state.complete_level(1.0), LevelAdvance::Ignored);
    }

    #[test]
    fn test_level_never_exceeds_max() {
        let mut state = playing_at(1);
        let mut previous = state.level;
        loop {
            match state.complete_level(1.0) {
                LevelAdvance::Advanced { from, to } => {
                    assert_eq!(from, previous);
                    assert_eq!(to.get(), from.get() + 1);
                    previous = to;
                    assert!(state.advance_transition(1.0));
                    state.start_level();
                }
                LevelAdvance::Finished { last } => {
                    assert!(last.is_max());
                    break;
                }
                LevelAdvance::Ignored => panic!("should be playing"),
            }
        }
        assert_eq!(state.level, Level::MAX);
    }

    #[test]
    fn test_completion_guard_and_conditions() {
        let mut state = playing_at(2);

        state.level_timer = 1.9;
        assert_eq!(state.completion_due(0, 0, 10.0, 2.0), None, "guarded");

        state.level_timer = 2.0;
        assert_eq!(
            state.completion_due(0, 0, 10.0, 2.0),
            Some(CompletionReason::Cleared)
        );
        assert_eq!(state.completion_due(0, 1, 10.0, 2.0), None, "spawns pending");
        assert_eq!(state.completion_due(4, 0, 10.0, 2.0), None);

        state.level_timer = 10.01;
        assert_eq!(
            state.completion_due(4, 0, 10.0, 2.0),
            Some(CompletionReason::TimeLimit)
        );
    }

    #[test]
    fn test_record_catch_scoring() {
        let mut state = playing_at(1);
        let level = Level::new(7).unwrap();
        assert_eq!(state.record_catch(level), 70);
        assert_eq!(state.score, 70);
        assert_eq!(state.catch_counts.get(level), 1);
    }
}
