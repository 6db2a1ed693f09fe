//! Simulation engine for NETCATCH.
//!
//! Owns the hecs ECS world of butterflies, runs the level/wave state machine
//! frame by frame, and produces `GameStateSnapshot`s for a renderer.

pub mod engine;
pub mod leaderboard;
pub mod profiles;
pub mod progression;
pub mod spawn_queue;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use netcatch_core as core;
