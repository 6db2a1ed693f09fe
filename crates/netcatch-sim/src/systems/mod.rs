//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or the engine.

pub mod catch;
pub mod cleanup;
pub mod flight;
pub mod snapshot;
pub mod spawner;
