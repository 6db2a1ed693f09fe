//! netcatch host application.
//!
//! Runs the simulation on its own thread and exposes session calls a
//! window shell or harness drives it through.

pub mod autopilot;
pub mod game_loop;
pub mod scoreboard;
pub mod session;
pub mod state;

pub use netcatch_core as core;
