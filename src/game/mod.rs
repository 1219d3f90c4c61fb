//! Game core
//!
//! Everything that runs during a session: the obstacle pool, the cylindrical
//! drum math, the road simulation, and the session runtime that drives them
//! from the frame loop.
//!
//! Design notes:
//! - The simulation never schedules itself; `step` returns a signal and the
//!   host loop decides whether to keep going.
//! - Obstacles are pooled and recycled, never dropped mid-session.

// Some accessors exist for the renderer or for tests only.
#![allow(dead_code)]

pub mod cylinder;
pub mod pool;
pub mod road;
pub mod runtime;

pub use road::{RoadSimulation, StepSignal, StopReason};
pub use runtime::GameSession;
