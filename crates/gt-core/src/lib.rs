//! Gear Train Core
//!
//! This crate contains the kinematics engine for meshed gear trains:
//! - Gear: tooth count, radius and accumulated rotation of one gear disc
//! - Adjacency: which gears are meshed, inferred from placement
//! - Propagation: spreading a driven rotation across the meshed gears
//! - Scene: owned gear set with rebuild and teardown lifecycle

pub mod adjacency;
pub mod config;
pub mod constants;
pub mod gear;
pub mod gear_set;
pub mod interaction;
pub mod propagation;
pub mod scene;
pub mod stats;

pub use adjacency::*;
pub use config::*;
pub use constants::*;
pub use gear::*;
pub use gear_set::*;
pub use interaction::*;
pub use propagation::*;
pub use scene::*;
pub use stats::*;
