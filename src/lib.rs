//! marker-route core
//!
//! Plans a visiting order over map markers and synthesizes a smooth
//! curve for drawing it.

pub mod traits;
pub mod geo;
pub mod error;
pub mod cancel;
pub mod builder;
pub mod refine;
pub mod waypoint;
pub mod curve;
pub mod planner;
