//! Test fixtures for marker-route.
//!
//! Provides realistic resource markers from the game map, grouped the way
//! the map's filters group them (Lumber, Mining, Herbalism, Hunting).

pub mod resource_markers;

pub use resource_markers::*;
