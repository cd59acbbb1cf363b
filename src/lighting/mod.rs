//! Smoothed lighting transitions.

pub mod controller;
pub mod transition;

pub use controller::TransitionEngine;
pub use transition::{AmbientTransition, EmissionTransition, TaskStatus};
