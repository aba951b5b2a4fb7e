//! Core crate exports for `methematics`, a terminal page that lists the
//! divisors of a number and annotates the ones it knows something about.
//!
//! The numeric core lives in [`divisors`] and [`operand`]; [`controller`] is
//! the state machine wrapped around it, and [`terminal`] hosts that machine in
//! a `ratatui` front-end. The root module re-exports the pieces embedders
//! usually need.

pub mod app_dirs;
pub mod controller;
pub mod divisors;
pub mod guidelines;
pub mod logging;
pub mod operand;
pub mod outcome;
pub mod terminal;

pub use controller::{Effect, InteractionController, Phase, UiEvent, UiState, View};
pub use divisors::find_divisors;
pub use guidelines::{Annotation, GuidelineError, GuidelineTable};
pub use operand::{Operand, Validity};
pub use outcome::{Note, Outcome, evaluate};
pub use terminal::{DivisorUi, Theme, UiLabels};
