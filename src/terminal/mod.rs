//! Terminal front-end for the divisor page.
//!
//! [`App`] hosts an [`InteractionController`](crate::controller::InteractionController),
//! carries out the effects it returns, and draws its [`View`](crate::controller::View)
//! with `ratatui`: heading, numeric input, validity line, divisor chips and the
//! guideline notes for whichever divisors have one.

mod actions;
mod app;
mod builder;
mod chips;
mod config;
pub mod input;
mod render;
mod runtime;
pub mod theme;

pub use app::{App, Focus};
pub use builder::DivisorUi;
pub use config::UiLabels;
pub use input::OperandInput;
pub use theme::{Theme, default_theme};

#[cfg(test)]
mod tests;
