//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point and returns a [`ResolvedConfig`]: config
//! files, then `METHEMATICS__*` environment variables, then CLI flags, with
//! defaults filled in and every value validated.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
