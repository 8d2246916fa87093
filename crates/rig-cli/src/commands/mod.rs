//! Command implementations for the Rig CLI.
//!
//! - [`compose`] - Assemble, validate, and emit the build descriptor
//! - [`check`] - Assemble and validate without emitting
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod check;
pub mod compose;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use compose::execute as compose_execute;
