//! Rig CLI library: argument parsing, logging, and command dispatch around
//! the `rig-config` composition pipeline.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;
