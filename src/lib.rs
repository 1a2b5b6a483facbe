//! Liquid Chat library.
//!
//! Message grouping and bridge engine, the simulated peer backend, and the
//! egui front end. Re-exported for testing and extension.

pub mod animation;
pub mod app;
pub mod backend;
pub mod bridges;
pub mod bubble;
pub mod config;
pub mod engine;
pub mod grouping;
pub mod input_state;
pub mod logging;
pub mod protocol;
pub mod scheduler;
pub mod script;
pub mod ui;
pub mod viewport;

#[cfg(test)]
mod integration_tests;
