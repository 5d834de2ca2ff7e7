//! taskdeck - a terminal task manager
//!
//! This library exposes modules for use in integration tests and benches.

pub mod animation;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod manager;
pub mod models;
pub mod observer;
pub mod stats;
pub mod store;
pub mod terminal;
pub mod ui;
pub mod validation;
