//! blogdeck - browse and publish blog posts from the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;
pub mod server;
pub mod terminal;
pub mod traits;
pub mod ui;
