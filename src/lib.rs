//! termfolio - a terminal client for a personal portfolio backend.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod cache;
pub mod cli;
pub mod error;
pub mod input;
pub mod markdown;
pub mod models;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
