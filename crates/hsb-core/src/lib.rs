//! Core domain + polling logic for the homework status watcher.
//!
//! This crate is transport-agnostic. The Practicum API and Telegram live
//! behind ports (traits) implemented in adapter crates.

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod notify;
pub mod response;
pub mod status;
pub mod watcher;

pub use errors::{Error, Result};
