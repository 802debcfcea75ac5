//! Core domain + application logic for the Telegram login bot.
//!
//! This crate is framework-agnostic. Telegram and the auth web service live
//! behind ports (traits) implemented in adapter crates.

pub mod auth;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod photo;
pub mod profile;
pub mod replies;
pub mod service;

pub use errors::{Error, Result};
