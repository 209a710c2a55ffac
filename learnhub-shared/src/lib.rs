//! Shared models, configuration, and settings state logic for the LearnHub
//! account dashboard.
//!
//! Everything in this crate is free of browser bindings so the settings
//! lifecycle can be exercised with plain `cargo test`.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod models;
pub mod settings;
