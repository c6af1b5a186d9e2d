//! Integration test support
//!
//! Helpers for exercising the store and the engine together against real
//! temp-directory files, the way the running bot does.

pub mod helpers;

pub use helpers::{engine_at, fresh_engine, fresh_store};
