//! # warden-store
//!
//! Persistence layer: owns the [`ConfigDocument`](warden_core::ConfigDocument)
//! and its flat-file JSON representation. Every operation elsewhere in warden
//! that wants to survive a restart reads and writes through this crate.

mod error;
mod store;

pub use error::StoreError;
pub use store::ConfigStore;
