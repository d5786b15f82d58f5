//! Library crate for user-dashboard.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state, key handling and the event loop (`app`)
//! - Command-line options (`cli`)
//! - The HTTP user source (`client`)
//! - Error and result types (`error`)
//! - The user record (`model`)
//! - The name filter (`search`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `user-dashboard` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod cli;
pub mod client;
pub mod error;
pub mod model;
pub mod search;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, FetchError, Result};
pub use model::User;
