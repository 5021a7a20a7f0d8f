//! Extren Core - Backend logic for Extension Renamer
//!
//! This crate contains all business logic with zero UI dependencies:
//! the extension catalog, file name derivation, the save-attempt state
//! machine and the metadata-preserving copy. The GUI drives it through
//! [`session::RenamerSession`].

pub mod config;
pub mod logging;
pub mod models;
pub mod rename;
pub mod session;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
