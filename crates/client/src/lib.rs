//! Command line client for widget pages and location submission.
//!
//! The binary is the composition root: it loads `.env`, installs logging,
//! reads [`runtime::RuntimeConfig`] and dispatches to one of the
//! [`commands`]. Pages come from JSON files ([`fixture`]) or the built-in demo
//! page.
pub mod commands;
pub mod config;
pub mod dirs;
pub mod fixture;
pub mod logging;

pub use config::ClientConfig;
