//! # CLI Layer
//!
//! This module is **one possible UI client** for folio. It plays the part of
//! the site's dashboard: publishing, editing, listing and deleting posts.
//!
//! It is the **only** place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context wiring and per-command handlers
//! - `render.rs`: terminal output

mod commands;
mod render;
mod setup;

pub use commands::run;
