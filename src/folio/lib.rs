//! # Folio Architecture
//!
//! Folio is the content core of a portfolio site: a blog post store that
//! survives restarts through a key-value slot, and a scroll-reveal controller
//! for entrance animations. It is a library first; the `folio` binary is one
//! client of it, standing in for the site's dashboard.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, supplies the clock            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Drafts → posts, filtering, messages                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContentStore over a KeyValueStorage slot                 │
//! │  - FileStorage (production), MemStorage (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`reveal`] stands apart from these layers: it has no storage and is driven
//! entirely by the host's visibility events.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Key-value storage and the content store
//! - [`model`]: `Post`, `PostDraft`, slug and read-time derivation
//! - [`seed`]: Built-in posts used when nothing is stored
//! - [`reveal`]: One-shot scroll reveal state machine
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod reveal;
pub mod seed;
pub mod store;
