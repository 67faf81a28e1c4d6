//! # Blogview Architecture
//!
//! Blogview is a **UI-agnostic blog reading library**. The terminal client in
//! `cli/` is one consumer; the same core could back a TUI, a web front end or a
//! desktop shell.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, initialises logging    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / view / tags / config                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store.rs)                                           │
//! │  - BlogStore: state, subscribe, dispatch                    │
//! │  - Enrichment (enrich.rs) and filtering (filter.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - BlogSource trait                                         │
//! │  - HttpSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns `Result` values and never prints or exits.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: The blog state container
//! - [`source`]: Remote source abstraction and implementations
//! - [`enrich`]: Tag, read-time and date derivation, author join
//! - [`filter`]: Search and tag filtering
//! - [`model`]: `Post`, `Author`, `EnrichedPost`
//! - [`helpers`]: Read time, dates, truncation, slugs
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod helpers;
pub mod model;
pub mod source;
pub mod store;
