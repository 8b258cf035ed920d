//! # Folio Architecture
//!
//! Folio is a **UI-agnostic documentation authoring library**. Projects hold an
//! outline of headers (two levels deep) and a free-form navigation bar; each
//! header's content is either a sequence of typed blocks or legacy markdown.
//! A project exports to one self-contained HTML page.
//!
//! The library owns every rule and every piece of live editing state. A UI
//! (the bundled `folio` CLI, a web front end, a TUI) only forwards events and
//! paints what it is given.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Surfaces (surface/, navbar.rs)                             │
//! │  - Live state of the open section or navbar                 │
//! │  - Undo history, debounced autosave, keyboard shortcuts     │
//! │  - Persist through the ports in ports.rs                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, asks the Session who acts     │
//! │  - Resolves selectors (outline numbers, id prefixes)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Ownership checks, validation, cascades                   │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over a StorageBackend                    │
//! │  - FileStore (folio.json), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering ([`render`]) and the block model ([`blocks`]) are pure and sit
//! beside the layers: everything may call them, they call nothing stateful.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Outside `store::fs_backend`, `config` and `prefs::FileKv`, nothing touches
//! the file system. Nothing writes to stdout or stderr and nothing sleeps:
//! timers are deadlines checked when the host calls `tick()` (see [`clock`]).
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): business rules against the in-memory store.
//! 2. **Surfaces**: driven with a [`clock::ManualClock`] and a
//!    [`test_utils::RecordingWriter`], so timer behavior is exact.
//! 3. **Integration** (`tests/`): the file backend and whole-project flows.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all owner-scoped operations
//! - [`commands`]: business logic for projects, headers, navbar items, export
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: `Project`, `Header`, `NavbarItem`
//! - [`blocks`]: block types, parsing, picker palette, per-block editors
//! - [`history`]: linear undo/redo with debounced commits
//! - [`surface`]: block and markdown editing surfaces
//! - [`navbar`]: navbar layout math and the navbar editor
//! - [`outline`]: header numbering, display order, filtering, sibling moves
//! - [`render`]: static HTML for blocks, navbar and the exported page
//! - [`prefs`]: per-user color scheme and docs theme
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod blocks;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod navbar;
pub mod outline;
pub mod ports;
pub mod prefs;
pub mod render;
pub mod session;
pub mod store;
pub mod surface;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
