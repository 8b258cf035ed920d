//! # Folio CLI Architecture
//!
//! Folio ships with a command-line client, but the binary is intentionally thin:
//! the CLI lives in `src/cli/`, while this file only invokes `cli::run()` and
//! handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/folioapp/`: the library with every rule and all editing state
//! - `crates/folio/`: this CLI, one possible client of the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/folio/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering with console styles (render.rs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Surfaces + API (crates/folioapp/src/)                      │
//! │  - Block and navbar edits run through the editing surfaces  │
//! │  - Surfaces persist through FolioApi's write ports          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A CLI invocation is a whole editing session squeezed into one call: it opens
//! a surface, applies one edit and flushes it with `save_now()` before exiting,
//! so nothing is ever left waiting on a debounce timer.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
