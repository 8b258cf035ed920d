//! # CLI Behavior
//!
//! This is **one possible UI client** for folio, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Selecting Things
//!
//! Nobody types UUIDs. Every command takes selectors that the API resolves:
//!
//! - projects by name (`folio header guide list`) or id prefix
//! - headers by outline number (`1`, `2.1`), title, or id prefix
//! - blocks and navbar items by 1-based position, or id prefix
//!
//! ## Identity
//!
//! The acting user comes from `--user` / `FOLIO_USER`. Without either, a user id
//! is generated once and kept in `<data dir>/identity`.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `render`: output formatting (outlines, block lists, messages)
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
