//! # Core
//!
//! UI-agnostic types for the overlay layer. Nothing in here knows about
//! ratatui or crossterm.
//!
//! ```text
//!     ┌──────────────────────────────┐
//!     │            CORE              │
//!     │                              │
//!     │  • MenuAction (navigation)   │
//!     │  • ErrorRecord (captured)    │
//!     │  • App (host state)          │
//!     │  • config (TOML settings)    │
//!     └──────────────┬───────────────┘
//!                    │
//!                    ▼
//!            ┌──────────────┐
//!            │     TUI      │
//!            │   Adapter    │
//!            │  (ratatui)   │
//!            └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`action`]: `MenuAction` and the `update()` that applies it to `App`
//! - [`error_record`]: captured failures shown by the error inspector
//! - [`state`]: the `App` struct owned by the demo host
//! - [`status`]: loading saved status documents from disk
//! - [`config`]: settings with defaults → file → env → CLI resolution

pub mod action;
pub mod config;
pub mod error_record;
pub mod state;
pub mod status;

pub use action::MenuAction;
pub use error_record::{ErrorRecord, StackFrame};
