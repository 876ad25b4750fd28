//! # TUI Components
//!
//! The overlays and the widgets they are built from.
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `LineView`: scrollable, focusable list of lines. Backs the status
//!   source inspector, the error inspector and the help screen.
//! - `GotoMenu`: timeline picker that returns a `MenuAction` on activation
//! - `EditBox`: single-line text input used inside `GotoMenu`
//!
//! Each component owns its focus state. The host never reaches in to change
//! it; it forwards `TuiEvent`s and reads what comes back from `handle_event`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── line_view.rs   (scrollable line list)
//! ├── goto_menu.rs   (timeline picker)
//! ├── edit_box.rs    (text input)
//! └── text_wrap.rs   (styled line wrapping)
//! ```

pub mod edit_box;
pub mod goto_menu;
pub mod line_view;
pub mod text_wrap;

pub use edit_box::{EditBox, EditEvent};
pub use goto_menu::{GotoMenu, HASHTAG_INPUT_INDEX, MENU_ITEMS, MenuItem};
pub use line_view::{LineView, ScrollDirection};
pub use text_wrap::wrap_line;
