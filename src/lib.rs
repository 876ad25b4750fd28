//! Overlay layer of the toot terminal client: status/error inspectors, the
//! help screen and the goto menu, plus a small host that drives them.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Shown in the help screen title.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
