//! # Application State
//!
//! What the demo host keeps between frames. Overlay focus state is not here:
//! each overlay owns its own and is dropped when it closes.
//!
//! ```text
//! App
//! ├── timeline: Timeline              // timeline currently shown
//! ├── status: Option<Value>           // status data available for inspection
//! ├── last_error: Option<ErrorRecord> // most recent captured failure
//! └── status_message: String          // bottom bar text
//! ```

use std::fmt;

use serde_json::Value;

use crate::core::error_record::ErrorRecord;

/// The timeline the host is displaying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Timeline {
    #[default]
    Home,
    Public {
        local: bool,
    },
    Hashtag {
        tag: String,
        local: bool,
    },
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeline::Home => write!(f, "Home timeline"),
            Timeline::Public { local: true } => write!(f, "Local public timeline"),
            Timeline::Public { local: false } => write!(f, "Global public timeline"),
            Timeline::Hashtag { tag, local: true } => write!(f, "#{tag} (local)"),
            Timeline::Hashtag { tag, local: false } => write!(f, "#{tag} (public)"),
        }
    }
}

#[derive(Debug, Default)]
pub struct App {
    pub timeline: Timeline,
    pub status: Option<Value>,
    pub last_error: Option<ErrorRecord>,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure so it can be opened in the error inspector.
    pub fn record_error(&mut self, error: ErrorRecord) {
        self.status_message = format!("{}: {} (press E for details)", error.kind, error.message);
        self.last_error = Some(error);
    }
}
