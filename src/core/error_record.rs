//! # Error Records
//!
//! A captured failure, frozen at capture time so it can be shown later in the
//! error inspector. Records coming from elsewhere are often incomplete, so
//! every field has a default and partial JSON deserializes fine.

use std::error::Error;
use std::panic::Location;

use serde::{Deserialize, Serialize};

/// One entry of a captured stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackFrame {
    pub function: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    /// Source text of the line, if it was available.
    pub context: Option<String>,
}

impl StackFrame {
    pub fn is_empty(&self) -> bool {
        self.function.is_none() && self.file.is_none() && self.line.is_none() && self.context.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorRecord {
    pub kind: String,
    pub message: String,
    /// Frames in capture order, outermost first.
    pub frames: Vec<StackFrame>,
    /// The underlying error this one was raised from.
    pub cause: Option<Box<ErrorRecord>>,
}

impl ErrorRecord {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_frame(mut self, frame: StackFrame) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn with_cause(mut self, cause: ErrorRecord) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Capture `err`, recording the caller's location as the only frame and
    /// walking its `source()` chain into `cause`.
    #[track_caller]
    pub fn capture<E: Error>(err: &E) -> Self {
        let location = Location::caller();
        let frame = StackFrame {
            function: None,
            file: Some(location.file().to_string()),
            line: Some(location.line()),
            context: None,
        };
        let mut record = Self::new(short_type_name::<E>(), err.to_string()).with_frame(frame);
        record.cause = err.source().map(|source| Box::new(Self::from_source(source)));
        record
    }

    fn from_source(err: &(dyn Error + 'static)) -> Self {
        let mut record = Self::new(source_kind(err), err.to_string());
        record.cause = err.source().map(|source| Box::new(Self::from_source(source)));
        record
    }
}

/// Sources arrive type-erased. An `io::Error` reports its `ErrorKind`;
/// anything else uses the leading name of its `Debug` output, which for
/// derived impls is the type or variant.
fn source_kind(err: &(dyn Error + 'static)) -> String {
    if let Some(io) = err.downcast_ref::<std::io::Error>() {
        return format!("{:?}", io.kind());
    }
    let debug = format!("{err:?}");
    let name: String = debug
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() {
        "Error".to_string()
    } else {
        name
    }
}

/// `std::io::error::Error` → `Error`, `toot::Foo<Bar>` → `Foo`.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Outer<E>(E);

    impl<E> fmt::Display for Outer<E> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "failed to read status")
        }
    }

    impl<E: Error + 'static> Error for Outer<E> {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[derive(Debug)]
    enum Upstream {
        Timeout,
    }

    impl fmt::Display for Upstream {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "server took too long")
        }
    }

    impl Error for Upstream {}

    #[test]
    fn test_capture_records_kind_message_and_location() {
        let err = std::io::Error::other("disk on fire");
        let record = ErrorRecord::capture(&err);
        assert_eq!(record.kind, "Error");
        assert_eq!(record.message, "disk on fire");
        assert_eq!(record.frames.len(), 1);
        assert!(record.frames[0].file.as_deref().unwrap().ends_with("error_record.rs"));
        assert!(record.frames[0].function.is_none());
    }

    #[test]
    fn test_capture_walks_source_chain() {
        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        let record = ErrorRecord::capture(&err);
        assert_eq!(record.kind, "Outer");
        let cause = record.cause.unwrap();
        assert_eq!(cause.message, "permission denied");
        assert!(cause.cause.is_none());
    }

    #[test]
    fn test_cause_kind_comes_from_the_source() {
        let io = ErrorRecord::capture(&Outer(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        )));
        assert_eq!(io.cause.unwrap().kind, "PermissionDenied");

        let custom = ErrorRecord::capture(&Outer(Upstream::Timeout));
        let cause = custom.cause.unwrap();
        assert_eq!(cause.kind, "Timeout");
        assert_eq!(cause.message, "server took too long");
    }

    #[test]
    fn test_partial_record_deserializes() {
        let record: ErrorRecord =
            serde_json::from_str(r#"{"message": "boom", "frames": [{}, {"line": 4}]}"#).unwrap();
        assert_eq!(record.kind, "");
        assert_eq!(record.message, "boom");
        assert!(record.frames[0].is_empty());
        assert_eq!(record.frames[1].line, Some(4));
    }

    #[test]
    fn test_short_type_name_strips_path_and_generics() {
        assert_eq!(short_type_name::<std::io::Error>(), "Error");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
    }
}
