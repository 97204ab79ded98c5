//! Error taxonomy.

use std::fmt;
use std::io;

/// Errors raised by table, chart, pagination, and sink operations.
///
/// Validation errors are always raised before the first glyph is written to
/// a sink, so a failed render never leaves partial output behind.
#[derive(Debug)]
pub enum TabulaError {
    /// An argument was outside its accepted domain (zero tick count, zero
    /// page size, unknown alignment name, empty data set, ...).
    InvalidArgument(String),
    /// A table was rendered, exported, or paginated without a header row.
    EmptyTable,
    /// The formatting attached to a graph does not fit its graph type.
    InvalidFormatting(String),
    /// A page index outside `[0, len)` was requested.
    IndexOutOfRange { index: usize, len: usize },
    /// The output sink failed.
    Io(io::Error),
}

impl TabulaError {
    /// Shorthand for [`TabulaError::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Shorthand for [`TabulaError::InvalidFormatting`].
    pub fn invalid_formatting(msg: impl Into<String>) -> Self {
        Self::InvalidFormatting(msg.into())
    }
}

impl fmt::Display for TabulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::EmptyTable => write!(f, "table has no header row"),
            Self::InvalidFormatting(msg) => write!(f, "invalid formatting: {msg}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} pages")
            }
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for TabulaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TabulaError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for Tabula APIs.
pub type Result<T, E = TabulaError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_messages() {
        assert_eq!(
            TabulaError::invalid_argument("ticks must be positive").to_string(),
            "invalid argument: ticks must be positive"
        );
        assert_eq!(TabulaError::EmptyTable.to_string(), "table has no header row");
        assert_eq!(
            TabulaError::IndexOutOfRange { index: 4, len: 3 }.to_string(),
            "index 4 out of range for 3 pages"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err: TabulaError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, TabulaError::Io(_)));
        assert!(err.source().is_some());
        assert!(TabulaError::EmptyTable.source().is_none());
    }
}
