use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

/// The kind of error that occurred while building a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field was never set.
    MissingField,
    /// A field was set to an empty string.
    EmptyField,
}

/// The error type for descriptor construction.
#[derive(Debug)]
pub struct Error {
    field: &'static str,
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(field: &'static str, kind: ErrorKind) -> Self {
        Self { field, kind }
    }

    /// Returns the name of the offending field.
    #[inline]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::MissingField => {
                write!(f, "required field `{}` is not set", self.field)
            }
            ErrorKind::EmptyField => {
                write!(f, "field `{}` must not be empty", self.field)
            }
        }
    }
}

impl StdError for Error {}
