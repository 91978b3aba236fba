use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    UnknownKind { name: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind { name } => {
                write!(
                    f,
                    "unknown backend '{}', expected one of: scalar, narrow, wide",
                    name
                )
            }
        }
    }
}

impl Error for BackendError {}
