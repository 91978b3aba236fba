use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradientError {
    UnknownId { id: u8 },
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownId { id } => {
                write!(f, "gradient {} does not exist, expected 1 to 7", id)
            }
        }
    }
}

impl Error for GradientError {}
