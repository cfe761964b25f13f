use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    EmptyIdentifier,
    InvalidColour(String),
    EmptyIconToken,
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::EmptyIdentifier => {
                write!(f, "item identifier must not be empty")
            }
            ModelError::InvalidColour(raw) => {
                write!(f, "invalid colour value: {raw}")
            }
            ModelError::EmptyIconToken => {
                write!(f, "icon token must not be empty")
            }
        }
    }
}

impl std::error::Error for ModelError {}
