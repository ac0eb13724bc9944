//! Error types for radix-convert

use crate::literal::Radix;
use thiserror::Error;

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid {radix} literal {literal:?}: {reason}")]
    Format {
        radix: Radix,
        literal: String,
        reason: String,
    },

    #[error("Hexadecimal literal {literal:?} is too big to be converted to i32")]
    Overflow { literal: String },
}

/// Error category, for callers that only branch on the kind of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Format,
    Overflow,
}

impl ConvertError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn format(radix: Radix, literal: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            radix,
            literal: literal.into(),
            reason: reason.into(),
        }
    }

    pub fn overflow(literal: impl Into<String>) -> Self {
        Self::Overflow {
            literal: literal.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Format { .. } => ErrorKind::Format,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
