//! Error types.

use thiserror::Error;

use crate::IsbnKind;

/// Errors raised while computing or verifying a check digit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum IsbnError {
    /// No digits at all after normalization.
    #[error("{kind}: no digits found")]
    Empty { kind: IsbnKind },

    /// Fewer digits than the algorithm weighs.
    #[error("{kind}: need at least {required} digits, found {found}")]
    InsufficientDigits {
        kind: IsbnKind,
        required: usize,
        found: usize,
    },

    /// The supplied check character disagrees with the computed one.
    #[error("{kind}: check digit is {expected}, but {found} was supplied")]
    CheckDigitMismatch {
        kind: IsbnKind,
        expected: char,
        found: char,
    },

    /// A trailing character that cannot be a check character.
    #[error("invalid check character '{found}'")]
    InvalidCheckCharacter { found: char },

    /// A check letter among the payload digits.
    #[error("unexpected '{found}' among the payload digits")]
    InvalidPayloadCharacter { found: char },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl IsbnError {
    /// True for both the empty and the short-input case.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::Empty { .. } | Self::InsufficientDigits { .. })
    }

    /// Build the length error for `found` digits when `kind` needs more.
    pub(crate) fn short_input(kind: IsbnKind, found: usize) -> Self {
        if found == 0 {
            Self::Empty { kind }
        } else {
            Self::InsufficientDigits {
                kind,
                required: kind.payload_len(),
                found,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IsbnError>;
