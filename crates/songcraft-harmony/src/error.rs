//! Error types for the harmony engine.

use thiserror::Error;

use songcraft_spec::EngineError;

/// Errors reported by harmony operations.
///
/// All failures are synchronous and inspectable; nothing is silently
/// defaulted. In particular, an unknown template or genre variant fails
/// instead of returning an empty progression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("invalid note name '{name}'")]
    InvalidNoteName { name: String },
    #[error("scale degree {degree} out of range (must be 1-7)")]
    InvalidDegree { degree: u8 },
    #[error("unknown progression template '{name}'")]
    UnknownTemplate { name: String },
}

impl EngineError for TheoryError {
    fn code(&self) -> &'static str {
        match self {
            TheoryError::InvalidNoteName { .. } => "HARMONY_001",
            TheoryError::InvalidDegree { .. } => "HARMONY_002",
            TheoryError::UnknownTemplate { .. } => "HARMONY_003",
        }
    }

    fn category(&self) -> &'static str {
        "harmony"
    }
}
