//! Error types for the generation engine.

use thiserror::Error;

use crate::models::Difficulty;

/// Reference data the generator cannot be built from.
///
/// These are configuration faults: retrying generation will not help, the
/// supplied airports or callsign templates have to be fixed first.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("no airports supplied")]
    NoAirports,

    #[error("no callsign template is eligible at difficulty {0}")]
    EmptyCallsignPool(Difficulty),

    #[error("callsign template '{pattern}' is malformed: {reason}")]
    MalformedCallsignTemplate { pattern: String, reason: String },

    #[error("duplicate instruction type code '{0}'")]
    DuplicateInstructionType(String),

    #[error("duplicate instruction type id '{0}'")]
    DuplicateInstructionTypeId(String),
}

/// Failure to parse a label coming from config or reference data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    #[error("unknown subcategory '{0}'")]
    UnknownSubcategory(String),
}
