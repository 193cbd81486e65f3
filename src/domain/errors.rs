//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided speaker ID is empty.
    EmptyId,

    /// The provided speaker name is empty.
    EmptyName,

    /// A closed-set field received a value outside its set.
    InvalidChoice {
        field: &'static str,
        value: String,
        valid: Vec<&'static str>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "speaker_id cannot be empty"),
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::InvalidChoice {
                field,
                value,
                valid,
            } => {
                let options: Vec<String> = valid.iter().map(|v| format!("\"{}\"", v)).collect();
                write!(
                    f,
                    "Invalid {} '{}'. Valid options: {}",
                    field,
                    value,
                    options.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
