use thiserror::Error;

/// Errors that can occur while decoding or encoding flow JSON.
///
/// These are the only hard failures in the crate: the store and validator
/// degrade gracefully on malformed domain data and never return errors.
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("Failed to parse flow JSON: {0}")]
    Json(String),

    #[error("Flow JSON must contain a non-empty nodes array")]
    EmptyNodes,

    #[error("Failed to serialize flow JSON: {0}")]
    Serialize(String),
}

/// Errors that can occur while reading or writing the persisted flow slot.
#[derive(Error, Debug, Clone)]
pub enum SlotError {
    #[error("Could not read flow slot '{slot}': {message}")]
    Read { slot: String, message: String },

    #[error("Could not write flow slot '{slot}': {message}")]
    Write { slot: String, message: String },

    #[error("Stored flow in slot '{slot}' is corrupt: {message}")]
    Corrupt { slot: String, message: String },
}
