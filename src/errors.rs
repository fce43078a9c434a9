use std::fmt;

/// Errors raised at the fallible edges of the engine. The command queue and
/// the tick loop never produce these; they clamp or ignore bad input instead.
#[derive(Debug, Clone, PartialEq)]
pub enum TurtleError {
    InvalidFont(String),
    UnknownCursor(String),
    Config(String),
}

impl std::error::Error for TurtleError {}

impl fmt::Display for TurtleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TurtleError::InvalidFont(msg) => write!(f, "Invalid font descriptor: {}", msg),
            TurtleError::UnknownCursor(name) => write!(f, "No cursor named '{}'", name),
            TurtleError::Config(msg) => write!(f, "Bad turtle configuration: {}", msg),
        }
    }
}

impl From<ron::error::SpannedError> for TurtleError {
    fn from(error: ron::error::SpannedError) -> Self {
        TurtleError::Config(error.to_string())
    }
}
