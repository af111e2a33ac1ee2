//! Error types for game commands and configuration loading

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no form type selected")]
    NoFormTypeSelected,

    #[error("unknown form type: {0}")]
    UnknownFormType(String),

    /// Listed in the selector but not implemented
    #[error("form type not supported yet: {0}")]
    UnsupportedFormType(String),

    #[error("no form with id {0} on the board")]
    FormNotFound(u32),

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::UnknownFormType("hexagon".into()).to_string(),
            "unknown form type: hexagon"
        );
        assert_eq!(
            GameError::InvalidCanvas { width: 0.0, height: 10.0 }.to_string(),
            "invalid canvas size 0x10"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
    }
}
