//! Speech Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SpeechError {
    #[error("Speed must be a positive finite number, got {0}")]
    InvalidSpeed(f32),
}
