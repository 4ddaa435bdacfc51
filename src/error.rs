// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Transcript(TranscriptError),
}

/// Specific error types for transcript loading issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum TranscriptError {
    /// File does not exist (or was deleted while listed).
    NotFound,

    /// File exists but is not valid UTF-8 text.
    InvalidUtf8,

    /// I/O error (permission denied, read failure, etc.)
    IoError(String),
}

impl TranscriptError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TranscriptError::NotFound => "error-load-not-found",
            TranscriptError::InvalidUtf8 => "error-load-invalid-utf8",
            TranscriptError::IoError(_) => "error-load-io",
        }
    }
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptError::NotFound => write!(f, "Transcript file not found"),
            TranscriptError::InvalidUtf8 => write!(f, "Transcript is not valid UTF-8 text"),
            TranscriptError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Transcript(e) => write!(f, "Transcript Error: {}", e),
        }
    }
}

impl From<TranscriptError> for Error {
    fn from(err: TranscriptError) -> Self {
        Error::Transcript(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn transcript_error_converts_to_error() {
        let err: Error = TranscriptError::NotFound.into();
        assert!(matches!(err, Error::Transcript(TranscriptError::NotFound)));
    }

    #[test]
    fn transcript_error_i18n_keys() {
        assert_eq!(TranscriptError::NotFound.i18n_key(), "error-load-not-found");
        assert_eq!(
            TranscriptError::InvalidUtf8.i18n_key(),
            "error-load-invalid-utf8"
        );
        assert_eq!(
            TranscriptError::IoError("x".into()).i18n_key(),
            "error-load-io"
        );
    }

    #[test]
    fn transcript_error_display() {
        let err = TranscriptError::IoError("permission denied".to_string());
        assert!(format!("{}", err).contains("permission denied"));
    }
}
