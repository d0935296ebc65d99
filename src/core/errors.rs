//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Input text was empty after trimming whitespace
    #[error("Please enter some text to translate")]
    EmptyInput,

    /// Source and target languages are identical (and source is not auto-detect)
    #[error("Source and target languages cannot be the same: {language}")]
    SameLanguage {
        language: String,
    },

    /// Language label not present in the catalog
    #[error("Unsupported language: {label}")]
    UnknownLanguage {
        label: String,
    },

    /// API request failed
    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// User-facing failure classification for a translation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Nothing to translate after trimming
    EmptyInput,
    /// Source equals target and source is not auto-detect
    SameLanguage,
    /// Network failure, non-2xx status, or a response with no usable output
    RemoteError,
}

impl TranslationError {
    /// Classify the error into the failure taxonomy shown to the user.
    ///
    /// Everything past local validation collapses into [`FailureReason::RemoteError`];
    /// the presentation layer renders it as a single generic error.
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::EmptyInput => FailureReason::EmptyInput,
            Self::SameLanguage { .. } => FailureReason::SameLanguage,
            _ => FailureReason::RemoteError,
        }
    }

    /// Local validation failures are surfaced as warnings; no network call was made
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::SameLanguage { .. } | Self::UnknownLanguage { .. }
        )
    }

    /// Stable machine-readable code for API error responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::SameLanguage { .. } => "same_language",
            Self::UnknownLanguage { .. } => "unknown_language",
            Self::ConfigError { .. } => "config_error",
            Self::ApiError { .. } => "api_error",
            _ => "remote_error",
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
