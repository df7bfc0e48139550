//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ContentError`] - Content documents that fail validation
//! - [`LoadError`] - Anything that stops a document from reaching the cache
//! - [`QuizError`] - Rejected quiz transitions
//! - [`StorageError`] - localStorage operations for preferences

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// A content document parsed but does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("topic id {0:?} is not a valid document name")]
    InvalidTopicId(String),
    #[error("topic has no title")]
    MissingTitle,
    #[error("question {} has no text", .question + 1)]
    BlankQuestion { question: usize },
    #[error("question {} has no options", .question + 1)]
    NoOptions { question: usize },
    #[error(
        "question {} marks option {correct} as correct but only has {options} options",
        .question + 1
    )]
    CorrectOutOfRange {
        question: usize,
        correct: usize,
        options: usize,
    },
    #[error("exercise {} has no problem statement", .exercise + 1)]
    BlankProblem { exercise: usize },
}

/// Failure to load a topic or the topics index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("JSON parse error: {0}")]
    Parse(String),
    #[error("invalid content: {0}")]
    Invalid(#[from] ContentError),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// A quiz transition that was rejected. The session is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("quiz has no questions")]
    NoQuestions,
    #[error("question {0} does not exist")]
    QuestionOutOfRange(usize),
    #[error("option {option} does not exist for question {question}")]
    OptionOutOfRange { question: usize, option: usize },
    #[error("question {0} has already been answered")]
    AlreadyAnswered(usize),
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("already at the last question")]
    AtLastQuestion,
}

/// Preference storage errors for localStorage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Failed to save to localStorage.
    #[error("failed to save to localStorage")]
    SaveFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_messages_are_one_based() {
        let err = ContentError::CorrectOutOfRange {
            question: 0,
            correct: 4,
            options: 3,
        };
        assert_eq!(
            err.to_string(),
            "question 1 marks option 4 as correct but only has 3 options"
        );
        assert_eq!(
            ContentError::BlankProblem { exercise: 2 }.to_string(),
            "exercise 3 has no problem statement"
        );
    }

    #[test]
    fn test_load_error_conversions() {
        let err: LoadError = FetchError::HttpError(404).into();
        assert_eq!(err.to_string(), "HTTP error: 404");

        let err: LoadError = ContentError::MissingTitle.into();
        assert_eq!(err.to_string(), "invalid content: topic has no title");

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(LoadError::from(parse), LoadError::Parse(_)));
    }
}
