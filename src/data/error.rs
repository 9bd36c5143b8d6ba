//! Error codes and their user-facing messages

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error as ThisError;

pub const NO_INTERNET_CONNECTION: i32 = -1;
pub const NETWORK_ERROR: i32 = -2;
pub const DEFAULT_ERROR: i32 = -3;
pub const SEARCH_ERROR: i32 = -104;

/// Codes that carry a user-facing message
pub const KNOWN_CODES: [i32; 3] = [NO_INTERNET_CONNECTION, NETWORK_ERROR, SEARCH_ERROR];

/// Error code paired with the message shown to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub description: String,
}

impl Error {
    pub fn new(code: i32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }

    /// Wrap an error raised outside the code table under `DEFAULT_ERROR`
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::new(DEFAULT_ERROR, error.to_string())
    }
}

/// Classification of a `Resource::DataError` code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataErrorKind {
    NoConnection,
    NetworkError,
    HttpStatus(u16),
    SearchNotFound,
    DefaultError,
}

impl DataErrorKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            NO_INTERNET_CONNECTION => Self::NoConnection,
            NETWORK_ERROR => Self::NetworkError,
            SEARCH_ERROR => Self::SearchNotFound,
            100..=599 => Self::HttpStatus(code as u16),
            _ => Self::DefaultError,
        }
    }
}

#[derive(ThisError, Debug, PartialEq, Eq)]
pub enum ErrorLookupError {
    #[error("no message registered for error code {0}")]
    UnknownCode(i32),
}

/// Source of the code-to-message table
pub trait ErrorMapperSource: Send + Sync {
    fn get_error_string(&self, code: i32) -> Option<String>;

    /// Table of every [`KNOWN_CODES`] entry this source has a message for
    fn errors_map(&self) -> HashMap<i32, String> {
        KNOWN_CODES
            .into_iter()
            .filter_map(|code| self.get_error_string(code).map(|message| (code, message)))
            .collect()
    }
}

/// Built-in English message table
#[derive(Clone, Debug, Default)]
pub struct ErrorMapper;

impl ErrorMapper {
    const MESSAGES: [(i32, &'static str); 3] = [
        (NO_INTERNET_CONNECTION, "No internet connection. Check your network and refresh."),
        (NETWORK_ERROR, "Could not load recipes. Please try again."),
        (SEARCH_ERROR, "No recipe matches your search."),
    ];
}

impl ErrorMapperSource for ErrorMapper {
    fn get_error_string(&self, code: i32) -> Option<String> {
        Self::MESSAGES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, message)| message.to_string())
    }
}

/// Resolves codes through an [`ErrorMapperSource`]
#[derive(Clone)]
pub struct ErrorManager {
    mapper: Arc<dyn ErrorMapperSource>,
}

impl ErrorManager {
    pub fn new(mapper: Arc<dyn ErrorMapperSource>) -> Self {
        Self { mapper }
    }

    /// Look up `code`. Only codes present in the table resolve.
    pub fn get_error(&self, code: i32) -> Result<Error, ErrorLookupError> {
        self.mapper
            .errors_map()
            .remove(&code)
            .map(|description| Error::new(code, description))
            .ok_or(ErrorLookupError::UnknownCode(code))
    }
}

impl Default for ErrorManager {
    fn default() -> Self {
        Self::new(Arc::new(ErrorMapper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NO_INTERNET_CONNECTION)]
    #[case(NETWORK_ERROR)]
    #[case(SEARCH_ERROR)]
    fn known_codes_resolve_to_table_entries(#[case] code: i32) {
        let manager = ErrorManager::default();
        let error = manager.get_error(code).unwrap();

        assert_eq!(error.code, code);
        assert_eq!(Some(error.description), ErrorMapper.get_error_string(code));
    }

    #[rstest]
    #[case(DEFAULT_ERROR)]
    #[case(404)]
    #[case(500)]
    fn unknown_codes_fail_lookup(#[case] code: i32) {
        let manager = ErrorManager::default();
        assert_eq!(manager.get_error(code), Err(ErrorLookupError::UnknownCode(code)));
    }

    #[rstest]
    #[case(NO_INTERNET_CONNECTION, DataErrorKind::NoConnection)]
    #[case(NETWORK_ERROR, DataErrorKind::NetworkError)]
    #[case(SEARCH_ERROR, DataErrorKind::SearchNotFound)]
    #[case(503, DataErrorKind::HttpStatus(503))]
    #[case(DEFAULT_ERROR, DataErrorKind::DefaultError)]
    fn codes_classify_into_kinds(#[case] code: i32, #[case] expected: DataErrorKind) {
        assert_eq!(DataErrorKind::from_code(code), expected);
    }

    #[test]
    fn foreign_errors_use_default_code() {
        let io = std::io::Error::other("disk on fire");
        let error = Error::from_error(&io);

        assert_eq!(error.code, DEFAULT_ERROR);
        assert_eq!(error.description, "disk on fire");
    }

    #[test]
    fn custom_mapper_is_consulted() {
        struct Single;
        impl ErrorMapperSource for Single {
            fn get_error_string(&self, code: i32) -> Option<String> {
                (code == NETWORK_ERROR).then(|| "offline".to_string())
            }
        }

        let manager = ErrorManager::new(Arc::new(Single));
        assert_eq!(manager.get_error(NETWORK_ERROR).unwrap().description, "offline");
        assert!(manager.get_error(SEARCH_ERROR).is_err());
    }

    #[test]
    fn errors_map_is_built_from_message_lookups() {
        let map = ErrorMapper.errors_map();

        assert_eq!(map.len(), KNOWN_CODES.len());
        for code in KNOWN_CODES {
            assert_eq!(map.get(&code).cloned(), ErrorMapper.get_error_string(code));
        }
        assert_eq!(ErrorMapper.get_error_string(DEFAULT_ERROR), None);
    }
}
