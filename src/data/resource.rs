//! Tagged result wrapper passed from the data layer up to the views

/// Outcome of a data-layer request.
///
/// `DataError` carries only a code. Negative codes are the client-side
/// codes in [`crate::data::Error`]; positive ones are HTTP statuses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    DataError(i32),
}

impl<T> Resource<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_code(&self) -> Option<i32> {
        match self {
            Resource::DataError(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::DataError(code) => Resource::DataError(code),
        }
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Resource::Loading
    }
}
