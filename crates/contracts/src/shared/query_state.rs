use super::api_error::ApiError;

/// Outcome of a remote fetch as seen by a page.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Error(ApiError),
    Success(T),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Loading
    }
}

impl<T> QueryState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => QueryState::Success(data),
            Err(e) => QueryState::Error(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            QueryState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Loading => QueryState::Loading,
            QueryState::Error(e) => QueryState::Error(e),
            QueryState::Success(data) => QueryState::Success(f(data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_and_accessors() {
        let ok: QueryState<u32> = QueryState::from_result(Ok(3));
        assert_eq!(ok.data(), Some(&3));
        assert!(!ok.is_loading());

        let err: QueryState<u32> = QueryState::from_result(Err(ApiError::Http(502)));
        assert!(err.is_error());
        assert_eq!(err.data(), None);
        assert_eq!(err.error(), Some(&ApiError::Http(502)));

        assert!(QueryState::<u32>::default().is_loading());
        assert_eq!(ok.map(|n| n * 2), QueryState::Success(6));
    }
}
