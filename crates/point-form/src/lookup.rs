//! Lookup Outcome
//!
//! State of one asynchronous lookup as seen by the UI.

use crate::error::{FetchError, FetchResult};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Lookup<T> {
    /// Request issued, no answer yet
    #[default]
    Pending,
    Ready(T),
    Failed(FetchError),
}

impl<T> Lookup<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Lookup::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Lookup::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Lookup::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T: Clone + Default> Lookup<T> {
    /// Ready value, or the empty value while pending or failed
    pub fn value_or_default(&self) -> T {
        self.ready().cloned().unwrap_or_default()
    }
}

impl<T> From<FetchResult<T>> for Lookup<T> {
    fn from(result: FetchResult<T>) -> Self {
        match result {
            Ok(value) => Lookup::Ready(value),
            Err(err) => Lookup::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Lookup<Vec<u32>> = Ok(vec![1, 2]).into();
        assert_eq!(ok.ready(), Some(&vec![1, 2]));

        let failed: Lookup<Vec<u32>> = Err(FetchError::Decode("bad json".into())).into();
        assert!(failed.ready().is_none());
        assert_eq!(failed.error(), Some(&FetchError::Decode("bad json".into())));
    }

    #[test]
    fn test_value_or_default() {
        assert!(Lookup::<Vec<u32>>::Pending.value_or_default().is_empty());
        assert_eq!(Lookup::Ready(vec![7]).value_or_default(), vec![7]);
    }
}
