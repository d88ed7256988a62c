use std::sync::Arc;

use thiserror::Error;

/// A boxed [`std::error::Error`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error from the underlying state store during a lookup.
///
/// The original cause is kept as-is and displayed transparently, so callers
/// see exactly what the store reported. Lookup errors are cheap to clone.
#[derive(Debug, Error, Clone)]
#[error(transparent)]
pub struct LookupError {
    source: Arc<dyn std::error::Error + Send + Sync + 'static>,
}

impl LookupError {
    /// Creates a lookup error from any store error.
    pub fn new<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let source = Arc::new(source);
        Self { source }
    }

    /// Returns the original store error.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }
}

impl From<BoxError> for LookupError {
    fn from(source: BoxError) -> Self {
        let source = Arc::from(source);
        Self { source }
    }
}

/// Lookup errors are equal if they are the same error, or report the same message.
impl PartialEq for LookupError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source) || self.to_string() == other.to_string()
    }
}

impl Eq for LookupError {}
