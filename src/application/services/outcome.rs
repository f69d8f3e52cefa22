//! Successful service results tagged with where the value came from.

/// Where a returned value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Served from the cache.
    Cache,
    /// A new mapping was persisted for this request.
    Created,
    /// Read from the durable store.
    Store,
}

/// A service result plus its [`Source`], used by handlers to choose the
/// status code and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Outcome<T> {
    pub fn from_cache(value: T) -> Self {
        Self {
            value,
            source: Source::Cache,
        }
    }

    pub fn created(value: T) -> Self {
        Self {
            value,
            source: Source::Created,
        }
    }

    pub fn from_store(value: T) -> Self {
        Self {
            value,
            source: Source::Store,
        }
    }

    pub fn is_from_cache(&self) -> bool {
        self.source == Source::Cache
    }
}
