//! Backend registry
//!
//! The ordered list of backend addresses plus a rotation cursor, shared
//! between the accept loop and the control plane. Addresses are opaque
//! strings compared by exact match; duplicates are allowed.

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;

/// Error returned by [`BackendRegistry::next`] when no backends are
/// registered. The empty list is a valid transient state, not a fault;
/// only selection fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyRegistry;

impl fmt::Display for EmptyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no backends registered")
    }
}

impl std::error::Error for EmptyRegistry {}

#[derive(Debug, Default)]
struct Rotation {
    backends: Vec<String>,
    current: usize,
}

/// Shared, runtime-mutable list of backends with round-robin selection.
///
/// Cloning yields another handle to the same list. One mutex guards both
/// the list and the cursor and is held for the whole body of every
/// operation, so no caller can observe a half-applied mutation and the
/// cursor can never race past the list bounds. All operations are
/// lock-and-release with no I/O inside the critical section.
#[derive(Debug, Clone, Default)]
pub struct BackendRegistry {
    inner: Arc<Mutex<Rotation>>,
}

impl BackendRegistry {
    pub fn new(backends: Vec<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Rotation {
                backends,
                current: 0,
            })),
        }
    }

    /// Replace the whole list and reset the rotation to the start.
    pub async fn set(&self, backends: Vec<String>) {
        let mut inner = self.inner.lock().await;
        inner.backends = backends;
        inner.current = 0;
    }

    /// Return the next backend in circular order.
    ///
    /// The cursor advances before the read, so the first call after
    /// `set(["a", "b"])` yields `"b"`. Existing deployments depend on
    /// that order; do not change it.
    pub async fn next(&self) -> Result<String, EmptyRegistry> {
        let mut inner = self.inner.lock().await;
        if inner.backends.is_empty() {
            return Err(EmptyRegistry);
        }

        // Advancing first also re-clamps a cursor that remove() left
        // past the end of a shrunken list.
        inner.current = (inner.current + 1) % inner.backends.len();
        Ok(inner.backends[inner.current].clone())
    }

    /// Append a backend. Duplicates are allowed; the cursor is untouched.
    pub async fn add(&self, backend: impl Into<String>) {
        let mut inner = self.inner.lock().await;
        inner.backends.push(backend.into());
    }

    /// Remove every occurrence of `backend`, preserving the order of the
    /// survivors. Returns how many entries were removed; 0 is not an
    /// error here.
    pub async fn remove(&self, backend: &str) -> usize {
        let mut inner = self.inner.lock().await;
        let before = inner.backends.len();
        inner.backends.retain(|b| b != backend);
        before - inner.backends.len()
    }

    /// Comma-joined rendering of the current list, in order. An empty
    /// list renders as the empty string.
    pub async fn snapshot(&self) -> String {
        self.inner.lock().await.backends.join(",")
    }

    /// Number of registered backends.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.backends.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
