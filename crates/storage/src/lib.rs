use std::sync::Arc;

use tokio::sync::RwLock;

/// In-memory movie catalog shared by every request handler.
///
/// Cloning the store yields another handle to the same underlying sequence.
/// Titles keep their insertion order and duplicates are allowed; entries are
/// never removed and nothing is persisted across a restart.
#[derive(Clone, Default)]
pub struct MovieStore {
    titles: Arc<RwLock<Vec<String>>>,
}

impl MovieStore {
    /// Creates an empty store. One instance is built at startup and shared
    /// by every handler for the life of the process.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every stored title in insertion order.
    pub async fn list(&self) -> Vec<String> {
        self.titles.read().await.clone()
    }

    /// Appends a title at the end of the sequence. Validation happens at the
    /// endpoint layer; the store accepts whatever it is given.
    pub async fn append(&self, title: impl Into<String>) {
        self.titles.write().await.push(title.into());
    }

    pub async fn len(&self) -> usize {
        self.titles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.titles.read().await.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
