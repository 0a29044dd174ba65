use crate::models::ShortUrlEntry;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Ordered store of short URL entries.
///
/// Implementations assign the short code themselves; reading the current
/// size and appending happen at a single mutation point.
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Assign the next sequential short code and append a new entry.
    async fn append(&self, original_url: &str) -> Result<ShortUrlEntry>;

    /// Exact-match lookup by short code.
    async fn find(&self, short_code: u64) -> Result<Option<ShortUrlEntry>>;

    /// Number of stored entries.
    async fn len(&self) -> Result<usize>;
}

/// In-memory store. Entries live for the lifetime of the process and are
/// gone on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<ShortUrlEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn append(&self, original_url: &str) -> Result<ShortUrlEntry> {
        // Code assignment and push happen under one write guard; two
        // concurrent submits cannot observe the same size.
        let mut entries = self.entries.write().await;
        let entry = ShortUrlEntry {
            original_url: original_url.to_string(),
            short_code: entries.len() as u64 + 1,
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn find(&self, short_code: u64) -> Result<Option<ShortUrlEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| e.short_code == short_code).cloned())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.entries.read().await.len())
    }
}
