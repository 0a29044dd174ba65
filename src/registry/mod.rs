pub mod store;


pub use store::{MemoryStore, UrlStore};

use std::sync::Arc;
use thiserror::Error;
use url::Url;

use crate::models::ShortUrlEntry;
use crate::resolver::HostResolver;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Candidate failed URL parsing or hostname resolution.
    #[error("invalid url")]
    InvalidUrl,
    /// No entry matches the requested short code.
    #[error("No short URL found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Maps sequential short codes to validated original URLs.
///
/// The store and the hostname oracle are injected at construction.
pub struct UrlRegistry {
    store: Arc<dyn UrlStore>,
    resolver: Arc<dyn HostResolver>,
}

impl UrlRegistry {
    pub fn new(store: Arc<dyn UrlStore>, resolver: Arc<dyn HostResolver>) -> Self {
        Self { store, resolver }
    }

    /// Validate `candidate` and store it under the next sequential code.
    ///
    /// The candidate must parse as an absolute URL with a hostname, and
    /// the hostname must pass the resolver check; otherwise the submission
    /// fails with `InvalidUrl` and nothing is stored. The URL is stored
    /// verbatim, not re-serialized from the parse.
    pub async fn submit(&self, candidate: &str) -> RegistryResult<ShortUrlEntry> {
        let parsed = Url::parse(candidate).map_err(|_| RegistryError::InvalidUrl)?;
        let hostname = parsed.host_str().ok_or(RegistryError::InvalidUrl)?;

        if !self.resolver.resolves(hostname).await {
            return Err(RegistryError::InvalidUrl);
        }

        Ok(self.store.append(candidate).await?)
    }

    /// Look up the entry a short code was assigned to. Pure read.
    pub async fn resolve(&self, short_code: u64) -> RegistryResult<ShortUrlEntry> {
        match self.store.find(short_code).await? {
            Some(entry) => Ok(entry),
            None => Err(RegistryError::NotFound),
        }
    }
}
