use async_trait::async_trait;

use crate::error::MushafError;

use super::page::{PageEntry, PageImage};

/// Trait for resolving editions and pages from a storage backend.
///
/// Implementations must not cache: every call reflects the current state of
/// the underlying storage.
#[async_trait]
pub trait MushafSource: Send + Sync {
    /// List the names of all editions.
    ///
    /// Fails with [`MushafError::RootNotFound`] when the root itself is absent.
    async fn list_editions(&self) -> Result<Vec<String>, MushafError>;

    /// List the pages of an edition, sorted ascending by page number.
    ///
    /// Fails with [`MushafError::EditionNotFound`] when the edition is absent.
    async fn list_pages(&self, edition: &str) -> Result<Vec<PageEntry>, MushafError>;

    /// Resolve and read a single page image.
    ///
    /// Fails with [`MushafError::EditionNotFound`] or
    /// [`MushafError::PageNotFound`] when either is absent.
    async fn get_page(&self, edition: &str, page: u64) -> Result<PageImage, MushafError>;
}
