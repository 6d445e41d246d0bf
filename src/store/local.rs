//! Filesystem-backed mushaf source.
//!
//! Every edition is a directory directly under the root, and every page is a
//! file directly under its edition:
//!
//! ```text
//! mushaf/
//! ├── madani/
//! │   ├── page1.png
//! │   ├── page2.png
//! │   └── 3.jpg         (served by lookup, not listed)
//! └── warsh/
//!     └── page1.webp
//! ```
//!
//! Nothing is cached. Each call re-reads the directory tree so changes made by
//! an administrator are visible on the next request.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use crate::error::MushafError;

use super::page::{lookup_candidates, parse_listed_page, PageEntry, PageImage};
use super::source::MushafSource;

/// Mushaf source reading editions from a local directory.
///
/// # Example
///
/// ```ignore
/// use mushaf_server::store::{LocalMushafSource, MushafSource};
///
/// let source = LocalMushafSource::new("/srv/mushaf");
/// source.ensure_root().await?;
///
/// let editions = source.list_editions().await?;
/// let page = source.get_page("madani", 1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalMushafSource {
    root: PathBuf,
}

impl LocalMushafSource {
    /// Create a source rooted at the given directory.
    ///
    /// The directory does not need to exist yet; see [`ensure_root`](Self::ensure_root).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory (and any missing parents) if absent.
    pub async fn ensure_root(&self) -> Result<(), MushafError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| MushafError::io(&self.root, &e))
    }

    /// Resolve an edition name to its directory.
    ///
    /// Names that are not a single normal path component never resolve, so a
    /// request cannot step outside the root.
    async fn edition_dir(&self, edition: &str) -> Result<PathBuf, MushafError> {
        let not_found = || MushafError::EditionNotFound {
            edition: edition.to_string(),
        };

        let mut components = Path::new(edition).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return Err(not_found()),
        }

        let dir = self.root.join(edition);
        match fs::metadata(&dir).await {
            Ok(meta) if meta.is_dir() => Ok(dir),
            Ok(_) => Err(not_found()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found()),
            Err(e) => Err(MushafError::io(&dir, &e)),
        }
    }
}

/// Check whether a path (following symlinks) satisfies a metadata predicate.
///
/// Entries that vanish mid-scan and symlinks whose target cannot be resolved
/// (dangling or looping) count as a mismatch. Any other failure, such as a
/// directory without search permission, is an error.
async fn entry_matches(
    path: &Path,
    predicate: fn(&std::fs::Metadata) -> bool,
) -> Result<bool, MushafError> {
    let err = match fs::metadata(path).await {
        Ok(meta) => return Ok(predicate(&meta)),
        Err(e) => e,
    };

    if err.kind() == ErrorKind::NotFound {
        return Ok(false);
    }

    match fs::symlink_metadata(path).await {
        Ok(link) if link.file_type().is_symlink() => Ok(false),
        _ => Err(MushafError::io(path, &err)),
    }
}

#[async_trait]
impl MushafSource for LocalMushafSource {
    async fn list_editions(&self) -> Result<Vec<String>, MushafError> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(MushafError::RootNotFound(self.root.clone()))
            }
            Err(e) => return Err(MushafError::io(&self.root, &e)),
        };

        let mut editions = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| MushafError::io(&self.root, &e))?
        {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if entry_matches(&entry.path(), std::fs::Metadata::is_dir).await? {
                editions.push(name);
            }
        }

        editions.sort();
        Ok(editions)
    }

    async fn list_pages(&self, edition: &str) -> Result<Vec<PageEntry>, MushafError> {
        let dir = self.edition_dir(edition).await?;

        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|e| MushafError::io(&dir, &e))?;

        let mut pages = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| MushafError::io(&dir, &e))?
        {
            let Some(page) = entry.file_name().to_str().and_then(parse_listed_page) else {
                continue;
            };
            if entry_matches(&entry.path(), std::fs::Metadata::is_file).await? {
                pages.push(page);
            }
        }

        pages.sort_by_key(|p| p.page);

        debug!(edition = edition, count = pages.len(), "Listed pages");
        Ok(pages)
    }

    async fn get_page(&self, edition: &str, page: u64) -> Result<PageImage, MushafError> {
        let dir = self.edition_dir(edition).await?;

        for filename in lookup_candidates(page) {
            let path = dir.join(&filename);

            match fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => continue,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(MushafError::io(&path, &e)),
            }

            let data = fs::read(&path)
                .await
                .map_err(|e| MushafError::io(&path, &e))?;

            debug!(
                edition = edition,
                page = page,
                filename = %filename,
                bytes = data.len(),
                "Resolved page"
            );

            return Ok(PageImage {
                filename,
                data: Bytes::from(data),
            });
        }

        Err(MushafError::PageNotFound {
            edition: edition.to_string(),
            page: page.to_string(),
        })
    }
}
