//! Page filename rules.
//!
//! Pages are plain image files inside an edition directory. Two naming forms
//! exist:
//!
//! - `page<N>.<ext>` - the only form reported by listings
//! - `<N>.<ext>` - accepted by direct lookup as a fallback
//!
//! `<ext>` is matched case-sensitively against [`PAGE_EXTENSIONS`], whose order
//! is also the lookup preference order.

use std::path::Path;

use bytes::Bytes;

/// Image extensions recognised as pages, in lookup preference order.
pub const PAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Literal stem prefix required for a file to appear in a page listing.
pub const PAGE_PREFIX: &str = "page";

/// A page discovered while listing an edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    /// Page number parsed from the filename stem
    pub page: i64,

    /// File name as found on disk
    pub filename: String,
}

/// A page image resolved by direct lookup.
#[derive(Debug, Clone)]
pub struct PageImage {
    /// File name of the matched candidate
    pub filename: String,

    /// Raw file contents
    pub data: Bytes,
}

impl PageImage {
    /// Content type derived from the matched file's extension.
    pub fn content_type(&self) -> String {
        content_type_for(&self.filename)
    }
}

/// Check whether an extension (without the dot) is an allowed page extension.
pub fn is_page_extension(ext: &str) -> bool {
    PAGE_EXTENSIONS.contains(&ext)
}

/// Parse a file name into a listing entry.
///
/// Returns `None` unless the extension is allowed and the stem is
/// [`PAGE_PREFIX`] followed by a base-10 integer. Bare numeric stems such as
/// `12.png` are not listed.
///
/// The integer is read with [`str::parse::<i64>`]: an optional sign and ASCII
/// digits only. Surrounding whitespace (`page 1.png`), digit-group underscores
/// (`page1_000.png`) and values outside `i64` are deliberately not accepted,
/// so such files are left out of listings.
pub fn parse_listed_page(filename: &str) -> Option<PageEntry> {
    let path = Path::new(filename);

    let ext = path.extension()?.to_str()?;
    if !is_page_extension(ext) {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    let page = stem.strip_prefix(PAGE_PREFIX)?.parse::<i64>().ok()?;

    Some(PageEntry {
        page,
        filename: filename.to_string(),
    })
}

/// File names to try for a page, in priority order.
///
/// For each extension the prefixed form is tried before the bare form, so
/// `page<N>.png` beats `<N>.png`, which beats `page<N>.jpg`, and so on.
pub fn lookup_candidates(page: u64) -> Vec<String> {
    PAGE_EXTENSIONS
        .iter()
        .flat_map(|ext| {
            [
                format!("{PAGE_PREFIX}{page}.{ext}"),
                format!("{page}.{ext}"),
            ]
        })
        .collect()
}

/// Parse a page number taken from a request path.
///
/// Only unsigned ASCII digit strings are accepted (leading zeros allowed).
pub fn parse_page_number(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Content type for a page file: `image/` followed by the literal extension.
///
/// No MIME table is consulted, so `page3.jpg` is served as `image/jpg`.
pub fn content_type_for(filename: &str) -> String {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    format!("image/{}", ext)
}
