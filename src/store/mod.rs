//! Mushaf storage layer.
//!
//! This module resolves editions and pages from storage. The HTTP layer only
//! talks to the [`MushafSource`] trait, so handlers can be exercised against
//! any backend:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              HTTP Handlers              │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │           MushafSource Trait            │
//! │  (list editions, list pages, get page)  │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │          LocalMushafSource              │
//! │  (directory tree on local disk)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Filename rules (allowed extensions, listing parse, lookup priority and
//! content types) live in [`page`] and are independent of the backend.

mod local;
pub mod page;
mod source;

pub use local::LocalMushafSource;
pub use page::{
    content_type_for, lookup_candidates, parse_listed_page, parse_page_number, PageEntry,
    PageImage, PAGE_EXTENSIONS, PAGE_PREFIX,
};
pub use source::MushafSource;
