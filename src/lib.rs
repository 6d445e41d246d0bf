//! # Mushaf Server
//!
//! A read-only HTTP service exposing a directory of Quran mushaf page images.
//!
//! The root directory holds one subdirectory per edition ("mushaf type"), and
//! each edition holds page images named `page<N>.<ext>` or `<N>.<ext>` where
//! `<ext>` is one of `png`, `jpg`, `jpeg` or `webp`. The filesystem is the only
//! database: every request re-reads it, so pages can be added or removed
//! without restarting the server.
//!
//! ## Architecture
//!
//! - [`store`] - Filename rules and the [`MushafSource`] storage trait
//! - [`server`] - Axum-based HTTP handlers and router
//! - [`config`] - CLI and environment configuration
//! - [`error`] - Error taxonomy shared by the layers
//!
//! ## Example
//!
//! ```rust,no_run
//! use mushaf_server::{create_router, LocalMushafSource, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = LocalMushafSource::new("mushaf");
//!     source.ensure_root().await.unwrap();
//!
//!     let router = create_router(source, RouterConfig::new());
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::MushafError;
pub use server::{
    create_router, health_handler, index_handler, mushafs_handler, page_handler, pages_handler,
    AppState, ErrorResponse, HealthResponse, MushafsResponse, PagePathParams, PageResponse,
    PagesResponse, RouterConfig, ServiceDescription,
};
pub use store::{
    content_type_for, lookup_candidates, parse_listed_page, parse_page_number, LocalMushafSource,
    MushafSource, PageEntry, PageImage, PAGE_EXTENSIONS, PAGE_PREFIX,
};
