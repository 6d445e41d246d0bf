//! HTTP server layer for the mushaf API.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │        GET /mushafs, /mushaf/{type}, /mushaf/{type}/page/{n}    │
//! │                                                                 │
//! │  ┌──────────────────────────┐  ┌─────────────────────────────┐  │
//! │  │        handlers          │  │           routes            │  │
//! │  │ (requests, error bodies) │  │  (router, CORS, tracing)    │  │
//! │  └──────────────────────────┘  └─────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    health_handler, index_handler, mushafs_handler, page_handler, pages_handler, AppState,
    ErrorResponse, HealthResponse, MushafsResponse, PagePathParams, PageResponse, PagesResponse,
    ServiceDescription,
};
pub use routes::{create_router, RouterConfig};
