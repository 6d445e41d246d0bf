//! HTTP request handlers for the mushaf API.
//!
//! # Endpoints
//!
//! - `GET /` - Service description
//! - `GET /health` - Health check endpoint
//! - `GET /mushafs` - List editions
//! - `GET /mushaf/{mushaf_type}` - List pages of an edition
//! - `GET /mushaf/{mushaf_type}/page/{page}` - Serve a page image

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::MushafError;
use crate::store::{parse_page_number, MushafSource, PageEntry};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state containing the mushaf source.
///
/// This is passed to all handlers via Axum's State extractor.
pub struct AppState<S: MushafSource> {
    /// The source every request is resolved against
    pub source: Arc<S>,
}

impl<S: MushafSource> AppState<S> {
    /// Create a new application state with the given source.
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

impl<S: MushafSource> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

// =============================================================================
// Request Parameters
// =============================================================================

/// Path parameters for page requests.
///
/// Extracted from: `/mushaf/{mushaf_type}/page/{page}`
#[derive(Debug, Deserialize)]
pub struct PagePathParams {
    /// Edition name
    pub mushaf_type: String,

    /// Page number as it appeared in the path (digits only to be valid)
    pub page: String,
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for edition and page errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Service description returned from the index route.
#[derive(Debug, Serialize)]
pub struct ServiceDescription {
    /// Service name
    pub message: String,

    /// Route pattern to description
    pub endpoints: BTreeMap<String, String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// Response from the editions list endpoint.
#[derive(Debug, Serialize)]
pub struct MushafsResponse {
    /// Edition names
    pub mushafs: Vec<String>,

    /// Explanation, present only when the root directory is missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A single page in an edition listing.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    /// Page number
    pub page: i64,

    /// File name on disk
    pub filename: String,
}

impl From<PageEntry> for PageResponse {
    fn from(entry: PageEntry) -> Self {
        Self {
            page: entry.page,
            filename: entry.filename,
        }
    }
}

/// Response from the page listing endpoint.
#[derive(Debug, Serialize)]
pub struct PagesResponse {
    /// Edition name as requested
    pub mushaf_type: String,

    /// Number of entries in `pages`
    pub total_pages: usize,

    /// Pages sorted ascending by number
    pub pages: Vec<PageResponse>,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert MushafError to HTTP response.
///
/// Expected absences become 404 and are logged at DEBUG level. Everything else
/// becomes 500, is logged at ERROR level, and exposes the underlying message.
impl IntoResponse for MushafError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let status = if self.is_not_found() {
            debug!(status = 404, "Resource not found: {}", message);
            StatusCode::NOT_FOUND
        } else {
            error!(status = 500, "Server error: {}", message);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Wrapper for handler errors to implement IntoResponse.
pub struct HandlerError(pub MushafError);

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl From<MushafError> for HandlerError {
    fn from(err: MushafError) -> Self {
        HandlerError(err)
    }
}

/// Wrapper for editions listing errors.
///
/// A missing root directory is a soft failure: 404 with an empty list
/// instead of an `{error}` body.
pub struct MushafsError(pub MushafError);

impl IntoResponse for MushafsError {
    fn into_response(self) -> Response {
        match self.0 {
            MushafError::RootNotFound(ref root) => {
                debug!(
                    status = 404,
                    root = %root.display(),
                    "Mushaf root directory missing"
                );
                let body = MushafsResponse {
                    mushafs: Vec::new(),
                    message: Some(self.0.to_string()),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            other => other.into_response(),
        }
    }
}

impl From<MushafError> for MushafsError {
    fn from(err: MushafError) -> Self {
        MushafsError(err)
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle index requests.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "message": "Quran Mushaf API",
///   "endpoints": {
///     "/mushafs": "List all available mushafs",
///     "/mushaf/{mushaf_type}": "List pages in a specific mushaf",
///     "/mushaf/{mushaf_type}/page/{page_number}": "Get a specific page image"
///   }
/// }
/// ```
pub async fn index_handler() -> Json<ServiceDescription> {
    let endpoints = [
        ("/mushafs", "List all available mushafs"),
        ("/mushaf/{mushaf_type}", "List pages in a specific mushaf"),
        (
            "/mushaf/{mushaf_type}/page/{page_number}",
            "Get a specific page image",
        ),
    ]
    .into_iter()
    .map(|(path, description)| (path.to_string(), description.to_string()))
    .collect();

    Json(ServiceDescription {
        message: "Quran Mushaf API".to_string(),
        endpoints,
    })
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle editions list requests.
///
/// # Endpoint
///
/// `GET /mushafs`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// { "mushafs": ["madani", "warsh"] }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Root directory missing, body `{"mushafs": [], "message": ...}`
/// - `500 Internal Server Error`: Storage error
pub async fn mushafs_handler<S: MushafSource>(
    State(state): State<AppState<S>>,
) -> Result<Json<MushafsResponse>, MushafsError> {
    let mushafs = state.source.list_editions().await?;

    Ok(Json(MushafsResponse {
        mushafs,
        message: None,
    }))
}

/// Handle page listing requests.
///
/// # Endpoint
///
/// `GET /mushaf/{mushaf_type}`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "mushaf_type": "quran",
///   "total_pages": 2,
///   "pages": [
///     { "page": 1, "filename": "page1.png" },
///     { "page": 2, "filename": "page2.jpg" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Edition not found
/// - `500 Internal Server Error`: Storage error
pub async fn pages_handler<S: MushafSource>(
    State(state): State<AppState<S>>,
    Path(mushaf_type): Path<String>,
) -> Result<Json<PagesResponse>, HandlerError> {
    let pages: Vec<PageResponse> = state
        .source
        .list_pages(&mushaf_type)
        .await?
        .into_iter()
        .map(PageResponse::from)
        .collect();

    Ok(Json(PagesResponse {
        mushaf_type,
        total_pages: pages.len(),
        pages,
    }))
}

/// Handle page image requests.
///
/// # Endpoint
///
/// `GET /mushaf/{mushaf_type}/page/{page}`
///
/// # Path Parameters
///
/// - `mushaf_type`: Edition name
/// - `page`: Non-negative page number (digits only)
///
/// # Response
///
/// - `200 OK`: Raw image bytes with `Content-Type: image/<ext>`
/// - `404 Not Found`: Edition or page not found, or page is not a number
/// - `500 Internal Server Error`: Storage error
pub async fn page_handler<S: MushafSource>(
    State(state): State<AppState<S>>,
    Path(params): Path<PagePathParams>,
) -> Result<Response, HandlerError> {
    let page = parse_page_number(&params.page).ok_or_else(|| MushafError::PageNotFound {
        edition: params.mushaf_type.clone(),
        page: params.page.clone(),
    })?;

    let image = state.source.get_page(&params.mushaf_type, page).await?;
    let content_type = image.content_type();

    Ok(([(header::CONTENT_TYPE, content_type)], image.data).into_response())
}
