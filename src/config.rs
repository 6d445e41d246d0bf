//! Configuration management for the mushaf server.
//!
//! This module provides a configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `MUSHAF_` prefix (a `.env` file is honoured by the binary)
//! - Sensible defaults for all settings
//!
//! # Environment Variables
//!
//! - `MUSHAF_HOST` - Server bind address (default: 0.0.0.0)
//! - `MUSHAF_PORT` - Server port (default: 5000)
//! - `MUSHAF_DIR` - Root directory holding one subdirectory per edition (default: mushaf)
//! - `MUSHAF_CORS_ORIGINS` - Comma-separated allowed origins (default: any)

use std::path::PathBuf;

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default root directory for editions.
pub const DEFAULT_MUSHAF_DIR: &str = "mushaf";

// =============================================================================
// CLI Arguments
// =============================================================================

/// Mushaf Server - serve Quran mushaf page images over HTTP.
///
/// Lists editions found under a root directory, lists the pages of each
/// edition and serves individual page images.
#[derive(Parser, Debug, Clone)]
#[command(name = "mushaf-server")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "MUSHAF_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "MUSHAF_PORT")]
    pub port: u16,

    // =========================================================================
    // Storage Configuration
    // =========================================================================
    /// Root directory containing one subdirectory per mushaf edition.
    ///
    /// Created on startup if it does not exist.
    #[arg(long, default_value = DEFAULT_MUSHAF_DIR, env = "MUSHAF_DIR")]
    pub mushaf_dir: PathBuf,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "MUSHAF_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("host must not be empty. Set --host or MUSHAF_HOST".to_string());
        }

        if self.mushaf_dir.as_os_str().is_empty() {
            return Err(
                "mushaf directory must not be empty. Set --mushaf-dir or MUSHAF_DIR".to_string(),
            );
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
