//! Error types emitted by the Stowage CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use stowage_core::{JsonCatalogError, SearchError, SearchRequestValidationError};
use thiserror::Error;

/// Errors emitted by the Stowage CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Command-line name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the search request file failed.
    #[error("failed to open search request at {path:?}: {source}")]
    OpenSearchRequest {
        /// Request file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Search request JSON could not be decoded.
    #[error("failed to parse search request JSON at {path:?}: {source}")]
    ParseSearchRequest {
        /// Request file.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The search request payload failed validation.
    #[error("search request in {path:?} failed validation: {source}")]
    InvalidSearchRequest {
        /// Request file.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: SearchRequestValidationError,
    },
    /// Loading the listing catalog failed.
    #[error("failed to load listing catalog from {path:?}: {source}")]
    LoadCatalog {
        /// Catalog file.
        path: Utf8PathBuf,
        /// Catalog failure.
        #[source]
        source: JsonCatalogError,
    },
    /// The matcher rejected the request or the catalog.
    #[error("search failed: {source}")]
    Search {
        /// Matcher failure.
        #[source]
        source: SearchError,
    },
    /// Serialising the quotes failed.
    #[error("failed to serialise search output: {0}")]
    SerialiseQuotes(#[source] serde_json::Error),
    /// Writing the search output failed.
    #[error("failed to write search output: {0}")]
    WriteSearchOutput(#[source] std::io::Error),
}
