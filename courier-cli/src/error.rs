//! Error types emitted by the courier CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use courier_core::DeliveryError;
use thiserror::Error;

/// Errors emitted by the courier CLI.
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
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The merged optimizer settings were rejected.
    #[error("invalid optimizer configuration: {0}")]
    InvalidConfiguration(#[source] DeliveryError),
    /// Opening the delivery request file failed.
    #[error("failed to open delivery request at {path:?}: {source}")]
    OpenRequest {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Delivery request JSON could not be decoded.
    #[error("failed to parse delivery request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Path of the malformed request.
        path: Utf8PathBuf,
        /// Decoder failure, including out-of-range coordinates.
        #[source]
        source: serde_json::Error,
    },
    /// The optimizer found no route for the request.
    #[error("route search failed: {source}")]
    Solve {
        /// Error reported by the optimizer.
        #[source]
        source: DeliveryError,
    },
    /// Serializing the search result failed.
    #[error("failed to serialize search result: {0}")]
    SerializeResult(#[source] serde_json::Error),
    /// Writing the search output failed.
    #[error("failed to write search output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
