//! Error types emitted by the Spotcheck CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use spotcheck_core::AuditError;
use thiserror::Error;

/// Errors emitted by the Spotcheck CLI.
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
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// The requested capacity is larger than the planner supports.
    #[error("{field} {requested} exceeds the supported maximum of {limit}")]
    CapacityAboveLimit {
        /// Option name.
        field: &'static str,
        /// Requested capacity.
        requested: usize,
        /// Largest supported capacity.
        limit: usize,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the asset catalog failed.
    #[error("failed to open asset catalog at {path:?}: {source}")]
    OpenCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The asset catalog JSON could not be decoded.
    #[error("failed to parse asset catalog JSON at {path:?}: {source}")]
    ParseCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// Sampling or routing rejected the audit.
    #[error("audit failed: {source}")]
    Audit {
        /// Underlying audit failure.
        #[source]
        source: AuditError,
    },
    /// Serializing the audit report failed.
    #[error("failed to serialize audit report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the audit report failed.
    #[error("failed to write audit report: {0}")]
    WriteReport(#[source] std::io::Error),
}
