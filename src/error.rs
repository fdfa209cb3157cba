use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ReportError – everything that can stop an artifact from being produced
// ---------------------------------------------------------------------------

/// Errors raised while loading inputs or producing report artifacts.
///
/// Only [`ReportError::MissingInput`] is treated as recoverable by the
/// driver; every other variant aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("{} not found", path.display())]
    MissingInput { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: row {row}: {source}", path.display())]
    Csv {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("{} contains no data rows", path.display())]
    EmptyDataset { path: PathBuf },

    #[error("{}: {what}", path.display())]
    MissingRow { path: PathBuf, what: String },

    #[error("failed to render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ReportError {
    /// Whether this is the "expected input file does not exist" case, the
    /// only error the driver recovers from.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ReportError::MissingInput { .. })
    }

    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            ReportError::MissingInput { path }
            | ReportError::Io { path, .. }
            | ReportError::Csv { path, .. }
            | ReportError::EmptyDataset { path }
            | ReportError::MissingRow { path, .. }
            | ReportError::Render { path, .. }
            | ReportError::Config { path, .. } => path,
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ReportError::MissingInput {
                path: path.to_path_buf(),
            }
        } else {
            ReportError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn render(path: &Path, err: impl std::fmt::Display) -> Self {
        ReportError::Render {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
