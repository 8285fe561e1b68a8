//! Build Errors
//!
//! Every failure the build step can raise, tagged with an [`ErrorKind`] and,
//! where one exists, the file it concerns.

use std::io;
use std::path::{Path, PathBuf};

use alias_resolver::ResolveError;

/// Coarse classification of a [`BuildError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PathComputation,
    Configuration,
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid configuration{}: {message}", display_location(.location))]
    Configuration {
        message: String,
        location: Option<PathBuf>,
    },

    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{}: {source}", .file.display())]
    Rewrite { file: PathBuf, source: ResolveError },

    #[error("invalid glob pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
}

impl BuildError {
    pub fn configuration(message: impl Into<String>, location: Option<&Path>) -> Self {
        BuildError::Configuration {
            message: message.into(),
            location: location.map(Path::to_path_buf),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BuildError::Configuration { .. } | BuildError::Pattern { .. } => {
                ErrorKind::Configuration
            }
            BuildError::Io { .. } => ErrorKind::Io,
            BuildError::Rewrite { .. } => ErrorKind::PathComputation,
        }
    }

    /// File the error relates to, when known.
    pub fn location(&self) -> Option<&Path> {
        match self {
            BuildError::Configuration { location, .. } => location.as_deref(),
            BuildError::Io { path, .. } => Some(path),
            BuildError::Rewrite { file, .. } => Some(file),
            BuildError::Pattern { .. } => None,
        }
    }
}

fn display_location(location: &Option<PathBuf>) -> String {
    location
        .as_ref()
        .map(|path| format!(" in {}", path.display()))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, BuildError>;
