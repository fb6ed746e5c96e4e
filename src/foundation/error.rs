use std::path::PathBuf;

/// Convenience result type used across the compositor.
pub type CarouselResult<T> = Result<T, CarouselError>;

/// Top-level error taxonomy used by the render entry points.
///
/// Every render failure is local to one slide: callers decide whether to skip the slide or stop.
#[derive(thiserror::Error, Debug)]
pub enum CarouselError {
    /// None of the candidate font files exist in the fonts directory.
    #[error("font not found: none of {candidates:?} in '{}'", .dir.display())]
    FontNotFound {
        /// Candidate file names, in search order.
        candidates: Vec<String>,
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// Background raster missing, unreadable or undecodable.
    #[error("background load error: {0}")]
    BackgroundLoad(String),

    /// Output could not be written.
    #[error("io error: {0}")]
    Io(String),

    /// Invalid configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing records.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Stable, copyable classification of a [`CarouselError`], used in logs and reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`CarouselError::FontNotFound`].
    FontNotFound,
    /// See [`CarouselError::BackgroundLoad`].
    BackgroundLoad,
    /// See [`CarouselError::Io`].
    Io,
    /// See [`CarouselError::Validation`].
    Validation,
    /// See [`CarouselError::Serde`].
    Serde,
    /// See [`CarouselError::Other`].
    Other,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::FontNotFound => "font_not_found",
            Self::BackgroundLoad => "background_load",
            Self::Io => "io",
            Self::Validation => "validation",
            Self::Serde => "serde",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

impl CarouselError {
    /// Build a [`CarouselError::FontNotFound`] value.
    pub fn font_not_found(candidates: &[String], dir: impl Into<PathBuf>) -> Self {
        Self::FontNotFound {
            candidates: candidates.to_vec(),
            dir: dir.into(),
        }
    }

    /// Build a [`CarouselError::BackgroundLoad`] value.
    pub fn background_load(msg: impl Into<String>) -> Self {
        Self::BackgroundLoad(msg.into())
    }

    /// Build a [`CarouselError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`CarouselError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CarouselError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FontNotFound { .. } => ErrorKind::FontNotFound,
            Self::BackgroundLoad(_) => ErrorKind::BackgroundLoad,
            Self::Io(_) => ErrorKind::Io,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Serde(_) => ErrorKind::Serde,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
