//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;
use crate::params::ParamId;

/// Errors produced by the gooey crate.
#[derive(Debug)]
pub enum GooeyError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
    /// A NaN or infinite value was written to a parameter.
    NonFinite {
        /// The parameter that rejected the write.
        param: ParamId,
    },
    /// A scalar was written to a point parameter or vice versa.
    KindMismatch {
        /// The parameter that rejected the write.
        param: ParamId,
    },
    /// A control-panel name that does not map to any parameter.
    UnknownParam(String),
}

impl fmt::Display for GooeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
            Self::NonFinite { param } => {
                write!(f, "non-finite value for parameter `{}`", param.name())
            }
            Self::KindMismatch { param } => {
                write!(f, "wrong value kind for parameter `{}`", param.name())
            }
            Self::UnknownParam(name) => {
                write!(f, "unknown parameter `{name}`")
            }
        }
    }
}

impl std::error::Error for GooeyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for GooeyError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for GooeyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
