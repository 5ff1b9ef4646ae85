use std::path::PathBuf;

/// Everything that can go wrong while post-processing one model asset.
///
/// Every variant is scoped to a single asset; the batch keeps going.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("source asset not found: {}", .path.display())]
    MissingSourceAsset { path: PathBuf },

    #[error("failed to build animation clip {index}: {reason}")]
    AnimationBuild { index: usize, reason: String },

    #[error("failed to load model {}: {source}", .path.display())]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("settings error: {0}")]
    Settings(#[from] confy::ConfyError),
}

impl ImportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn missing_source(path: impl Into<PathBuf>) -> Self {
        Self::MissingSourceAsset { path: path.into() }
    }

    pub fn animation(index: usize, reason: impl ToString) -> Self {
        Self::AnimationBuild {
            index,
            reason: reason.to_string(),
        }
    }

    /// Stable key for logs and reports
    pub fn key(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse-error",
            Self::MissingSourceAsset { .. } => "missing-source-asset",
            Self::AnimationBuild { .. } => "animation-build-error",
            Self::ModelLoad { .. } => "model-load-error",
            Self::Io { .. } => "io-error",
            Self::Serialize { .. } => "serialize-error",
            Self::Settings(_) => "settings-error",
        }
    }
}
