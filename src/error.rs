use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract text from {}: {reason}", path.display())]
    Extraction { path: PathBuf, reason: String },

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Both documents are empty after tokenization")]
    EmptyVocabulary,

    #[error("Vector dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Invalid skill definition on line {line}: {reason}")]
    SkillCatalog { line: usize, reason: String },

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl Error {
    /// Stable machine-readable code written in error records.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } | Self::Extraction { .. } | Self::UnsupportedFormat(_) => {
                "extraction_failed"
            }
            Self::SkillCatalog { .. } => "invalid_skills",
            Self::Generic(_)
            | Self::EmptyVocabulary
            | Self::DimensionMismatch { .. }
            | Self::SerdeJson(_) => "internal",
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
