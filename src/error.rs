//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("File too large: {path} is {size_mb:.1} MB (limit {limit_mb} MB)")]
    FileTooLarge {
        path: String,
        size_mb: f64,
        limit_mb: u64,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeMatcherError {
    fn from(err: anyhow::Error) -> Self {
        ResumeMatcherError::Processing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_message() {
        let err = ResumeMatcherError::FileTooLarge {
            path: "resume.pdf".to_string(),
            size_mb: 12.5,
            limit_mb: 10,
        };
        assert_eq!(err.to_string(), "File too large: resume.pdf is 12.5 MB (limit 10 MB)");
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: ResumeMatcherError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, ResumeMatcherError::Processing(ref msg) if msg == "boom"));
    }
}
