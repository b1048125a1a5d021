use thiserror::Error;

#[derive(Error, Debug)]
pub enum PseudolexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type PseudolexResult<T> = Result<T, PseudolexError>;

impl PseudolexError {
    pub fn read<S: Into<String>>(path: S, source: std::io::Error) -> Self {
        PseudolexError::Read {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_the_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let error = PseudolexError::read("notes.algo", source);
        assert!(matches!(error, PseudolexError::Read { .. }));
        assert_eq!(error.to_string(), "Failed to read notes.algo: not found");
        assert!(std::error::Error::source(&error).is_some());
    }
}
