//! Error types for campus

use thiserror::Error;

/// Main error type for the campus application
#[derive(Debug, Error)]
pub enum CampusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl CampusError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CampusError::Seed(_) | CampusError::TomlDeserialize(_) => 2,
            _ => 1,
        }
    }
}

/// Result type using CampusError
pub type Result<T> = std::result::Result<T, CampusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_error_exit_code() {
        let err = CampusError::Seed("missing instructor id".to_string());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_error_exit_code() {
        let err = CampusError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_seed_error_display() {
        let err = CampusError::Seed("bad record".to_string());
        assert_eq!(err.to_string(), "Seed data error: bad record");
    }
}
