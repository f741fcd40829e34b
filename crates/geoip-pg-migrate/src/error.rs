//! Error types for the migration library.

use thiserror::Error;

/// Main error type for migration operations.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Configuration error (missing home directory, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source database (SQLite) open, scan, or decode error
    #[error("Source database error: {0}")]
    Source(#[from] rusqlite::Error),

    /// Destination database (PostgreSQL) error
    #[error("Destination database error: {0}")]
    Target(#[from] tokio_postgres::Error),

    /// Connection pool error with context
    #[error("Pool error: {message}\n  Context: {context}")]
    Pool { message: String, context: String },

    /// Row count verification failed
    #[error("Validation failed: {0}")]
    Validation(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl MigrateError {
    /// Create a Pool error with context about where it occurred.
    pub fn pool(message: impl ToString, context: impl Into<String>) -> Self {
        MigrateError::Pool {
            message: message.to_string(),
            context: context.into(),
        }
    }

    /// Format error with full details including error chain.
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        // Add error chain for wrapped errors
        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }

    /// Process exit code for this error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            MigrateError::Config(_) | MigrateError::Toml(_) => 1,
            MigrateError::Source(_) => 2,
            MigrateError::Target(_) => 3,
            MigrateError::Pool { .. } => 4,
            MigrateError::Validation(_) => 5,
            MigrateError::Io(_) => 7,
        }
    }
}

/// Result type alias for migration operations.
pub type Result<T> = std::result::Result<T, MigrateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            MigrateError::Config("x".into()),
            MigrateError::Source(rusqlite::Error::InvalidQuery),
            MigrateError::Pool {
                message: "x".into(),
                context: "y".into(),
            },
            MigrateError::Validation("x".into()),
            MigrateError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "x")),
        ];
        let mut codes: Vec<u8> = errors.iter().map(|e| e.exit_code()).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_format_detailed_includes_message() {
        let err = MigrateError::Validation("row counts differ".into());
        let detailed = err.format_detailed();
        assert!(detailed.contains("row counts differ"));
        assert!(detailed.starts_with("Error:"));
    }
}
