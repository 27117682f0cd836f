use thiserror::Error;

/// Result type alias for parley-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Parley
///
/// The chat core itself never fails: empty submissions are rejected silently.
/// These cover the ambient concerns around it.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Logging setup errors
    #[error("logging error: {0}")]
    Logging(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_err: Error = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"));
        assert_eq!(io_err.to_string(), "I/O error: file not found");

        let config_err: Error = Error::Config("empty label".to_string());
        assert_eq!(config_err.to_string(), "configuration error: empty label");

        let parse_err: Error = Error::Parse("invalid TOML".to_string());
        assert_eq!(parse_err.to_string(), "parse error: invalid TOML");

        let logging_err: Error = Error::Logging("subscriber already set".to_string());
        assert_eq!(logging_err.to_string(), "logging error: subscriber already set");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io_err.into();
        assert_eq!(error.to_string(), "I/O error: denied");
    }

    #[test]
    fn test_error_from_toml_error() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let error: Error = toml_err.into();
        assert!(error.to_string().starts_with("parse error:"));
    }

    #[test]
    fn test_result_type_alias() {
        let ok: Result<i32> = Ok(42);
        assert!(ok.is_ok());

        let err: Result<i32> = Err(Error::Config("bad".to_string()));
        assert!(err.is_err());
    }
}
