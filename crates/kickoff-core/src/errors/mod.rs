use std::error::Error;

/// Base trait for all application errors
pub trait KickoffError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type KickoffResult<T> = Result<T, Box<dyn KickoffError>>;

impl KickoffError for kickoff_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            kickoff_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            kickoff_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            kickoff_config::ConfigError::PathUnavailable { .. } => "CONFIG_PATH_UNAVAILABLE",
            kickoff_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            kickoff_config::ConfigError::ConfigParseError { .. }
                | kickoff_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}

impl KickoffError for kickoff_paths::PathError {
    fn error_code(&self) -> &'static str {
        match self {
            kickoff_paths::PathError::HomeNotFound => "HOME_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kickoff_result() {
        let _result: KickoffResult<i32> = Ok(42);
    }

    #[test]
    fn test_config_parse_error() {
        let error = kickoff_config::ConfigError::ConfigParseError {
            path: "/tmp/config.toml".to_string(),
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config file '/tmp/config.toml': invalid TOML syntax"
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_invalid_configuration_is_user_error() {
        let error = kickoff_config::ConfigError::InvalidConfiguration {
            message: "teams.max_count must be at least 2, got 1".to_string(),
        };
        assert_eq!(error.error_code(), "INVALID_CONFIGURATION");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_config_io_error_is_system_error() {
        let error = kickoff_config::ConfigError::IoError {
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_boxed_error_keeps_code() {
        let boxed: Box<dyn KickoffError> = Box::new(kickoff_paths::PathError::HomeNotFound);
        assert_eq!(boxed.error_code(), "HOME_NOT_FOUND");
        assert!(!boxed.is_user_error());
    }
}
