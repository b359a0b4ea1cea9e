use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::EncodeError(e) => e.fmt(f),
            ConfigurationError::Created(path) => write!(f, "created default configuration at {}", path),
            ConfigurationError::Invalid(section, e) => write!(f, "[{}] {}", section, e),
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::IOError(e) => Some(e),
            ConfigurationError::ParseError(e) => Some(e),
            ConfigurationError::EncodeError(e) => Some(e),
            ConfigurationError::Created(_) => None,
            ConfigurationError::Invalid(_, e) => Some(e),
        }
    }
}
