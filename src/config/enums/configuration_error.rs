use crate::tls::enums::tls_error::TlsConfigError;

#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(toml::de::Error),
    EncodeError(toml::ser::Error),
    Created(String),
    Invalid(String, TlsConfigError),
}
