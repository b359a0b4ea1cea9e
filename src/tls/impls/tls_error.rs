use crate::tls::enums::tls_error::TlsConfigError;

impl TlsConfigError {
    /// Strips the client/server context wrappers added by the builders.
    pub fn root_cause(&self) -> &TlsConfigError {
        match self {
            TlsConfigError::ClientConfig(inner) | TlsConfigError::ServerConfig(inner) => inner.root_cause(),
            other => other,
        }
    }

    pub fn is_incomplete_credential_config(&self) -> bool {
        matches!(self.root_cause(), TlsConfigError::IncompleteCredentialConfig)
    }
}
