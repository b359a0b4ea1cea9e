use crate::config::structs::tls_setting::TlsSetting;
use crate::tls::enums::tls_error::TlsConfigError;
use crate::tls::enums::tls_version::TlsVersion;
use crate::tls::impls::tls_version::{DEFAULT_MAX_TLS_VERSION, DEFAULT_MIN_TLS_VERSION};

impl TlsSetting {
    pub fn has_credentials(&self) -> bool {
        !self.cert_file.is_empty() && !self.key_file.is_empty()
    }

    /// Checks the settings without touching the filesystem.
    pub fn validate(&self) -> Result<(), TlsConfigError> {
        if self.cert_file.is_empty() != self.key_file.is_empty() {
            return Err(TlsConfigError::IncompleteCredentialConfig);
        }
        let min_version = TlsVersion::resolve(&self.min_version, DEFAULT_MIN_TLS_VERSION)?;
        let max_version = TlsVersion::resolve(&self.max_version, DEFAULT_MAX_TLS_VERSION)?;
        if min_version > max_version {
            return Err(TlsConfigError::InvalidVersionRange {
                min: min_version,
                max: max_version,
            });
        }
        Ok(())
    }
}
