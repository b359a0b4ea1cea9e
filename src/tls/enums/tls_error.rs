use crate::tls::enums::certificate_error::CertificateError;
use crate::tls::enums::tls_version::TlsVersion;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TlsConfigError {
    #[error("for auth via TLS, either both certificate and key must be supplied, or neither")]
    IncompleteCredentialConfig,
    #[error("failed to load TLS cert {cert} and key {key}: {source}")]
    CredentialLoad {
        cert: String,
        key: String,
        #[source]
        source: CertificateError,
    },
    #[error("failed to reload TLS cert {cert} and key {key}: {source}")]
    CredentialReload {
        cert: String,
        key: String,
        #[source]
        source: CertificateError,
    },
    #[error("failed to load CA {path}: {source}")]
    TrustStoreLoad {
        path: String,
        #[source]
        source: CertificateError,
    },
    #[error("failed to reload CA {path}: {source}")]
    TrustStoreReload {
        path: String,
        #[source]
        source: CertificateError,
    },
    #[error("unsupported TLS version: {0:?}")]
    UnsupportedVersion(String),
    #[error("invalid TLS version range: min_version {min} is above max_version {max}")]
    InvalidVersionRange { min: TlsVersion, max: TlsVersion },
    #[error("no supported TLS version between {min} and {max}")]
    NoSupportedVersions { min: TlsVersion, max: TlsVersion },
    #[error("invalid server name: {0:?}")]
    InvalidServerName(String),
    #[error("failed to build certificate verifier: {0}")]
    Verifier(String),
    #[error("failed to watch {path}: {reason}")]
    Watch { path: String, reason: String },
    #[error(transparent)]
    Rustls(#[from] rustls::Error),
    #[error("failed to load client TLS config: {0}")]
    ClientConfig(#[source] Box<TlsConfigError>),
    #[error("failed to load server TLS config: {0}")]
    ServerConfig(#[source] Box<TlsConfigError>),
}
