use crate::tls::enums::tls_error::TlsConfigError;
use crate::tls::enums::tls_version::TlsVersion;
use rustls::SupportedProtocolVersion;

pub const DEFAULT_MIN_TLS_VERSION: TlsVersion = TlsVersion::Tls12;
pub const DEFAULT_MAX_TLS_VERSION: TlsVersion = TlsVersion::Tls13;

const TLS_VERSIONS: [(&str, TlsVersion); 4] = [
    ("1.0", TlsVersion::Tls10),
    ("1.1", TlsVersion::Tls11),
    ("1.2", TlsVersion::Tls12),
    ("1.3", TlsVersion::Tls13),
];

impl TlsVersion {
    /// Maps a configured version string to a [`TlsVersion`].
    ///
    /// An empty string yields `default`; anything outside `"1.0"`..`"1.3"`
    /// is rejected with [`TlsConfigError::UnsupportedVersion`].
    pub fn resolve(value: &str, default: TlsVersion) -> Result<TlsVersion, TlsConfigError> {
        if value.is_empty() {
            return Ok(default);
        }
        TLS_VERSIONS
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, version)| *version)
            .ok_or_else(|| TlsConfigError::UnsupportedVersion(value.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TlsVersion::Tls10 => "1.0",
            TlsVersion::Tls11 => "1.1",
            TlsVersion::Tls12 => "1.2",
            TlsVersion::Tls13 => "1.3",
        }
    }

    /// The rustls protocol version, if rustls implements it.
    pub fn rustls_version(&self) -> Option<&'static SupportedProtocolVersion> {
        match self {
            TlsVersion::Tls12 => Some(&rustls::version::TLS12),
            TlsVersion::Tls13 => Some(&rustls::version::TLS13),
            TlsVersion::Tls10 | TlsVersion::Tls11 => None,
        }
    }

    /// Every rustls-supported version within `min..=max`.
    pub fn supported_protocol_versions(
        min: TlsVersion,
        max: TlsVersion,
    ) -> Result<Vec<&'static SupportedProtocolVersion>, TlsConfigError> {
        if min > max {
            return Err(TlsConfigError::InvalidVersionRange { min, max });
        }
        let versions: Vec<&'static SupportedProtocolVersion> = TLS_VERSIONS
            .iter()
            .map(|(_, version)| *version)
            .filter(|version| *version >= min && *version <= max)
            .filter_map(|version| version.rustls_version())
            .collect();
        if versions.is_empty() {
            return Err(TlsConfigError::NoSupportedVersions { min, max });
        }
        if min < TlsVersion::Tls12 {
            log::warn!(
                "[TLS] min_version {} is below what rustls implements, TLS {} is the effective floor",
                min,
                TlsVersion::Tls12
            );
        }
        Ok(versions)
    }
}

impl std::fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
