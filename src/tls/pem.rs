use crate::tls::enums::certificate_error::CertificateError;
use rustls::RootCertStore;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::sign::CertifiedKey;
use std::fs::File;
use std::io::BufReader;

pub fn load_certificates(cert_path: &str) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
    let certs_file = File::open(cert_path)
        .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path, e)))?;
    let mut certs_reader = BufReader::new(certs_file);
    let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut certs_reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
    if certs.is_empty() {
        return Err(CertificateError::NoCertificatesFound);
    }
    Ok(certs)
}

/// Reads the first PKCS#8, PKCS#1 or SEC1 private key found in `key_path`.
pub fn load_private_key(key_path: &str) -> Result<PrivateKeyDer<'static>, CertificateError> {
    let key_file = File::open(key_path)
        .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
    let mut key_reader = BufReader::new(key_file);
    rustls_pemfile::private_key(&mut key_reader)
        .map_err(|e| CertificateError::KeyParseError(e.to_string()))?
        .ok_or(CertificateError::NoKeyFound)
}

/// Loads a certificate chain and its private key, checking that they belong together.
pub fn load_certified_key(
    cert_path: &str,
    key_path: &str,
    provider: &CryptoProvider,
) -> Result<CertifiedKey, CertificateError> {
    let certs = load_certificates(cert_path)?;
    let key = load_private_key(key_path)?;
    let signing_key = provider
        .key_provider
        .load_private_key(key)
        .map_err(|e| CertificateError::CertifiedKeyError(e.to_string()))?;
    let certified_key = CertifiedKey::new(certs, signing_key);
    match certified_key.keys_match() {
        Ok(()) => Ok(certified_key),
        // The provider could not expose the public half; nothing to compare against.
        Err(rustls::Error::InconsistentKeys(rustls::InconsistentKeys::Unknown)) => Ok(certified_key),
        Err(rustls::Error::InconsistentKeys(rustls::InconsistentKeys::KeyMismatch)) => {
            Err(CertificateError::KeyMismatch)
        }
        Err(e) => Err(CertificateError::CertifiedKeyError(e.to_string())),
    }
}

/// Reads a CA bundle, returning the raw certificates alongside the trust pool built from them.
pub fn load_root_store(
    ca_path: &str,
) -> Result<(Vec<CertificateDer<'static>>, RootCertStore), CertificateError> {
    let certs = load_certificates(ca_path).map_err(|e| match e {
        CertificateError::CertFileNotFound(reason) => CertificateError::CaFileNotFound(reason),
        other => other,
    })?;
    let mut roots = RootCertStore::empty();
    let (added, ignored) = roots.add_parsable_certificates(certs.iter().cloned());
    if added == 0 {
        return Err(CertificateError::CertParseError(format!(
            "none of the {} certificates in {} is a usable trust anchor",
            ignored, ca_path
        )));
    }
    if ignored > 0 {
        log::warn!("[TLS] Ignored {} unparsable certificates in {}", ignored, ca_path);
    }
    Ok((certs, roots))
}

/// The platform trust store used when no `ca_file` is configured.
pub fn system_root_store() -> RootCertStore {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    roots
}
