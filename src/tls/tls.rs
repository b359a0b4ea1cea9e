use crate::config::structs::client_tls_setting::ClientTlsSetting;
use crate::config::structs::server_tls_setting::ServerTlsSetting;
use crate::config::structs::tls_setting::TlsSetting;
use crate::tls::enums::server_trust::ServerTrust;
use crate::tls::enums::tls_error::TlsConfigError;
use crate::tls::enums::tls_version::TlsVersion;
use crate::tls::impls::tls_version::{DEFAULT_MAX_TLS_VERSION, DEFAULT_MIN_TLS_VERSION};
use crate::tls::pem::{load_root_store, system_root_store};
use crate::tls::structs::client_tls_context::ClientTlsContext;
use crate::tls::structs::identity_reloader::IdentityReloader;
use crate::tls::structs::identity_resolver::IdentityResolver;
use crate::tls::structs::insecure_server_verifier::InsecureServerVerifier;
use crate::tls::structs::server_base::ServerBase;
use crate::tls::structs::server_tls_context::ServerTlsContext;
use crate::tls::structs::trust_store_reloader::TrustStoreReloader;
use log::{info, warn};
use rustls::crypto::CryptoProvider;
use rustls::{ClientConfig, RootCertStore, SupportedProtocolVersion};
use std::sync::Arc;

/// The process-wide rustls provider, falling back to ring.
pub fn crypto_provider() -> Arc<CryptoProvider> {
    CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::ring::default_provider()))
}

/// Builds the TLS context for an outgoing connection.
///
/// Returns `Ok(None)` when `insecure` is set and no `ca_file` is given: the
/// connection is meant to run without TLS. The CA pool is read once; only the
/// client identity is reloaded.
pub fn build_client_context(setting: &ClientTlsSetting) -> Result<Option<ClientTlsContext>, TlsConfigError> {
    if setting.insecure && setting.tls.ca_file.is_empty() {
        info!("[TLS] Client TLS disabled (insecure without ca_file)");
        return Ok(None);
    }
    load_client_context(setting)
        .map(Some)
        .map_err(|e| TlsConfigError::ClientConfig(Box::new(e)))
}

fn load_client_context(setting: &ClientTlsSetting) -> Result<ClientTlsContext, TlsConfigError> {
    setting.tls.validate()?;
    let provider = crypto_provider();
    let (min_version, max_version, versions) = resolve_versions(&setting.tls)?;
    let roots = load_ca_file(&setting.tls)?.unwrap_or_else(|| Arc::new(system_root_store()));
    let identity = load_identity(&setting.tls, &provider)?;

    let builder = ClientConfig::builder_with_provider(Arc::clone(&provider)).with_protocol_versions(&versions)?;
    let builder = if setting.insecure_skip_verify {
        warn!("[TLS] Server certificate verification is disabled (insecure_skip_verify)");
        builder
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(InsecureServerVerifier::new(Arc::clone(&provider))))
    } else {
        builder.with_root_certificates(roots)
    };
    let config = match &identity {
        Some(reloader) => builder.with_client_cert_resolver(Arc::new(IdentityResolver::new(Some(Arc::clone(reloader))))),
        None => builder.with_no_client_auth(),
    };

    let server_name_override = if setting.server_name_override.is_empty() {
        None
    } else {
        Some(setting.server_name_override.clone())
    };
    Ok(ClientTlsContext {
        config: Arc::new(config),
        server_name_override,
        insecure_skip_verify: setting.insecure_skip_verify,
        identity,
        min_version,
        max_version,
    })
}

/// Builds the TLS context for accepted connections.
///
/// With `client_ca_file` set every client must present a certificate issued
/// by one of its CAs; with `client_ca_file_reload` the pool follows changes
/// to that file. Watching needs a running tokio runtime.
pub fn build_server_context(setting: &ServerTlsSetting) -> Result<ServerTlsContext, TlsConfigError> {
    load_server_context(setting).map_err(|e| TlsConfigError::ServerConfig(Box::new(e)))
}

fn load_server_context(setting: &ServerTlsSetting) -> Result<ServerTlsContext, TlsConfigError> {
    setting.tls.validate()?;
    let provider = crypto_provider();
    let (min_version, max_version, versions) = resolve_versions(&setting.tls)?;
    let root_store = load_ca_file(&setting.tls)?;
    let identity = load_identity(&setting.tls, &provider)?;
    let base = ServerBase::new(provider, versions, Arc::new(IdentityResolver::new(identity.clone())));

    let trust = if setting.client_ca_file.is_empty() {
        if setting.client_ca_file_reload {
            warn!("[TLS] client_ca_file_reload has no effect without client_ca_file");
        }
        ServerTrust::Static(Arc::new(base.build_config(None)?))
    } else {
        let reloader = Arc::new(TrustStoreReloader::new(&setting.client_ca_file, base)?);
        if setting.client_ca_file_reload {
            reloader.start_watching()?;
        }
        info!("[TLS] Client certificates are required and verified against {}", setting.client_ca_file);
        ServerTrust::Reloading(reloader)
    };

    Ok(ServerTlsContext {
        trust,
        root_store,
        identity,
        min_version,
        max_version,
    })
}

fn resolve_versions(
    setting: &TlsSetting,
) -> Result<(TlsVersion, TlsVersion, Vec<&'static SupportedProtocolVersion>), TlsConfigError> {
    let min_version = TlsVersion::resolve(&setting.min_version, DEFAULT_MIN_TLS_VERSION)?;
    let max_version = TlsVersion::resolve(&setting.max_version, DEFAULT_MAX_TLS_VERSION)?;
    let versions = TlsVersion::supported_protocol_versions(min_version, max_version)?;
    Ok((min_version, max_version, versions))
}

fn load_ca_file(setting: &TlsSetting) -> Result<Option<Arc<RootCertStore>>, TlsConfigError> {
    if setting.ca_file.is_empty() {
        return Ok(None);
    }
    let (_, roots) = load_root_store(&setting.ca_file).map_err(|source| TlsConfigError::TrustStoreLoad {
        path: setting.ca_file.clone(),
        source,
    })?;
    Ok(Some(Arc::new(roots)))
}

fn load_identity(
    setting: &TlsSetting,
    provider: &Arc<CryptoProvider>,
) -> Result<Option<Arc<IdentityReloader>>, TlsConfigError> {
    if !setting.has_credentials() {
        return Ok(None);
    }
    let reloader = IdentityReloader::new(
        &setting.cert_file,
        &setting.key_file,
        setting.reload_interval,
        Arc::clone(provider),
    )?;
    Ok(Some(Arc::new(reloader)))
}
