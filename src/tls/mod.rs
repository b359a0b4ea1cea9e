//! TLS trust material management with hot reload.
//!
//! This module turns the TLS settings of a client or server component into a
//! rustls configuration and keeps the material behind it current while the
//! process keeps serving connections.
//!
//! # Identity reload
//!
//! The certificate and key pair is held by an
//! [`IdentityReloader`](structs::identity_reloader::IdentityReloader). When a
//! `reload_interval` is configured, the first handshake after the interval
//! elapses re-reads both files. A failed re-read fails that handshake and
//! keeps the previous pair for the next attempt.
//!
//! # Client CA reload
//!
//! Servers with a `client_ca_file` require client certificates. With
//! `client_ca_file_reload` a background task watches the file and swaps in
//! the new pool on change. A broken file is logged and reported through
//! [`TrustStoreEvent`](enums::trust_store_event::TrustStoreEvent)s while the
//! last good pool keeps serving.
//!
//! # Example
//!
//! ```rust,ignore
//! use collector_tls::config::structs::server_tls_setting::ServerTlsSetting;
//! use collector_tls::tls::tls::build_server_context;
//!
//! let mut setting = ServerTlsSetting::default();
//! setting.tls.cert_file = "server.pem".to_string();
//! setting.tls.key_file = "server.key".to_string();
//! setting.client_ca_file = "clients-ca.pem".to_string();
//! setting.client_ca_file_reload = true;
//!
//! let context = build_server_context(&setting)?;
//! let acceptor_config = context.config();
//! ```

/// Self-signed certificate generation for development setups.
pub mod cert_gen;

/// Error and version enumerations.
pub mod enums;

/// Implementation blocks for the TLS types.
pub mod impls;

/// PEM loading for certificates, keys and CA bundles.
pub mod pem;

/// Reloaders, resolvers and the produced contexts.
pub mod structs;

/// Unit tests for the TLS module.
pub mod tests;

/// Client and server context builders.
#[allow(clippy::module_inception)]
pub mod tls;
