pub mod client_tls_context;
pub mod identity_reloader;
pub mod identity_resolver;
pub mod identity_snapshot;
pub mod insecure_server_verifier;
pub mod server_base;
pub mod server_tls_context;
pub mod tls_error;
pub mod tls_version;
pub mod trust_snapshot;
pub mod trust_store_reloader;
pub mod trust_store_state;
