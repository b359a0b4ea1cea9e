pub mod certificate_error;
pub mod server_trust;
pub mod tls_error;
pub mod tls_version;
pub mod trust_store_event;
