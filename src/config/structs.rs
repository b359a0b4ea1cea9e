//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Client side TLS settings (`[client]`).
pub mod client_tls_setting;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Server side TLS settings (`[server]`).
pub mod server_tls_setting;

/// Settings shared by clients and servers.
pub mod tls_setting;
