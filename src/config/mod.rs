//! Configuration management module.
//!
//! Loads the TOML file that describes the TLS settings of the client and
//! server components, and defines the setting structs the TLS builders
//! consume.
//!
//! # Configuration Structure
//!
//! ```toml
//! log_level = "info"
//!
//! [client]
//! ca_file = "ca.pem"
//! cert_file = "client.pem"
//! key_file = "client.key"
//! reload_interval = "1h"
//! server_name_override = "collector.internal"
//!
//! [server]
//! cert_file = "server.pem"
//! key_file = "server.key"
//! min_version = "1.3"
//! client_ca_file = "clients-ca.pem"
//! client_ca_file_reload = true
//! ```

/// Duration (de)serialisation for `reload_interval`.
pub mod duration;

/// Configuration enumerations.
pub mod enums;

/// Implementation blocks for configuration loading/saving and validation.
pub mod impls;

/// Configuration data structures.
pub mod structs;

/// Unit tests for configuration parsing.
pub mod tests;
