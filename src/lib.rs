//! # Collector TLS
//!
//! Hot-reloading TLS trust material for the network-facing components of a
//! telemetry pipeline: exporters dialing out and receivers accepting
//! connections.
//!
//! ## Overview
//!
//! A handful of file paths and policy knobs (version floor and ceiling,
//! optional mutual TLS) are turned into a rustls configuration that stays
//! valid while certificates, keys and CA bundles are rotated on disk. No
//! restart is needed and in-flight handshakes are never disturbed.
//!
//! ## Features
//!
//! - **Identity reload**: the certificate and key are re-read on the first
//!   handshake after `reload_interval` has elapsed
//! - **Client CA reload**: the mutual TLS trust pool follows its file through
//!   filesystem notifications, keeping the last good pool on broken input
//! - **Lock-free reads**: handshakes read immutable snapshots that are swapped
//!   atomically on reload
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use collector_tls::config::structs::configuration::Configuration;
//! use collector_tls::tls::tls::{build_client_context, build_server_context};
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! if let Some(client) = &config.client {
//!     let context = build_client_context(client)?;
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - TOML configuration of the client and server TLS settings
//! - [`logging`] - Log output setup
//! - [`structs`] - CLI argument parsing
//! - [`tls`] - Context builders and the identity and trust store reloaders

/// Configuration management module.
///
/// Loads the TOML file holding the `[client]` and `[server]` TLS settings and
/// validates them before any certificate is read.
pub mod config;

/// Logging setup using fern.
pub mod logging;

/// CLI argument parsing.
pub mod structs;

/// TLS context construction and hot reload of certificates and CA pools.
pub mod tls;
