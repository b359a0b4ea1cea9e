pub mod configuration;
pub mod configuration_error;
pub mod tls_setting;
