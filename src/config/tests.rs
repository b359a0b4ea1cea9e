#[cfg(test)]
mod config_tests {
    mod duration_tests {
        use crate::config::duration::{format_duration, parse_duration};
        use proptest::prelude::*;
        use std::time::Duration;

        #[test]
        fn test_parse_duration_plain_seconds() {
            assert_eq!(parse_duration("90").unwrap(), Duration::from_secs(90));
            assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
            assert_eq!(parse_duration("").unwrap(), Duration::ZERO);
        }

        #[test]
        fn test_parse_duration_units() {
            assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
            assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
            assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
            assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
            assert_eq!(parse_duration("1m500ms").unwrap(), Duration::from_millis(60_500));
        }

        #[test]
        fn test_parse_duration_rejects_garbage() {
            assert!(parse_duration("soon").is_err());
            assert!(parse_duration("10x").is_err());
            assert!(parse_duration("-5s").is_err());
            assert!(parse_duration("1.5h").is_err());
        }

        #[test]
        fn test_format_duration() {
            assert_eq!(format_duration(&Duration::from_secs(3600)), "3600s");
            assert_eq!(format_duration(&Duration::from_millis(1500)), "1500ms");
            assert_eq!(format_duration(&Duration::ZERO), "0s");
        }

        proptest! {
            #[test]
            fn prop_seconds_match_from_secs(secs in 0u64..10_000_000) {
                prop_assert_eq!(parse_duration(&secs.to_string()).unwrap(), Duration::from_secs(secs));
                prop_assert_eq!(parse_duration(&format!("{}s", secs)).unwrap(), Duration::from_secs(secs));
            }

            #[test]
            fn prop_formatted_duration_parses_back(millis in 0u64..100_000_000) {
                let duration = Duration::from_millis(millis);
                prop_assert_eq!(parse_duration(&format_duration(&duration)).unwrap(), duration);
            }

            #[test]
            fn prop_parse_never_panics(input in "\\PC{0,12}") {
                let _ = parse_duration(&input);
            }
        }
    }

    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use crate::tls::enums::tls_error::TlsConfigError;
        use std::time::Duration;

        #[test]
        fn test_configuration_parses_flattened_sections() {
            let config = Configuration::load(
                br#"
log_level = "debug"

[client]
ca_file = "ca.pem"
cert_file = "client.pem"
key_file = "client.key"
reload_interval = "1h"
server_name_override = "collector.internal"

[server]
cert_file = "server.pem"
key_file = "server.key"
min_version = "1.3"
reload_interval = 60
client_ca_file = "clients.pem"
client_ca_file_reload = true
"#,
            )
            .unwrap();
            assert_eq!(config.log_level, "debug");
            let client = config.client.unwrap();
            assert_eq!(client.tls.ca_file, "ca.pem");
            assert_eq!(client.tls.reload_interval, Duration::from_secs(3600));
            assert_eq!(client.server_name_override, "collector.internal");
            assert!(!client.insecure);
            let server = config.server.unwrap();
            assert_eq!(server.tls.min_version, "1.3");
            assert_eq!(server.tls.max_version, "");
            assert_eq!(server.tls.reload_interval, Duration::from_secs(60));
            assert_eq!(server.client_ca_file, "clients.pem");
            assert!(server.client_ca_file_reload);
        }

        #[test]
        fn test_configuration_missing_sections() {
            let config = Configuration::load(b"").unwrap();
            assert_eq!(config.log_level, "info");
            assert!(config.client.is_none());
            assert!(config.server.is_none());
        }

        #[test]
        fn test_configuration_rejects_bad_interval() {
            assert!(Configuration::load(b"log_level = \"info\"\n[client]\nreload_interval = \"forever\"\n").is_err());
            assert!(Configuration::load(b"log_level = \"info\"\n[client]\nreload_interval = -5\n").is_err());
        }

        #[test]
        fn test_configuration_rejects_invalid_utf8() {
            let mut data = b"log_level = \"info\"\n[server]\ncert_file = \"".to_vec();
            data.extend_from_slice(&[0xff, 0xfe]);
            data.extend_from_slice(b".pem\"\n");
            match Configuration::load(&data) {
                Err(ConfigurationError::IOError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
                other => panic!("unexpected result: {:?}", other),
            }
        }

        #[test]
        fn test_init_round_trips_through_toml() {
            let config = Configuration::init();
            let encoded = toml::to_string(&config).unwrap();
            let decoded = Configuration::load(encoded.as_bytes()).unwrap();
            assert_eq!(decoded.client, config.client);
            assert_eq!(decoded.server, config.server);
            assert!(decoded.validate().is_ok());
        }

        #[test]
        fn test_validate_rejects_half_credentials() {
            let mut config = Configuration::init();
            if let Some(server) = config.server.as_mut() {
                server.tls.key_file.clear();
            }
            match config.validate() {
                Err(ConfigurationError::Invalid(section, TlsConfigError::IncompleteCredentialConfig)) => {
                    assert_eq!(section, "server");
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }

        #[test]
        fn test_validate_rejects_bad_versions() {
            let mut config = Configuration::init();
            if let Some(client) = config.client.as_mut() {
                client.tls.min_version = String::from("1.4");
            }
            assert!(matches!(
                config.validate(),
                Err(ConfigurationError::Invalid(_, TlsConfigError::UnsupportedVersion(_)))
            ));

            let mut config = Configuration::init();
            if let Some(client) = config.client.as_mut() {
                client.tls.min_version = String::from("1.3");
                client.tls.max_version = String::from("1.2");
            }
            assert!(matches!(
                config.validate(),
                Err(ConfigurationError::Invalid(_, TlsConfigError::InvalidVersionRange { .. }))
            ));
        }

        #[test]
        fn test_load_from_file_creates_default() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            assert!(matches!(
                Configuration::load_from_file(path, false),
                Err(ConfigurationError::IOError(_))
            ));
            assert!(matches!(
                Configuration::load_from_file(path, true),
                Err(ConfigurationError::Created(_))
            ));
            let config = Configuration::load_from_file(path, false).unwrap();
            assert_eq!(config.log_level, "info");
        }

        #[test]
        fn test_configuration_error_display() {
            let err = ConfigurationError::Invalid(String::from("client"), TlsConfigError::IncompleteCredentialConfig);
            assert!(err.to_string().starts_with("[client] "));
            assert!(err.to_string().contains("both certificate and key"));
        }
    }
}
