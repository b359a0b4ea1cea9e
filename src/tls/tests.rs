#[cfg(test)]
mod tls_tests {
    mod tls_version_tests {
        use crate::tls::enums::tls_error::TlsConfigError;
        use crate::tls::enums::tls_version::TlsVersion;
        use crate::tls::impls::tls_version::{DEFAULT_MAX_TLS_VERSION, DEFAULT_MIN_TLS_VERSION};
        use proptest::prelude::*;

        #[test]
        fn test_resolve_known_versions() {
            assert_eq!(TlsVersion::resolve("1.0", DEFAULT_MIN_TLS_VERSION).unwrap(), TlsVersion::Tls10);
            assert_eq!(TlsVersion::resolve("1.1", DEFAULT_MIN_TLS_VERSION).unwrap(), TlsVersion::Tls11);
            assert_eq!(TlsVersion::resolve("1.2", DEFAULT_MIN_TLS_VERSION).unwrap(), TlsVersion::Tls12);
            assert_eq!(TlsVersion::resolve("1.3", DEFAULT_MIN_TLS_VERSION).unwrap(), TlsVersion::Tls13);
        }

        #[test]
        fn test_resolve_empty_uses_default() {
            assert_eq!(TlsVersion::resolve("", TlsVersion::Tls11).unwrap(), TlsVersion::Tls11);
            assert_eq!(TlsVersion::resolve("", DEFAULT_MIN_TLS_VERSION).unwrap(), TlsVersion::Tls12);
            assert_eq!(TlsVersion::resolve("", DEFAULT_MAX_TLS_VERSION).unwrap(), TlsVersion::Tls13);
        }

        #[test]
        fn test_resolve_unsupported() {
            match TlsVersion::resolve("1.4", DEFAULT_MIN_TLS_VERSION) {
                Err(TlsConfigError::UnsupportedVersion(value)) => assert_eq!(value, "1.4"),
                other => panic!("unexpected result: {:?}", other),
            }
            assert!(TlsVersion::resolve("TLSv1.2", DEFAULT_MIN_TLS_VERSION).is_err());
            assert!(TlsVersion::resolve(" 1.2", DEFAULT_MIN_TLS_VERSION).is_err());
        }

        #[test]
        fn test_display_matches_config_strings() {
            for value in ["1.0", "1.1", "1.2", "1.3"] {
                let version = TlsVersion::resolve(value, DEFAULT_MIN_TLS_VERSION).unwrap();
                assert_eq!(version.to_string(), value);
            }
        }

        #[test]
        fn test_supported_protocol_versions() {
            let versions = TlsVersion::supported_protocol_versions(TlsVersion::Tls12, TlsVersion::Tls13).unwrap();
            assert_eq!(versions.len(), 2);
            let versions = TlsVersion::supported_protocol_versions(TlsVersion::Tls13, TlsVersion::Tls13).unwrap();
            assert_eq!(versions.len(), 1);
            assert_eq!(versions[0].version, rustls::ProtocolVersion::TLSv1_3);
            let versions = TlsVersion::supported_protocol_versions(TlsVersion::Tls10, TlsVersion::Tls12).unwrap();
            assert_eq!(versions.len(), 1);
            assert_eq!(versions[0].version, rustls::ProtocolVersion::TLSv1_2);
        }

        #[test]
        fn test_supported_protocol_versions_errors() {
            assert!(matches!(
                TlsVersion::supported_protocol_versions(TlsVersion::Tls13, TlsVersion::Tls12),
                Err(TlsConfigError::InvalidVersionRange { .. })
            ));
            assert!(matches!(
                TlsVersion::supported_protocol_versions(TlsVersion::Tls10, TlsVersion::Tls11),
                Err(TlsConfigError::NoSupportedVersions { .. })
            ));
        }

        proptest! {
            #[test]
            fn prop_resolve_rejects_unknown(value in "[0-9a-z.]{1,6}") {
                let known = ["1.0", "1.1", "1.2", "1.3"].contains(&value.as_str());
                prop_assert_eq!(TlsVersion::resolve(&value, DEFAULT_MIN_TLS_VERSION).is_ok(), known);
            }

            #[test]
            fn prop_supported_range_is_within_bounds(min in 0usize..4, max in 0usize..4) {
                let all = [TlsVersion::Tls10, TlsVersion::Tls11, TlsVersion::Tls12, TlsVersion::Tls13];
                let (min, max) = (all[min], all[max]);
                match TlsVersion::supported_protocol_versions(min, max) {
                    Ok(versions) => {
                        prop_assert!(min <= max);
                        prop_assert!(!versions.is_empty());
                        for version in all.iter().filter(|v| **v >= min && **v <= max) {
                            if let Some(supported) = version.rustls_version() {
                                prop_assert!(versions.iter().any(|v| v.version == supported.version));
                            }
                        }
                    }
                    Err(TlsConfigError::InvalidVersionRange { .. }) => prop_assert!(min > max),
                    Err(TlsConfigError::NoSupportedVersions { .. }) => prop_assert!(max < TlsVersion::Tls12),
                    Err(e) => prop_assert!(false, "unexpected error: {}", e),
                }
            }
        }
    }

    mod tls_error_tests {
        use crate::tls::enums::certificate_error::CertificateError;
        use crate::tls::enums::tls_error::TlsConfigError;

        #[test]
        fn test_root_cause_unwraps_context() {
            let err = TlsConfigError::ServerConfig(Box::new(TlsConfigError::IncompleteCredentialConfig));
            assert!(err.is_incomplete_credential_config());
            assert!(matches!(err.root_cause(), TlsConfigError::IncompleteCredentialConfig));
            let err = TlsConfigError::ClientConfig(Box::new(TlsConfigError::UnsupportedVersion("1.4".to_string())));
            assert!(!err.is_incomplete_credential_config());
        }

        #[test]
        fn test_error_messages_name_the_files() {
            let err = TlsConfigError::CredentialLoad {
                cert: "/etc/tls/server.pem".to_string(),
                key: "/etc/tls/server.key".to_string(),
                source: CertificateError::NoKeyFound,
            };
            let message = err.to_string();
            assert!(message.contains("/etc/tls/server.pem"));
            assert!(message.contains("/etc/tls/server.key"));
            assert!(message.contains("No private key found"));

            let err = TlsConfigError::ClientConfig(Box::new(TlsConfigError::TrustStoreLoad {
                path: "/etc/tls/ca.pem".to_string(),
                source: CertificateError::CaFileNotFound("/etc/tls/ca.pem".to_string()),
            }));
            assert!(err.to_string().starts_with("failed to load client TLS config"));
            assert!(err.to_string().contains("/etc/tls/ca.pem"));
        }
    }

    mod pem_tests {
        use crate::tls::enums::certificate_error::CertificateError;
        use crate::tls::pem::{load_certificates, load_private_key, load_root_store, system_root_store};

        #[test]
        fn test_missing_files() {
            assert!(matches!(
                load_certificates("/nonexistent/cert.pem"),
                Err(CertificateError::CertFileNotFound(_))
            ));
            assert!(matches!(
                load_private_key("/nonexistent/key.pem"),
                Err(CertificateError::KeyFileNotFound(_))
            ));
            assert!(matches!(
                load_root_store("/nonexistent/ca.pem"),
                Err(CertificateError::CaFileNotFound(_))
            ));
        }

        #[test]
        fn test_files_without_pem_blocks() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("empty.pem");
            std::fs::write(&path, "not a certificate\n").unwrap();
            let path = path.to_str().unwrap();
            assert!(matches!(load_certificates(path), Err(CertificateError::NoCertificatesFound)));
            assert!(matches!(load_private_key(path), Err(CertificateError::NoKeyFound)));
        }

        #[test]
        fn test_system_root_store_is_populated() {
            assert!(!system_root_store().is_empty());
        }
    }
}
