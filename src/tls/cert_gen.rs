use log::info;
use rcgen::{CertificateParams, KeyPair};
use std::fs;

/// Generates a self-signed certificate for `subject_alt_names`, returning
/// the certificate and private key as PEM.
pub fn generate_self_signed(subject_alt_names: Vec<String>) -> Result<(String, String), rcgen::Error> {
    let key_pair = KeyPair::generate()?;
    let cert = CertificateParams::new(subject_alt_names)?.self_signed(&key_pair)?;
    Ok((cert.pem(), key_pair.serialize_pem()))
}

/// Writes a self-signed key and certificate for `localhost` and `domain`.
pub fn cert_gen(domain: &str, key_file: &str, cert_file: &str) -> std::io::Result<()> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }

    let (cert_pem, key_pem) = generate_self_signed(subject_alt_names).map_err(std::io::Error::other)?;

    fs::write(key_file, key_pem)?;
    info!("[CERTGEN] The key file {} has been generated", key_file);
    fs::write(cert_file, cert_pem)?;
    info!("[CERTGEN] The cert file {} has been generated", cert_file);

    info!(
        "[CERTGEN] The files {} and {} have been generated, use them only for development reasons",
        key_file, cert_file
    );
    Ok(())
}
