#![allow(dead_code)]
use collector_tls::config::structs::client_tls_setting::ClientTlsSetting;
use collector_tls::config::structs::server_tls_setting::ServerTlsSetting;
use collector_tls::config::structs::tls_setting::TlsSetting;
use collector_tls::tls::cert_gen::generate_self_signed;
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, ServerConfig, ServerConnection};
use std::path::Path;
use std::sync::Arc;

/// A self-signed certificate and key written to disk. The certificate doubles
/// as its own trust anchor.
#[derive(Debug, Clone)]
pub struct TestIdentity {
    pub cert_file: String,
    pub key_file: String,
    pub cert_pem: String,
    pub key_pem: String,
}

pub fn generate_identity() -> (String, String) {
    generate_self_signed(vec![String::from("localhost")]).expect("certificate generation works")
}

pub fn write_identity(dir: &Path, name: &str) -> TestIdentity {
    let (cert_pem, key_pem) = generate_identity();
    let cert_file = dir.join(format!("{}.pem", name)).to_string_lossy().into_owned();
    let key_file = dir.join(format!("{}.key", name)).to_string_lossy().into_owned();
    std::fs::write(&cert_file, &cert_pem).unwrap();
    std::fs::write(&key_file, &key_pem).unwrap();
    TestIdentity {
        cert_file,
        key_file,
        cert_pem,
        key_pem,
    }
}

/// Replaces `path` by renaming a sibling file over it, so watchers never see
/// a half-written file.
pub fn replace_file(path: &str, contents: &str) {
    let staging = format!("{}.staging", path);
    std::fs::write(&staging, contents).unwrap();
    std::fs::rename(&staging, path).unwrap();
}

pub fn first_cert_der(pem: &str) -> Vec<u8> {
    let mut reader = pem.as_bytes();
    rustls_pemfile::certs(&mut reader)
        .next()
        .expect("a certificate block")
        .expect("a parsable certificate")
        .as_ref()
        .to_vec()
}

pub fn client_setting(ca_file: &str, identity: Option<&TestIdentity>) -> ClientTlsSetting {
    ClientTlsSetting {
        tls: TlsSetting {
            ca_file: ca_file.to_string(),
            cert_file: identity.map(|i| i.cert_file.clone()).unwrap_or_default(),
            key_file: identity.map(|i| i.key_file.clone()).unwrap_or_default(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn server_setting(identity: &TestIdentity, client_ca_file: &str, reload: bool) -> ServerTlsSetting {
    ServerTlsSetting {
        tls: TlsSetting {
            cert_file: identity.cert_file.clone(),
            key_file: identity.key_file.clone(),
            ..Default::default()
        },
        client_ca_file: client_ca_file.to_string(),
        client_ca_file_reload: reload,
    }
}

pub fn localhost() -> ServerName<'static> {
    ServerName::try_from("localhost").unwrap()
}

/// Runs a full handshake between the two configs over in-memory buffers.
pub fn handshake(
    client_config: Arc<ClientConfig>,
    server_config: Arc<ServerConfig>,
    server_name: ServerName<'static>,
) -> Result<(), rustls::Error> {
    let mut client = ClientConnection::new(client_config, server_name)?;
    let mut server = ServerConnection::new(server_config)?;
    for _ in 0..16 {
        if !client.is_handshaking() && !server.is_handshaking() {
            return Ok(());
        }
        client_to_server(&mut client, &mut server)?;
        server_to_client(&mut server, &mut client)?;
    }
    Err(rustls::Error::General(String::from("handshake did not complete")))
}

fn io_error(e: std::io::Error) -> rustls::Error {
    rustls::Error::General(e.to_string())
}

fn client_to_server(client: &mut ClientConnection, server: &mut ServerConnection) -> Result<(), rustls::Error> {
    let mut buffer = Vec::new();
    while client.wants_write() {
        client.write_tls(&mut buffer).map_err(io_error)?;
    }
    let mut reader = buffer.as_slice();
    while !reader.is_empty() {
        server.read_tls(&mut reader).map_err(io_error)?;
        server.process_new_packets()?;
    }
    Ok(())
}

fn server_to_client(server: &mut ServerConnection, client: &mut ClientConnection) -> Result<(), rustls::Error> {
    let mut buffer = Vec::new();
    while server.wants_write() {
        server.write_tls(&mut buffer).map_err(io_error)?;
    }
    let mut reader = buffer.as_slice();
    while !reader.is_empty() {
        client.read_tls(&mut reader).map_err(io_error)?;
        client.process_new_packets()?;
    }
    Ok(())
}
