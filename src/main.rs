use clap::Parser;
use collector_tls::config::structs::configuration::Configuration;
use collector_tls::logging::setup_logging;
use collector_tls::structs::Cli;
use collector_tls::tls::cert_gen::cert_gen;
use collector_tls::tls::enums::trust_store_event::TrustStoreEvent;
use collector_tls::tls::tls::{build_client_context, build_server_context};
use log::{error, info, warn};
use std::process::exit;
use tokio::runtime::Builder;
use tokio::sync::broadcast::error::RecvError;

fn main() -> std::io::Result<()> {
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101),
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.create_selfsigned {
        if let Err(e) = cert_gen(&args.selfsigned_domain, &args.selfsigned_keyfile, &args.selfsigned_certfile) {
            error!("[CERTGEN] {}", e);
            exit(1);
        }
        exit(0);
    }

    Builder::new_multi_thread().enable_all().build()?.block_on(async {
        if let Some(client) = &config.client {
            match build_client_context(client) {
                Ok(Some(context)) => info!("[BOOT] Client TLS ready: {:?}", context),
                Ok(None) => info!("[BOOT] Client TLS disabled"),
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(1);
                }
            }
        }

        let server = match &config.server {
            Some(server) => match build_server_context(server) {
                Ok(context) => {
                    info!("[BOOT] Server TLS ready: {:?}", context);
                    Some(context)
                }
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(1);
                }
            },
            None => None,
        };

        if !args.watch {
            return;
        }

        let mut events = server
            .as_ref()
            .and_then(|context| context.trust_store())
            .map(|trust_store| trust_store.subscribe());
        if events.is_none() {
            warn!("[BOOT] No client CA file to watch, waiting for shutdown only");
        }

        info!("[BOOT] Running, press CTRL-C to stop");
        loop {
            tokio::select! {
                event = async {
                    match events.as_mut() {
                        Some(receiver) => receiver.recv().await,
                        None => std::future::pending().await,
                    }
                } => {
                    match event {
                        Ok(TrustStoreEvent::Reloaded { path, certificates }) => {
                            info!("[WATCH] {} now trusts {} client CA certificates", path, certificates);
                        }
                        Ok(TrustStoreEvent::Unchanged { path }) => {
                            info!("[WATCH] {} touched without changes", path);
                        }
                        Ok(TrustStoreEvent::ReloadFailed { path, error }) => {
                            warn!("[WATCH] {} could not be reloaded, keeping the previous pool: {}", path, error);
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            warn!("[WATCH] Missed {} trust store events", skipped);
                        }
                        Err(RecvError::Closed) => {
                            events = None;
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    break;
                }
            }
        }

        if let Some(context) = &server {
            context.shutdown().await;
        }
        info!("Server shutting down completed");
    });

    Ok(())
}
