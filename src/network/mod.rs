use crate::Result;
use log::{debug, info};
use rustls::pki_types::CertificateDer;
use rustls::RootCertStore;
use rustls_pki_types::pem::PemObject;
use rustls_pki_types::ServerName;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

use crate::error::Error;

pub enum ClientStream {
    Tls(Box<tokio_rustls::client::TlsStream<TcpStream>>),
    Tcp(TcpStream),
}

impl ClientStream {
    pub fn is_tls(&self) -> bool {
        matches!(self, ClientStream::Tls(_))
    }

    pub async fn shutdown(&mut self) -> std::io::Result<()> {
        match self {
            ClientStream::Tls(stream) => stream.shutdown().await,
            ClientStream::Tcp(stream) => stream.shutdown().await,
        }
    }
}

#[derive(Clone)]
pub enum ClientPki<'a> {
    WebPki,
    Path { cert: String },
    Slice { cert: &'a [u8] },
}

/// Host part of a `host:port` address, brackets stripped for IPv6 literals.
///
/// A bare IPv6 literal such as `::1` carries no port and is returned whole.
pub fn host_of(addr: &str) -> &str {
    if let Some(rest) = addr.strip_prefix('[') {
        return match rest.split_once(']') {
            Some((host, _)) => host,
            None => rest,
        };
    }

    match addr.split_once(':') {
        Some((host, port)) if !port.contains(':') => host,
        _ => addr,
    }
}

pub async fn connect(addr: &str, pki: Option<ClientPki<'_>>) -> Result<ClientStream> {
    debug!("Opening TCP stream to {}", addr);
    let stream = TcpStream::connect(addr)
        .await
        .map_err(Error::ConnectionError)?;

    let Some(pki) = pki else {
        info!("Connected to {} over TCP", addr);
        return Ok(ClientStream::Tcp(stream));
    };

    let tls_connector = get_connector(pki)?;
    let server_name = ServerName::try_from(host_of(addr).to_string())
        .map_err(Error::InvalidServerName)?;

    let stream = tls_connector
        .connect(server_name, stream)
        .await
        .map_err(Error::CouldNotUpgradeToTls)?;
    info!("Connected to {} over TLS", addr);
    Ok(ClientStream::Tls(Box::new(stream)))
}

fn connector_from_roots(root_store: RootCertStore) -> TlsConnector {
    let config = rustls::ClientConfig::builder()
        .with_root_certificates(Arc::new(root_store))
        .with_no_client_auth();

    TlsConnector::from(Arc::new(config))
}

pub fn get_connector(pki: ClientPki) -> Result<TlsConnector> {
    match pki {
        ClientPki::Slice { cert } => {
            let certs = CertificateDer::pem_slice_iter(cert)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(Error::CertLoadError)?;
            let mut root_store = RootCertStore::empty();
            root_store.add_parsable_certificates(certs);

            Ok(connector_from_roots(root_store))
        }
        ClientPki::Path { cert: cert_path } => {
            let certs = CertificateDer::pem_file_iter(cert_path)
                .map_err(Error::CertLoadError)?
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(Error::CertLoadError)?;
            let mut root_store = RootCertStore::empty();
            root_store.add_parsable_certificates(certs);

            Ok(connector_from_roots(root_store))
        }
        ClientPki::WebPki => {
            let root_store = RootCertStore {
                roots: webpki_roots::TLS_SERVER_ROOTS.into(),
            };

            Ok(connector_from_roots(root_store))
        }
    }
}
