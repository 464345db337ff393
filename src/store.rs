//! Connectivity probe for the external data store.
//!
//! Only the connection is real: database and collection handles are named
//! views derived from the client, and the store creates them on first use.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::network::{self, ClientPki, ClientStream};
use crate::Result;

pub const DEFAULT_ADDR: &str = "localhost:27017";
pub const PROBE_DATABASE: &str = "test";
pub const PROBE_COLLECTION: &str = "Test";

/// Trust anchors used when the store is reached over TLS.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsConfig {
    WebPki,
    /// CA bundle on disk.
    Path { cert: String },
    /// CA bundle given inline as PEM text.
    Pem { cert: String },
}

impl<'a> From<&'a TlsConfig> for ClientPki<'a> {
    fn from(tls: &'a TlsConfig) -> Self {
        match tls {
            TlsConfig::WebPki => ClientPki::WebPki,
            TlsConfig::Path { cert } => ClientPki::Path { cert: cert.clone() },
            TlsConfig::Pem { cert } => ClientPki::Slice {
                cert: cert.as_bytes(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub addr: String,
    pub tls: Option<TlsConfig>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            tls: None,
        }
    }
}

/// Open connection to the store. Owns the underlying stream.
pub struct Client {
    addr: String,
    stream: ClientStream,
}

impl Client {
    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn is_tls(&self) -> bool {
        self.stream.is_tls()
    }

    pub fn database<'a>(&'a self, name: &str) -> Database<'a> {
        Database {
            client: self,
            name: name.to_string(),
        }
    }

    /// Close the connection. Dropping the client also releases the socket,
    /// but without a TLS close_notify.
    pub async fn shutdown(mut self) -> Result<()> {
        self.stream
            .shutdown()
            .await
            .map_err(crate::error::Error::CloseError)?;
        info!(addr = %self.addr, "store connection closed");
        Ok(())
    }
}

pub struct Database<'a> {
    client: &'a Client,
    name: String,
}

impl<'a> Database<'a> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn client(&self) -> &'a Client {
        self.client
    }

    pub fn collection(&self, name: &str) -> Collection<'_> {
        Collection {
            database: self,
            name: name.to_string(),
        }
    }
}

pub struct Collection<'a> {
    database: &'a Database<'a>,
    name: String,
}

impl Collection<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn database(&self) -> &Database<'_> {
        self.database
    }

    /// `<database>.<collection>`, the form the store addresses it by.
    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database.name, self.name)
    }
}

#[instrument(skip(config), fields(addr = %config.addr))]
pub async fn connect(config: &StoreConfig) -> Result<Client> {
    let pki = config.tls.as_ref().map(ClientPki::from);
    let stream = network::connect(&config.addr, pki).await?;

    Ok(Client {
        addr: config.addr.clone(),
        stream,
    })
}

/// Connect and walk down to the probe collection without touching data.
pub async fn database_connect(config: &StoreConfig) -> Result<Client> {
    let client = connect(config).await?;
    {
        let db = client.database(PROBE_DATABASE);
        let collection = db.collection(PROBE_COLLECTION);
        info!(namespace = %collection.namespace(), "store reachable");
    }
    Ok(client)
}
