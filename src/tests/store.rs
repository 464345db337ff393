#[cfg(test)]
mod tests {
    use tokio::net::TcpListener;

    use crate::error::Error;
    use crate::network::{self, host_of, ClientPki};
    use crate::store::{self, StoreConfig, TlsConfig, PROBE_COLLECTION, PROBE_DATABASE};

    async fn listening_store() -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let hdl = tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                drop(socket);
            }
        });
        (addr, hdl)
    }

    async fn unused_addr() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().to_string()
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("localhost:27017"), "localhost");
        assert_eq!(host_of("db.internal"), "db.internal");
        assert_eq!(host_of("[::1]:27017"), "::1");
        assert_eq!(host_of("127.0.0.1:1"), "127.0.0.1");
        assert_eq!(host_of("::1"), "::1");
        assert_eq!(host_of("fe80::1:27017"), "fe80::1:27017");
        assert_eq!(host_of("[::1]"), "::1");
    }

    #[tokio::test]
    async fn test_probe_lookups() {
        let (addr, hdl) = listening_store().await;
        let config = StoreConfig {
            addr: addr.clone(),
            tls: None,
        };

        let client = store::database_connect(&config).await.unwrap();
        assert_eq!(client.addr(), addr);
        assert!(!client.is_tls());

        {
            let db = client.database(PROBE_DATABASE);
            let collection = db.collection(PROBE_COLLECTION);
            assert_eq!(db.name(), "test");
            assert_eq!(collection.name(), "Test");
            assert_eq!(collection.database().name(), "test");
            assert_eq!(collection.namespace(), "test.Test");
            assert_eq!(db.client().addr(), addr);
        }

        client.shutdown().await.unwrap();
        hdl.abort();
    }

    #[tokio::test]
    async fn test_unreachable_store() {
        let config = StoreConfig {
            addr: unused_addr().await,
            tls: None,
        };

        let result = store::connect(&config).await;
        assert!(matches!(result, Err(Error::ConnectionError(_))));
    }

    #[tokio::test]
    async fn test_database_connect_unreachable_store() {
        let config = StoreConfig {
            addr: unused_addr().await,
            tls: None,
        };

        let result = store::database_connect(&config).await;
        assert!(matches!(result, Err(Error::ConnectionError(_))));
    }

    #[tokio::test]
    async fn test_invalid_inline_pem() {
        let (addr, hdl) = listening_store().await;
        let config = StoreConfig {
            addr,
            tls: Some(TlsConfig::Pem {
                cert: "-----BEGIN CERTIFICATE-----\n!!!!\n-----END CERTIFICATE-----\n"
                    .to_string(),
            }),
        };

        let result = store::connect(&config).await;
        assert!(matches!(result, Err(Error::CertLoadError(_))));
        hdl.abort();
    }

    #[tokio::test]
    async fn test_missing_ca_file() {
        let (addr, hdl) = listening_store().await;
        let config = StoreConfig {
            addr,
            tls: Some(TlsConfig::Path {
                cert: "/nonexistent/ca.pem".to_string(),
            }),
        };

        let result = store::connect(&config).await;
        assert!(matches!(result, Err(Error::CertLoadError(_))));
        hdl.abort();
    }

    #[tokio::test]
    async fn test_tls_against_plain_endpoint() {
        let (addr, hdl) = listening_store().await;

        let result = network::connect(&addr, Some(ClientPki::WebPki)).await;
        assert!(matches!(result, Err(Error::CouldNotUpgradeToTls(_))));
        hdl.abort();
    }

    #[test]
    fn test_connector_from_slice_without_certificates() {
        assert!(network::get_connector(ClientPki::Slice { cert: b"" }).is_ok());
    }
}
