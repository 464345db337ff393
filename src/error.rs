use rustls_pki_types::InvalidDnsNameError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Quotient out of range")]
    Overflow,
    #[error("Could not connect to the store: {0}")]
    ConnectionError(std::io::Error),
    #[error("Could not close the store connection: {0}")]
    CloseError(std::io::Error),
    #[error("Invalid TLS server name: {0}")]
    InvalidServerName(InvalidDnsNameError),
    #[error("Stream not upgraded to TLS: {0}")]
    CouldNotUpgradeToTls(std::io::Error),
    #[error("Can't load a certificate: {0}")]
    CertLoadError(rustls_pki_types::pem::Error),
    #[error("Invalid configuration: {0}")]
    Config(serde_json::Error),
}
