//! Certificate acquisition over TLS
//!
//! Performs a single TLS handshake with chain verification disabled and
//! keeps the leaf certificate the peer presented. Self-signed, expired and
//! mismatched certificates are all accepted so they can be inspected.

use crate::config::settings::ReadSettings;
use crate::target::host_of;
use crate::utils::{SslError, Stage};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::debug;

/// A certificate verifier that accepts any certificate.
#[derive(Debug)]
struct AcceptAnyCertVerifier;

impl ServerCertVerifier for AcceptAnyCertVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Fetches the leaf certificate from a TLS server
pub struct ServerReader {
    settings: ReadSettings,
}

impl ServerReader {
    /// Create a new server reader with the given settings
    pub fn new(settings: ReadSettings) -> Self {
        // Several crypto providers may be compiled in; pin ring
        let _ = rustls::crypto::ring::default_provider().install_default();
        Self { settings }
    }

    /// Connect to `address` (`host:port`), complete one handshake and return
    /// the DER bytes of the first certificate presented.
    ///
    /// No retry is attempted. The connection is closed before returning on
    /// every path.
    pub async fn fetch_leaf(&self, address: &str) -> Result<Vec<u8>, SslError> {
        let config = ClientConfig::builder()
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier))
            .with_no_client_auth();
        let connector = tokio_rustls::TlsConnector::from(Arc::new(config));

        let host = host_of(address);
        let server_name =
            ServerName::try_from(host.to_string()).map_err(|_| SslError::ConfigurationError {
                message: format!("Invalid server name: {}", host),
            })?;

        debug!("Connecting to {}", address);
        let stream = tokio::time::timeout(self.settings.connect_timeout(), TcpStream::connect(address))
            .await
            .map_err(|_| SslError::Timeout {
                address: address.to_string(),
                stage: Stage::Connect,
            })?
            .map_err(|e| SslError::ConnectionError {
                address: address.to_string(),
                message: e.to_string(),
            })?;

        debug!("Starting TLS handshake with {}", address);
        let mut tls_stream = tokio::time::timeout(
            self.settings.handshake_timeout(),
            connector.connect(server_name, stream),
        )
        .await
        .map_err(|_| SslError::Timeout {
            address: address.to_string(),
            stage: Stage::Handshake,
        })?
        .map_err(|e| SslError::HandshakeFailed {
            address: address.to_string(),
            message: e.to_string(),
        })?;

        let (_, client_connection) = tls_stream.get_ref();
        debug!(
            "Negotiated {:?} with {}",
            client_connection.protocol_version(),
            address
        );

        let leaf = leaf_certificate(client_connection.peer_certificates(), address);

        // Best effort close_notify; the socket is dropped either way
        let _ = tls_stream.shutdown().await;

        leaf
    }
}

/// DER of the first certificate the peer presented.
fn leaf_certificate(
    presented: Option<&[CertificateDer<'_>]>,
    address: &str,
) -> Result<Vec<u8>, SslError> {
    presented
        .and_then(|certs| certs.first())
        .map(|cert| cert.as_ref().to_vec())
        .ok_or_else(|| SslError::NoCertificates {
            address: address.to_string(),
        })
}
