//! Shared fixtures: self-signed certificates and a local TLS server

#![allow(dead_code)]

use rcgen::{
    CertificateParams, DistinguishedName, DnType, ExtendedKeyUsagePurpose, KeyPair,
    KeyUsagePurpose, SerialNumber,
};
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;

pub const SERIAL: &[u8] = &[0x01, 0x23, 0x45];

/// A generated certificate with its private key
pub struct TestCert {
    pub der: Vec<u8>,
    pub pem: String,
    pub key_der: Vec<u8>,
}

/// Build a self-signed certificate for "example.com" valid from now for
/// `valid_for`, carrying `dns_names` as SANs.
pub fn build_cert(dns_names: &[&str], valid_for: time::Duration) -> TestCert {
    let now = time::OffsetDateTime::now_utc();
    build_cert_between(dns_names, now, now + valid_for)
}

/// Build a self-signed certificate with an explicit validity window.
pub fn build_cert_between(
    dns_names: &[&str],
    not_before: time::OffsetDateTime,
    not_after: time::OffsetDateTime,
) -> TestCert {
    let sans: Vec<String> = dns_names.iter().map(|name| name.to_string()).collect();
    let mut params = CertificateParams::new(sans).expect("valid SANs");

    let mut name = DistinguishedName::new();
    name.push(DnType::CommonName, "example.com");
    name.push(DnType::OrganizationName, "Test Corp");
    params.distinguished_name = name;

    params.not_before = not_before;
    params.not_after = not_after;
    params.serial_number = Some(SerialNumber::from_slice(SERIAL));
    params.key_usages = vec![
        KeyUsagePurpose::DigitalSignature,
        KeyUsagePurpose::KeyEncipherment,
    ];
    params.extended_key_usages = vec![ExtendedKeyUsagePurpose::ServerAuth];

    let key_pair = KeyPair::generate().expect("key generation");
    let cert = params.self_signed(&key_pair).expect("self-signed certificate");

    TestCert {
        der: cert.der().to_vec(),
        pem: cert.pem(),
        key_der: key_pair.serialize_der(),
    }
}

/// Serve `cert` over TLS on an ephemeral local port and return `127.0.0.1:port`.
///
/// The server task runs until the test runtime shuts down.
pub async fn serve(cert: &TestCert) -> String {
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(
            vec![CertificateDer::from(cert.der.clone())],
            PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(cert.key_der.clone())),
        )
        .expect("server config");
    let acceptor = TlsAcceptor::from(Arc::new(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("local addr").to_string();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                if let Ok(mut tls) = acceptor.accept(stream).await {
                    let _ = tls.shutdown().await;
                }
            });
        }
    });

    address
}
