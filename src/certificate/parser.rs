//! Certificate decoding
//!
//! Turns DER bytes into a [`CertificateInfo`] using x509-parser.

use crate::models::{BasicConstraints, CertificateInfo};
use crate::utils::CertificateError;
use chrono::{DateTime, TimeZone, Utc};
use sha2::Digest;
use x509_parser::prelude::*;
use x509_parser::public_key::PublicKey;

/// Parse a single DER-encoded certificate
pub fn parse_certificate(der: &[u8]) -> Result<CertificateInfo, CertificateError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| CertificateError::ParseError {
        message: e.to_string(),
    })?;

    let not_before = asn1_time_to_datetime(cert.validity().not_before)?;
    let not_after = asn1_time_to_datetime(cert.validity().not_after)?;

    let basic_constraints = cert
        .basic_constraints()
        .ok()
        .flatten()
        .map(|bc| BasicConstraints {
            is_ca: bc.value.ca,
            path_len: bc.value.path_len_constraint,
        })
        .unwrap_or_default();

    Ok(CertificateInfo {
        version: cert.version().0 + 1, // X.509 version is 0-indexed
        serial: hex_colon(&cert.serial.to_bytes_be()),
        subject: format_name(cert.subject()),
        common_name: first_value(cert.subject().iter_common_name()).unwrap_or_default(),
        issuer: format_name(cert.issuer()),
        not_before,
        not_after,
        dns_names: extract_dns_names(&cert),
        signature_algorithm: signature_algorithm_name(
            &cert.signature_algorithm.algorithm.to_id_string(),
        ),
        public_key: describe_public_key(&cert),
        key_usage: extract_key_usage(&cert),
        extended_key_usage: extract_extended_key_usage(&cert),
        basic_constraints,
        fingerprint_sha256: hex_colon(&sha2::Sha256::digest(der)),
        raw_der: der.to_vec(),
    })
}

/// Render a distinguished name as `CN=.., O=.., C=.., OU=.., L=.., ST=..`,
/// keeping the first value of each attribute.
fn format_name(name: &X509Name) -> String {
    let attributes = [
        ("CN", first_value(name.iter_common_name())),
        ("O", first_value(name.iter_organization())),
        ("C", first_value(name.iter_country())),
        ("OU", first_value(name.iter_organizational_unit())),
        ("L", first_value(name.iter_locality())),
        ("ST", first_value(name.iter_state_or_province())),
    ];

    attributes
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn first_value<'a, 'b: 'a>(
    mut values: impl Iterator<Item = &'a AttributeTypeAndValue<'b>>,
) -> Option<String> {
    values
        .next()
        .and_then(|attr| attr.as_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn extract_dns_names(cert: &X509Certificate) -> Vec<String> {
    let mut names = Vec::new();

    if let Ok(Some(san_ext)) = cert.subject_alternative_name() {
        for name in &san_ext.value.general_names {
            if let GeneralName::DNSName(dns) = name {
                names.push(dns.to_string());
            }
        }
    }

    names
}

fn signature_algorithm_name(oid: &str) -> String {
    match oid {
        "1.2.840.113549.1.1.5" => "RSA-SHA1",
        "1.2.840.113549.1.1.11" => "RSA-SHA256",
        "1.2.840.113549.1.1.12" => "RSA-SHA384",
        "1.2.840.113549.1.1.13" => "RSA-SHA512",
        "1.2.840.113549.1.1.10" => "RSA-PSS",
        "1.2.840.10045.4.3.2" => "ECDSA-SHA256",
        "1.2.840.10045.4.3.3" => "ECDSA-SHA384",
        "1.2.840.10045.4.3.4" => "ECDSA-SHA512",
        "1.3.101.112" => "Ed25519",
        "1.3.101.113" => "Ed448",
        other => other,
    }
    .to_string()
}

fn describe_public_key(cert: &X509Certificate) -> String {
    let pk = cert.public_key();

    match pk.parsed() {
        Ok(PublicKey::RSA(rsa)) => format!("RSA ({} bits)", rsa.key_size()),
        Ok(PublicKey::EC(ec)) => {
            let curve = pk
                .algorithm
                .parameters
                .as_ref()
                .and_then(|params| params.as_oid().ok())
                .map(|oid| curve_name(&oid.to_id_string()))
                .unwrap_or_else(|| "unknown curve".to_string());
            format!("ECDSA {} ({} bits)", curve, ec.key_size())
        }
        _ => match pk.algorithm.algorithm.to_id_string().as_str() {
            "1.3.101.112" => "Ed25519".to_string(),
            "1.3.101.113" => "Ed448".to_string(),
            other => format!("Unknown ({})", other),
        },
    }
}

fn curve_name(oid: &str) -> String {
    match oid {
        "1.2.840.10045.3.1.7" => "P-256",
        "1.3.132.0.34" => "P-384",
        "1.3.132.0.35" => "P-521",
        other => other,
    }
    .to_string()
}

fn extract_key_usage(cert: &X509Certificate) -> Vec<String> {
    let mut usages = Vec::new();

    if let Ok(Some(ku)) = cert.key_usage() {
        let flags = ku.value;
        let named = [
            (flags.digital_signature(), "DigitalSignature"),
            (flags.non_repudiation(), "ContentCommitment"),
            (flags.key_encipherment(), "KeyEncipherment"),
            (flags.data_encipherment(), "DataEncipherment"),
            (flags.key_agreement(), "KeyAgreement"),
            (flags.key_cert_sign(), "CertSign"),
            (flags.crl_sign(), "CRLSign"),
            (flags.encipher_only(), "EncipherOnly"),
            (flags.decipher_only(), "DecipherOnly"),
        ];
        usages.extend(
            named
                .into_iter()
                .filter(|(set, _)| *set)
                .map(|(_, name)| name.to_string()),
        );
    }

    usages
}

fn extract_extended_key_usage(cert: &X509Certificate) -> Vec<String> {
    let mut usages = Vec::new();

    if let Ok(Some(eku)) = cert.extended_key_usage() {
        let eku = eku.value;
        if eku.server_auth {
            usages.push("ServerAuth".to_string());
        }
        if eku.client_auth {
            usages.push("ClientAuth".to_string());
        }
        if eku.code_signing {
            usages.push("CodeSigning".to_string());
        }
        if eku.email_protection {
            usages.push("EmailProtection".to_string());
        }
        if eku.time_stamping {
            usages.push("TimeStamping".to_string());
        }
        if eku.ocsp_signing {
            usages.push("OCSPSigning".to_string());
        }
        usages.extend(eku.other.iter().map(|_| "Unknown".to_string()));
    }

    usages
}

fn hex_colon(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":")
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, CertificateError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or_else(|| CertificateError::ParseError {
            message: "Invalid timestamp in certificate".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage() {
        let err = parse_certificate(b"not a certificate").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse certificate"));
    }

    #[test]
    fn test_signature_algorithm_names() {
        assert_eq!(signature_algorithm_name("1.2.840.113549.1.1.11"), "RSA-SHA256");
        assert_eq!(signature_algorithm_name("1.2.840.10045.4.3.2"), "ECDSA-SHA256");
        assert_eq!(signature_algorithm_name("1.2.3.4"), "1.2.3.4");
    }

    #[test]
    fn test_hex_colon() {
        assert_eq!(hex_colon(&[0x01, 0xAB, 0x0F]), "01:AB:0F");
        assert_eq!(hex_colon(&[]), "");
    }
}
