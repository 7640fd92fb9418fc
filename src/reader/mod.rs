//! Certificate acquisition
//!
//! Resolves a target string and reads exactly one leaf certificate from
//! a PEM file, standard input, or a TLS server.

pub mod file;
pub mod server;

pub use server::ServerReader;

use crate::certificate::parse_certificate;
use crate::config::settings::ReadSettings;
use crate::models::CertificateInfo;
use crate::target::{Mode, Target};
use crate::utils::Result;
use tracing::debug;

/// Read the certificate named by `target` under `mode`.
///
/// With [`Mode::Auto`] the mode is detected from the target's shape first.
pub async fn read(target: &str, mode: Mode, settings: &ReadSettings) -> Result<CertificateInfo> {
    let resolved = Target::resolve(target, mode, settings.default_port)?;
    debug!("Resolved {:?} ({}) to {:?}", target, mode, resolved);
    read_target(&resolved, settings).await
}

/// Read the certificate from an already resolved target.
pub async fn read_target(target: &Target, settings: &ReadSettings) -> Result<CertificateInfo> {
    let der = match target {
        Target::File(path) => file::read_pem_file(path).await?,
        Target::Stdin => file::read_pem_stdin().await?,
        Target::Server(address) => {
            ServerReader::new(settings.clone())
                .fetch_leaf(address)
                .await?
        }
    };

    let info = parse_certificate(&der)?;
    debug!("Parsed certificate for {} (serial {})", info.subject, info.serial);
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{InspectError, TargetError};

    #[tokio::test]
    async fn test_empty_target_is_validation_error() {
        let err = read("", Mode::Auto, &ReadSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InspectError::Target(TargetError::NoHostProvided)
        ));
    }

    #[tokio::test]
    async fn test_bad_port_is_validation_error() {
        let err = read("example.com:fff", Mode::Server, &ReadSettings::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid host: example.com:fff");
    }
}
