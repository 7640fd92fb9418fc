//! Certificate reading from PEM files and standard input

use crate::utils::FileError;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Read a file and return the DER payload of its first PEM block.
///
/// The extension is not checked; any readable path is attempted.
pub async fn read_pem_file(path: &Path) -> Result<Vec<u8>, FileError> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| FileError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    debug!("Read {} bytes from {}", data.len(), path.display());
    decode_first_pem(&data, &path.display().to_string())
}

/// Read PEM data from standard input until EOF.
pub async fn read_pem_stdin() -> Result<Vec<u8>, FileError> {
    let mut data = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut data)
        .await
        .map_err(|e| FileError::ReadFailed {
            path: "<stdin>".to_string(),
            message: e.to_string(),
        })?;

    debug!("Read {} bytes from stdin", data.len());
    decode_first_pem(&data, "<stdin>")
}

/// Decode the first PEM block in `data`. Later blocks are ignored.
pub fn decode_first_pem(data: &[u8], source: &str) -> Result<Vec<u8>, FileError> {
    let block = ::pem::parse(data).map_err(|e| {
        debug!("PEM decode of {} failed: {}", source, e);
        FileError::NoPemBlock {
            path: source.to_string(),
        }
    })?;

    debug!("Decoded PEM block with tag {}", block.tag());
    Ok(block.into_contents())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BLOCKS: &[u8] = b"-----BEGIN CERTIFICATE-----\nAQID\n-----END CERTIFICATE-----\n\
-----BEGIN CERTIFICATE-----\nBAUG\n-----END CERTIFICATE-----\n";

    #[test]
    fn test_decode_first_block_only() {
        assert_eq!(decode_first_pem(TWO_BLOCKS, "test").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_without_pem_block() {
        let err = decode_first_pem(b"this is not a certificate", "junk.txt").unwrap_err();
        assert!(matches!(err, FileError::NoPemBlock { .. }));
        assert!(err.to_string().contains("failed to decode PEM block"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = read_pem_file(Path::new("/nonexistent/cert.pem"))
            .await
            .unwrap_err();
        assert!(matches!(err, FileError::ReadFailed { .. }));
        assert!(err.to_string().contains("/nonexistent/cert.pem"));
    }
}
