//! `host:port` address normalization

use crate::utils::TargetError;

/// Port used when a server target does not name one
pub const DEFAULT_PORT: u16 = 443;

/// Normalize `host` into a `host:port` address.
///
/// A host without a colon gets `default_port` appended. A host with a colon
/// must carry a numeric port after its *last* colon and is returned as is.
/// Splitting on the last colon keeps addresses such as `[::1]:8443` intact,
/// although bare IPv6 literals are not otherwise handled.
pub fn get_address(host: &str, default_port: u16) -> Result<String, TargetError> {
    if host.is_empty() {
        return Err(TargetError::NoHostProvided);
    }

    match host.rfind(':') {
        None => Ok(format!("{}:{}", host, default_port)),
        Some(index) => {
            host[index + 1..]
                .parse::<u16>()
                .map_err(|_| TargetError::InvalidHost {
                    host: host.to_string(),
                })?;
            Ok(host.to_string())
        }
    }
}

/// Strip an `http://` or `https://` scheme and anything after the authority.
///
/// Non-URL input is returned unchanged.
pub fn strip_url(target: &str) -> &str {
    let lowered = target.to_ascii_lowercase();
    let rest = if lowered.starts_with("https://") {
        &target["https://".len()..]
    } else if lowered.starts_with("http://") {
        &target["http://".len()..]
    } else {
        return target;
    };

    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

/// Host part of a normalized address, without IPv6 brackets.
pub fn host_of(address: &str) -> &str {
    let host = address
        .rfind(':')
        .map(|index| &address[..index])
        .unwrap_or(address);
    host.trim_start_matches('[').trim_end_matches(']')
}
