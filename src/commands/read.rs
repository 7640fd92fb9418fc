//! Read command implementation

use crate::certificate::evaluate_with;
use crate::cli::ReadArgs;
use crate::config::Settings;
use crate::output::{print_certificate, print_json, JsonOutput};
use crate::reader::read_target;
use crate::target::{parse_mode, Target};
use crate::utils::{InspectError, Result};
use crate::utils::progress::create_spinner;
use chrono::Utc;
use std::future::Future;
use tracing::{debug, warn};

/// Run the read command
pub async fn run_read(args: &ReadArgs, settings: Settings) -> anyhow::Result<()> {
    let mut read_settings = settings.read;
    if let Some(secs) = args.timeout {
        read_settings = read_settings.with_timeout(secs);
    }

    let mode = parse_mode(&args.mode)?;
    let target = Target::resolve(&args.target, mode, read_settings.default_port)?;
    debug!("Reading {} as {}", target, target.mode());

    let spinner = match &target {
        Target::Server(address) => Some(create_spinner(&format!(
            "Retrieving certificate from {}...",
            address
        ))),
        _ => None,
    };

    let result = read_cancellable(
        read_target(&target, &read_settings),
        tokio::signal::ctrl_c(),
    )
    .await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let cert = result?;

    let now = Utc::now();
    if cert.is_not_yet_valid_at(now) {
        warn!("Certificate is not valid until {}", cert.not_before);
    }
    let expiry = evaluate_with(cert.not_after, now, &settings.expiry);
    debug!("Certificate expires in {}d {}h ({})", expiry.days, expiry.hours, expiry.severity);

    if args.json {
        print_json(&JsonOutput {
            source: target.to_string(),
            mode: target.mode(),
            certificate: &cert,
            expiry: &expiry,
        })?;
    } else {
        print_certificate(&cert, &expiry);
    }

    Ok(())
}

/// Race the read against `cancel`. Dropping the losing future closes any
/// open socket or file handle.
///
/// Only a delivered signal cancels; if the handler cannot be installed the
/// read runs to completion.
async fn read_cancellable<T>(
    read: impl Future<Output = Result<T>>,
    cancel: impl Future<Output = std::io::Result<()>>,
) -> Result<T> {
    tokio::select! {
        result = read => result,
        Ok(()) = cancel => Err(InspectError::Cancelled),
    }
}
