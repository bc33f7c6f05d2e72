use anyhow::Context;
use chrono::Utc;
use serde_json::Value;
use std::fs;
use tracing::info;
use tracing_appender::rolling;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::{fmt, layer::SubscriberExt, Layer, Registry};

/// Target routed to the audit file. Admin writes log under it.
pub const AUDIT_TARGET: &str = "admin_audit";

pub fn setup_logging(log_dir: &str, json: bool) -> Result<(), anyhow::Error> {
    fs::create_dir_all(log_dir).context("Failed to create logs directory")?;

    // Daily rotating file appender
    let file_appender = rolling::daily(log_dir, "audit.log");

    let audit_filter = Targets::new().with_target(AUDIT_TARGET, LevelFilter::TRACE);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(audit_filter);

    let stdout_layer = if json {
        fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .with_filter(LevelFilter::INFO)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_filter(LevelFilter::INFO)
            .boxed()
    };

    let subscriber = Registry::default().with(stdout_layer).with(file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global default subscriber")?;

    Ok(())
}

/// Records an admin write in the audit log
pub fn log_admin_action(method: &str, path: &str, body: Option<&Value>) {
    let timestamp = Utc::now().to_rfc3339();

    match body {
        Some(b) => {
            info!(
                target: AUDIT_TARGET,
                method = method,
                uri = path,
                body = %b,
                "{} {} {} {}", timestamp, method, path, b
            );
        }
        None => {
            info!(
                target: AUDIT_TARGET,
                method = method,
                uri = path,
                "{} {} {}", timestamp, method, path
            );
        }
    }
}
