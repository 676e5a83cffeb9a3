//! Subscriber setup for the command-line tool.

use std::env;
use std::fs::{File, OpenOptions};
use std::io;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type BoxError = Box<dyn std::error::Error>;

fn open_log_file(path: &str) -> Result<File, BoxError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| format!("Failed to open log file: {err}").into())
}

fn map_init_err<E: std::fmt::Display>(err: E) -> BoxError {
    format!("Failed to initialize logging: {err}").into()
}

/// Install a stderr subscriber.
///
/// The filter comes from `ARCO_TRACE` (default `warn`, `off` disables
/// everything). `ARCO_LOG_FORMAT` selects `pretty` or `json`, and
/// `ARCO_LOG_FILE` adds a copy of every event to that file.
pub fn init() -> Result<(), BoxError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let level_value = env::var("ARCO_TRACE").unwrap_or_else(|_| "warn".to_string());
    let filter = if level_value.eq_ignore_ascii_case("off") {
        EnvFilter::default().add_directive(LevelFilter::OFF.into())
    } else {
        EnvFilter::try_new(&level_value).map_err(|err| format!("Invalid log filter: {err}"))?
    };

    let format = env::var("ARCO_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let log_file = env::var("ARCO_LOG_FILE").ok();
    let use_json = format.eq_ignore_ascii_case("json");
    if !use_json && !format.eq_ignore_ascii_case("pretty") {
        return Err("Invalid ARCO_LOG_FORMAT (expected 'json' or 'pretty')".into());
    }

    if use_json {
        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .json();
        let base = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer);
        if let Some(path) = log_file {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(open_log_file(&path)?)
                .with_ansi(false)
                .json();
            base.with(file_layer).try_init().map_err(map_init_err)?;
        } else {
            base.try_init().map_err(map_init_err)?;
        }
    } else {
        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .pretty();
        let base = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer);
        if let Some(path) = log_file {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(open_log_file(&path)?)
                .with_ansi(false)
                .pretty();
            base.with(file_layer).try_init().map_err(map_init_err)?;
        } else {
            base.try_init().map_err(map_init_err)?;
        }
    }
    Ok(())
}
