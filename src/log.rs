use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{Registry, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;

use thiserror::Error;
use anyhow::Result;
use crate::log::LogError::{InitLogTracerError, SetGlobalDefaultError};

pub const LOG_FILE_NAME: &str = "scene_rigs.log";
pub const DEFAULT_FILTER: &str = "INFO";

/// Installs the global subscriber. Writes bunyan-formatted JSON to a daily rolling file in
/// `log_dir`. The returned guard must be held for as long as logs should be flushed.
pub fn init_logger(log_dir: &str) -> Result<WorkerGuard> {
    LogTracer::init().map_err(|e| {
        InitLogTracerError {
            source: e
        }
    })?;

    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking_writer);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = Registry::default()
        .with(filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer);
    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        SetGlobalDefaultError {
            source: e
        }
    })?;

    Ok(guard)
}

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Error initializing log-forwarder for tracing")]
    InitLogTracerError {
        source: tracing_log::log_tracer::SetLoggerError
    },
    #[error("Error setting global default subscriber for tracing")]
    SetGlobalDefaultError {
        source: tracing::subscriber::SetGlobalDefaultError
    }
}
