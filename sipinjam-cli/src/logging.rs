//! Tracing setup
//!
//! stderr always; a daily-rotated file when a log directory is given.
//! `RUST_LOG` overrides the verbosity flags.

use anyhow::Context;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

use crate::cli::GlobalArgs;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

fn default_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("info,hyper=warn,reqwest=warn"),
        1 => EnvFilter::new("info,hyper=warn,sipinjam=debug,sipinjam_client=debug,shared=debug"),
        _ => EnvFilter::new("debug,hyper=info,sipinjam=trace,sipinjam_client=trace,shared=trace"),
    }
}

/// Console output; built per subscriber stack since `fmt::Layer` is typed by
/// the subscriber it sits on
fn console_layer<S>() -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_timer(LocalTimer)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
}

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

fn build(args: &GlobalArgs) -> anyhow::Result<(BoxedSubscriber, Option<WorkerGuard>)> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(args.verbose));

    let Some(log_dir) = &args.log_dir else {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer());
        return Ok((Box::new(subscriber), None));
    };

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let file_appender = rolling::daily(log_dir, "sipinjam.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(non_blocking_file);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer());
    Ok((Box::new(subscriber), Some(guard)))
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered file output is flushed.
pub fn init(args: &GlobalArgs) -> anyhow::Result<Option<WorkerGuard>> {
    let (subscriber, guard) = build(args)?;
    subscriber
        .try_init()
        .context("Failed to install the log subscriber")?;
    if let Some(log_dir) = &args.log_dir {
        tracing::info!(path = %log_dir.display(), "File logging enabled");
    }
    Ok(guard)
}
