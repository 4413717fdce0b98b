//! Logging setup for the library and the command-line front end.
//!
//! Console output goes to stderr so stdout stays reserved for query
//! results. An interactive prompt can instead capture records in a
//! [`DebugBuffer`], which receives output only while it is active.

use std::{
    env, io,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::MakeWriter, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::config::{ConfigPaths, LogFormat, LogLevel};

const LOG_FORMAT_VAR: &str = "ARGSCOPE_LOG_FORMAT";

/// Shared text buffer that collects log output for an interactive prompt.
///
/// While inactive every write falls through to stderr. Records appended
/// while active are separated by newlines.
#[derive(Debug, Clone, Default)]
pub struct DebugBuffer {
    text: Arc<Mutex<String>>,
    active: Arc<AtomicBool>,
}

impl DebugBuffer {
    /// Creates an empty, inactive buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts capturing log output.
    pub fn activate(&self) {
        self.active.store(true, Ordering::SeqCst);
    }

    /// Stops capturing; subsequent output goes to stderr.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Whether output is currently captured.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Returns the captured text.
    pub fn contents(&self) -> String {
        self.text
            .lock()
            .map(|text| text.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Discards captured text.
    pub fn clear(&self) {
        match self.text.lock() {
            Ok(mut text) => text.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    fn append(&self, message: &str) -> io::Result<()> {
        let message = message.trim_end_matches('\n');
        let mut text = self
            .text
            .lock()
            .map_err(|_| io::Error::other("debug buffer lock poisoned"))?;

        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(message);
        Ok(())
    }
}

/// `MakeWriter` that routes each record to the debug buffer when it is
/// active and to stderr otherwise.
#[derive(Debug, Clone)]
pub struct PromptWriter {
    buffer: DebugBuffer,
}

impl PromptWriter {
    /// Creates a writer targeting `buffer`.
    pub fn new(buffer: DebugBuffer) -> Self {
        Self { buffer }
    }
}

/// Per-record writer produced by [`PromptWriter`].
pub enum PromptSink {
    /// Record is collected and appended to the buffer on drop.
    Buffer {
        /// Destination buffer
        buffer: DebugBuffer,
        /// Bytes written so far for this record
        pending: Vec<u8>,
    },
    /// Record goes straight to stderr.
    Stderr(io::Stderr),
}

impl io::Write for PromptSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            PromptSink::Buffer { pending, .. } => {
                pending.extend_from_slice(buf);
                Ok(buf.len())
            }
            PromptSink::Stderr(stderr) => stderr.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            PromptSink::Buffer { .. } => Ok(()),
            PromptSink::Stderr(stderr) => stderr.flush(),
        }
    }
}

impl Drop for PromptSink {
    fn drop(&mut self) {
        if let PromptSink::Buffer { buffer, pending } = self {
            if pending.is_empty() {
                return;
            }
            let message = String::from_utf8_lossy(pending);
            if buffer.append(&message).is_err() {
                eprintln!("{message}");
            }
        }
    }
}

impl<'a> MakeWriter<'a> for PromptWriter {
    type Writer = PromptSink;

    fn make_writer(&'a self) -> Self::Writer {
        if self.buffer.is_active() {
            PromptSink::Buffer {
                buffer: self.buffer.clone(),
                pending: Vec::new(),
            }
        } else {
            PromptSink::Stderr(io::stderr())
        }
    }
}

fn env_filter(level: &LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

fn log_format(default: LogFormat) -> LogFormat {
    env::var(LOG_FORMAT_VAR)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Builds a subscriber that writes plain records through `buffer`.
///
/// Useful for scoping a prompt session with
/// `tracing::subscriber::with_default` instead of installing it globally.
pub fn prompt_subscriber(
    level: LogLevel,
    buffer: DebugBuffer,
) -> impl Subscriber + for<'span> LookupSpan<'span> + Send + Sync {
    prompt_subscriber_with_filter(env_filter(&level), buffer)
}

/// Like [`prompt_subscriber`], but with an explicit filter that ignores
/// `RUST_LOG`.
pub fn prompt_subscriber_with_filter(
    filter: EnvFilter,
    buffer: DebugBuffer,
) -> impl Subscriber + for<'span> LookupSpan<'span> + Send + Sync {
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .compact()
            .with_target(true)
            .with_level(true)
            .with_ansi(false)
            .without_time()
            .with_writer(PromptWriter::new(buffer)),
    )
}

/// Initialize tracing for the command-line front end
///
/// Uses RUST_LOG if set, otherwise `level`. Output is pretty-printed to
/// stderr, or JSON when `ARGSCOPE_LOG_FORMAT=json` or `format` says so.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init(level: &LogLevel, format: LogFormat) -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::registry().with(env_filter(level));

    match log_format(format) {
        LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}

/// Initialize tracing for an interactive prompt session
///
/// Installs [`prompt_subscriber`] globally.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init_prompt_mode(
    level: LogLevel,
    buffer: DebugBuffer,
) -> Result<(), Box<dyn std::error::Error>> {
    prompt_subscriber(level, buffer).try_init()?;
    Ok(())
}

/// Initialize tracing with file output
///
/// Like [`init`], but also writes compact records to a daily rolling file in
/// the argscope logs directory.
///
/// # Errors
/// Returns error if file creation or tracing subscriber initialization fails
pub fn init_with_file(
    level: &LogLevel,
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    const DAYS_TO_KEEP: usize = 7;

    let log_dir = ConfigPaths::log_dir()?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("argscope")
        .filename_suffix("log")
        .build(&log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry().with(env_filter(level));

    match log_format(format) {
        LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .try_init()?;
        }
    }

    std::mem::forget(guard);

    Ok(())
}
