//! Logger Module
//!
//! Pluggable diagnostic sink held by the store.
//!
//! Embedding applications may supply their own `Logger`; when none is
//! configured the store falls back to `ConsoleLogger`, which forwards to
//! `tracing` events. The data path logs through `tracing` directly and never
//! calls into the pluggable sink.

use std::fmt;

/// Severity levels, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Six-level diagnostic sink
///
/// Implementors only need `log`; the per-level methods are provided.
pub trait Logger: Send + Sync {
    /// Emit a message at the given level
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>);

    fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Fatal, args)
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args)
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, args)
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args)
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args)
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, args)
    }
}

/// Default console sink
///
/// Drops anything less severe than `min_level`, then forwards to the
/// matching `tracing` macro. `tracing` has no fatal level, so fatal messages
/// are emitted as errors tagged with `fatal = true`.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether a message at `level` passes the filter
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        match level {
            LogLevel::Fatal => tracing::error!(fatal = true, "{}", args),
            LogLevel::Error => tracing::error!("{}", args),
            LogLevel::Warn => tracing::warn!("{}", args),
            LogLevel::Info => tracing::info!("{}", args),
            LogLevel::Debug => tracing::debug!("{}", args),
            LogLevel::Trace => tracing::trace!("{}", args),
        }
    }
}
