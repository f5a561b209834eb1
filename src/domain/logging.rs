//! Structured logging port.
//!
//! The domain only knows about [`Logger`] and [`TimeProvider`]; the browser console and
//! `Date` implementations live in the infrastructure layer and are registered once at
//! startup. Until then entries go nowhere.

use derive_more::Display;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use strum::EnumString;

/// Severity, ordered from chattiest to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

/// Layer and unit an entry comes from, shown as `LAYER:Unit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            timestamp: time_provider().current_timestamp(),
            level,
            component,
            message: message.into(),
        }
    }

    /// `[time] LEVEL LAYER:Unit: message`
    pub fn formatted(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            time_provider().format_timestamp(self.timestamp),
            self.level,
            self.component,
            self.message
        )
    }
}

pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    /// Entries below the threshold are never formatted.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// Register the process-wide logger. Later registrations are ignored.
pub fn init_logger(logger: Box<dyn Logger>) -> bool {
    LOGGER.set(logger).is_ok()
}

/// Register the process-wide clock. Later registrations are ignored.
pub fn init_time_provider(provider: Box<dyn TimeProvider>) -> bool {
    TIME_PROVIDER.set(provider).is_ok()
}

pub fn logger() -> &'static dyn Logger {
    LOGGER.get().map_or(&Silent as &dyn Logger, |logger| logger.as_ref())
}

pub fn time_provider() -> &'static dyn TimeProvider {
    TIME_PROVIDER.get().map_or(&Ticks as &dyn TimeProvider, |provider| provider.as_ref())
}

/// Send one message to the registered logger, building it only if `level` is enabled.
pub fn emit(level: LogLevel, component: LogComponent, message: impl FnOnce() -> String) {
    let logger = logger();
    if logger.enabled(level) {
        logger.log(LogEntry::new(level, component, message()));
    }
}

struct Silent;

impl Logger for Silent {
    fn log(&self, _entry: LogEntry) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Sequence numbers stand in for time until a clock is registered.
struct Ticks;

impl TimeProvider for Ticks {
    fn current_timestamp(&self) -> u64 {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        NEXT.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{:06}", timestamp)
    }
}

// Trace, debug and info are compiled out of release builds.

#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Trace,
                $component,
                || format!($($arg)*),
            );
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Debug,
                $component,
                || format!($($arg)*),
            );
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Info,
                $component,
                || format!($($arg)*),
            );
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::Warn,
            $component,
            || format!($($arg)*),
        );
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::Error,
            $component,
            || format!($($arg)*),
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("ERROR".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn component_display_carries_layer_prefix() {
        assert_eq!(LogComponent::Presentation("PriceGraph").to_string(), "PRE:PriceGraph");
        assert_eq!(LogComponent::Infrastructure("Http").to_string(), "INF:Http");
    }

    #[test]
    fn formatted_entry_reads_level_component_message() {
        let entry = LogEntry {
            timestamp: 7,
            level: LogLevel::Error,
            component: LogComponent::Application("ChartData"),
            message: "boom".to_string(),
        };
        let line = entry.formatted();
        assert!(line.ends_with("ERROR APP:ChartData: boom"), "{line}");
    }

    #[test]
    fn disabled_levels_skip_formatting() {
        // No logger is registered in this binary.
        emit(LogLevel::Error, LogComponent::Domain("Test"), || panic!("message was built"));
        assert!(!logger().enabled(LogLevel::Error));
    }
}
