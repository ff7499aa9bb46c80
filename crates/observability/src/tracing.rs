//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never interleave with an interactive session on
//! stdout. Filtering follows `RUST_LOG`; the output format follows
//! `STOCKROOM_LOG_FORMAT`.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable lines.
    Pretty,
}

impl LogFormat {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the format through `lookup`.
    ///
    /// Unset means JSON. An unrecognized value comes back as `Err(raw)`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        match lookup(LOG_FORMAT_VAR) {
            None => Ok(Self::default()),
            Some(raw) => Self::parse(&raw).ok_or(raw),
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" | "text" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Initialize tracing/logging with the format chosen by the environment.
///
/// An unrecognized format falls back to JSON and is reported as a warning
/// through the installed subscriber.
pub fn init_from_env() {
    init_with(|key| std::env::var(key).ok());
}

fn init_with(lookup: impl Fn(&str) -> Option<String>) {
    let requested = LogFormat::from_lookup(lookup);
    init(requested.clone().unwrap_or_default());
    if let Err(raw) = requested {
        ::tracing::warn!(var = LOG_FORMAT_VAR, value = %raw, "unrecognized log format; using json");
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    if installed.is_ok() {
        ::tracing::debug!(?format, "tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    fn lookup(value: Option<&str>) -> impl Fn(&str) -> Option<String> {
        let value = value.map(str::to_string);
        move |key| {
            assert_eq!(key, LOG_FORMAT_VAR);
            value.clone()
        }
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn defaults_to_json() {
        assert_eq!(LogFormat::from_lookup(lookup(None)), Ok(LogFormat::Json));
    }

    #[test]
    fn recognizes_known_formats() {
        assert_eq!(LogFormat::from_lookup(lookup(Some("pretty"))), Ok(LogFormat::Pretty));
        assert_eq!(LogFormat::from_lookup(lookup(Some(" JSON "))), Ok(LogFormat::Json));
        assert_eq!(LogFormat::from_lookup(lookup(Some("text"))), Ok(LogFormat::Pretty));
    }

    #[test]
    fn unknown_format_is_returned_raw() {
        assert_eq!(
            LogFormat::from_lookup(lookup(Some("xml"))),
            Err("xml".to_string())
        );
    }

    #[test]
    fn unknown_format_is_logged_as_warning() {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();

        ::tracing::subscriber::with_default(subscriber, || init_with(lookup(Some("xml"))));

        let out = captured.text();
        assert!(out.contains("WARN"), "{out}");
        assert!(out.contains("unrecognized log format"), "{out}");
        assert!(out.contains("xml"), "{out}");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(LogFormat::Pretty);
        init(LogFormat::Json);
    }
}
