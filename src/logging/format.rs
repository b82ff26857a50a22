//! Diagnostics go to stderr through tracing; results go to stdout as ndjson.

use crate::config::LogConfig;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const FALLBACK_LEVEL: &str = "info";

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install the global subscriber for `config`. RUST_LOG wins over the
    /// configured level. Returns false if a subscriber was already installed.
    pub fn init(config: &LogConfig) -> bool {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| Self::filter(&config.level));
        let json = config.json.then(|| {
            fmt::layer()
                .json()
                .with_current_span(false)
                .with_writer(std::io::stderr)
        });
        let plain = (!config.json).then(|| fmt::layer().with_target(false).with_writer(std::io::stderr));
        tracing_subscriber::registry()
            .with(filter)
            .with(json)
            .with(plain)
            .try_init()
            .is_ok()
    }

    /// Filter for a configured directive; an unparsable one degrades to `info`.
    pub fn filter(level: &str) -> EnvFilter {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
    }

    /// One result per line on `w`, outside the tracing pipeline.
    pub fn emit_json(value: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
        serde_json::to_writer(&mut *w, value)?;
        w.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_json_writes_one_line_per_value() {
        let mut out = Vec::new();
        StructuredLogger::emit_json(&serde_json::json!({"integrity": 0.9}), &mut out).unwrap();
        StructuredLogger::emit_json(&serde_json::json!({"integrity": 0.1}), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![r#"{"integrity":0.9}"#, r#"{"integrity":0.1}"#]);
    }

    #[test]
    fn bad_level_degrades_to_info() {
        assert_eq!(StructuredLogger::filter("alua_sentinel=verbose").to_string(), "info");
        assert_eq!(StructuredLogger::filter("debug").to_string(), "debug");
    }
}
