//! Logging utilities
//!
//! Subscriber setup for binaries plus small formatting helpers used in log
//! lines across the workspace.

use crate::{Result, ToolingError};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// The filter comes from `RUST_LOG` when it is set and non-empty, otherwise
/// from `default_filter` (for example `"info"`).
pub fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(default_filter).map_err(|e| ToolingError::Logging(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| ToolingError::Logging(e.to_string()))
}

/// Format duration in human-readable form
///
/// ```rust
/// use tooling::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
/// assert_eq!(format_duration(Duration::ZERO), "0s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();

    if millis == 0 {
        "0s".to_string()
    } else if millis < 1000 {
        format!("{}ms", millis)
    } else if millis < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let seconds = duration.as_secs();
        format!("{}m{}s", seconds / 60, seconds % 60)
    }
}

fn redaction_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"(?i)(authorization|auth)\s*:\s*bearer\s+\S+", "$1: Bearer [REDACTED]"),
            (r"(?i)(api[\s_-]?key|apikey)(\s*[:=]\s*)[^\s&]+", "$1$2[REDACTED]"),
            (r"(?i)(token|secret|password)(\s*[:=]\s*)[^\s&]+", "$1$2[REDACTED]"),
            (r"(?i)([?&]key=)[^\s&#]+", "${1}[REDACTED]"),
            (r"\bsk-[A-Za-z0-9_-]{8,}", "[REDACTED]"),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
        .collect()
    })
}

/// Redact credentials from text before it is logged
///
/// Vendor error bodies sometimes echo the submitted key back, and some
/// vendor URLs carry the key as a query parameter.
///
/// ```rust
/// use tooling::logging::sanitize_for_logging;
///
/// let line = "Authorization: Bearer abc123";
/// assert!(!sanitize_for_logging(line).contains("abc123"));
/// ```
pub fn sanitize_for_logging(input: &str) -> String {
    redaction_patterns()
        .iter()
        .fold(input.to_string(), |text, (re, replacement)| {
            re.replace_all(&text, *replacement).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_secs(1)), "1.00s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m5s");
    }

    #[test]
    fn test_sanitize_bearer_token() {
        let sanitized = sanitize_for_logging("Authorization: Bearer abc123xyz");
        assert!(sanitized.contains("[REDACTED]"));
        assert!(!sanitized.contains("abc123xyz"));
    }

    #[test]
    fn test_sanitize_api_key_assignment() {
        let sanitized = sanitize_for_logging("request failed, api_key=tps-991122");
        assert!(!sanitized.contains("tps-991122"));
    }

    #[test]
    fn test_sanitize_url_query_credentials() {
        let sanitized = sanitize_for_logging(
            "https://api.example.com/v1/person?name=John&api_key=tps-991122&access_token=at-42&key=g-77",
        );
        assert_eq!(
            sanitized,
            "https://api.example.com/v1/person?name=John&api_key=[REDACTED]&access_token=[REDACTED]&key=[REDACTED]"
        );
    }

    #[test]
    fn test_sanitize_openai_style_key() {
        let sanitized =
            sanitize_for_logging("Incorrect API key provided: sk-proj-abcdefghijkl");
        assert!(!sanitized.contains("sk-proj-abcdefghijkl"));
    }

    #[test]
    fn test_sanitize_preserves_safe_text() {
        let input = "Task skip_trace failed: 503 Service Unavailable";
        assert_eq!(sanitize_for_logging(input), input);
    }
}
