//! Centralized configuration (environment variables + defaults).
//!
//! Binaries call `dotenv::dotenv().ok()` first, so a `.env` file works too.

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_PERF_ITERATIONS: u64 = 10_000;

/// Address the API server listens on.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

/// `tracing-subscriber` filter directive (`RUST_LOG` syntax).
pub fn log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

/// Whether the API answers cross-origin requests from anywhere (default: yes).
///
/// The admin and show front-ends call the API from their own origins.
pub fn cors_allow_any() -> anyhow::Result<bool> {
    match std::env::var("CORS_ALLOW_ANY") {
        Ok(v) => parse_flag(&v).with_context(|| format!("CORS_ALLOW_ANY must be true/false, got '{}'", v)),
        Err(_) => Ok(true),
    }
}

/// Number of parse/format cycles run by `performance_test`.
pub fn perf_iterations() -> anyhow::Result<u64> {
    match std::env::var("PERF_ITERATIONS") {
        Ok(v) => {
            let n = v
                .parse::<u64>()
                .with_context(|| format!("PERF_ITERATIONS must be a valid u64, got '{}'", v))?;
            Ok(n.max(1))
        }
        Err(_) => Ok(DEFAULT_PERF_ITERATIONS),
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(anyhow::anyhow!("not a boolean: {}", other)),
    }
}
