use log::warn;

/// Whether inputs are assumed to start with a header row.
pub const DEFAULT_HAS_HEADER: bool = true;

/// Environment variable overriding [`DEFAULT_HAS_HEADER`].
pub const HAS_HEADER_ENV: &str = "LINE_UTILS_HAS_HEADER";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Get the header default, honouring [`HAS_HEADER_ENV`].
pub fn has_header_from_env() -> bool {
    match std::env::var(HAS_HEADER_ENV) {
        Ok(value) => parse_bool(&value).unwrap_or_else(|| {
            warn!(
                "Ignoring invalid {}={:?}, using default {}",
                HAS_HEADER_ENV, value, DEFAULT_HAS_HEADER
            );
            DEFAULT_HAS_HEADER
        }),
        Err(_) => DEFAULT_HAS_HEADER,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
