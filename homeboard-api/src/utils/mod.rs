//! Utility modules.

/// Date/time helpers for Google RFC 3339 and all-day date strings.
pub mod datetime;

/// Log sanitization utilities to prevent token and body exposure.
pub mod log_sanitizer;
