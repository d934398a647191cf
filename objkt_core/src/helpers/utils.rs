use chrono::Local;

/// Local wall-clock time as ISO-8601 with microseconds, e.g.
/// `2026-10-19T12:00:00.123456`.
pub fn now_iso() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
