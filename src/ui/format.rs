use chrono::{DateTime, Local, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M";

/// Renders a backend timestamp as `dd.mm.yyyy, HH:MM` in local time.
///
/// Timestamps without an offset are taken as local wall-clock time.
/// Anything unparseable is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(raw, pattern).ok())
        .map(|naive| naive.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}
