use chrono::{NaiveDateTime, Utc};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Renders a stored timestamp relative to now, e.g. `5m ago`.
///
/// See [`format_time_ago_from`] for the rules.
pub fn format_time_ago(value: Option<&str>) -> String {
    format_time_ago_from(value, Utc::now().naive_utc())
}

/// Renders a stored timestamp relative to `now`.
///
/// Timestamps are the UTC text the bot writes (`YYYY-MM-DD HH:MM:SS`, optionally with
/// fractional seconds or a `T` separator).
///
/// - missing or blank → `unknown`
/// - unparsable, under a minute old, or in the future → `just now`
/// - otherwise the largest whole unit of days, hours or minutes
pub fn format_time_ago_from(value: Option<&str>, now: NaiveDateTime) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "unknown".to_string();
    };

    let Some(timestamp) = parse_timestamp(value) else {
        return "just now".to_string();
    };

    let diff = now.signed_duration_since(timestamp);

    if diff.num_days() > 0 {
        return format!("{}d ago", diff.num_days());
    }
    if diff.num_hours() > 0 {
        return format!("{}h ago", diff.num_hours());
    }
    if diff.num_minutes() > 0 {
        return format!("{}m ago", diff.num_minutes());
    }
    "just now".to_string()
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    // Fractional seconds are dropped rather than parsed.
    let whole_seconds = value.split('.').next().unwrap_or(value);

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(whole_seconds, format).ok())
}
