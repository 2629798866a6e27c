use chrono::DateTime;

/// Marker the date formatter yields for a missing timestamp.
pub const PRESENT_LABEL: &str = "Present";
pub const NEVER_SYNCED_LABEL: &str = "Never";
pub const NO_DATA_LABEL: &str = "No Data";

pub const DATE_FORMAT: &str = "%b %e, %Y %H:%M";

/// Formats a millisecond timestamp for display.
/// `None`, zero and negative values are the "Present" marker and yield `None`.
pub fn format_timestamp(ts: Option<i64>) -> Option<String> {
    let millis = ts.filter(|value| *value > 0)?;
    DateTime::from_timestamp_millis(millis).map(|when| when.format(DATE_FORMAT).to_string())
}

pub fn format_or(ts: Option<i64>, missing: &str) -> String {
    format_timestamp(ts).unwrap_or_else(|| missing.to_string())
}

pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Channel identifiers the backend reports as enabled.
/// The backend terminates the list with an empty entry on some connectors,
/// so everything from the first empty identifier on is ignored.
pub fn enabled_channels(channels: &[String]) -> impl Iterator<Item = &str> {
    channels
        .iter()
        .map(String::as_str)
        .take_while(|channel| !channel.is_empty())
}

pub fn join_channels<I, S>(channels: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    channels
        .into_iter()
        .map(|channel| channel.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",")
}
