//! Timestamp display helpers.

use crate::domain::primitives::TimeSec;
use chrono::{DateTime, SecondsFormat, Utc};

fn to_datetime(ts: TimeSec) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts.as_i64(), 0).unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH)
}

/// Absolute display form, e.g. `14 Nov 2023, 22:13`.
pub fn format_timestamp_absolute(ts: TimeSec) -> String {
    to_datetime(ts).format("%d %b %Y, %H:%M").to_string()
}

/// Relative-or-absolute display form.
///
/// When `relative` is set, timestamps within the last 30 days render as an
/// age ("5m ago"); older or future timestamps fall back to the absolute form.
pub fn format_timestamp(ts: TimeSec, relative: bool) -> String {
    if !relative {
        return format_timestamp_absolute(ts);
    }

    let age_secs = (Utc::now() - to_datetime(ts)).num_seconds();
    match age_secs {
        s if s < 0 => format_timestamp_absolute(ts),
        s if s < 60 => format!("{}s ago", s),
        s if s < 3600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3600),
        s if s < 30 * 86_400 => format!("{}d ago", s / 86_400),
        _ => format_timestamp_absolute(ts),
    }
}

/// Canonical ISO-8601 form, e.g. `2023-11-14T22:13:20Z`.
pub fn format_timestamp_iso(ts: TimeSec) -> String {
    to_datetime(ts).to_rfc3339_opts(SecondsFormat::Secs, true)
}
