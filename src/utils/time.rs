use chrono::{DateTime, NaiveDateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// The scheduling endpoints expect a naive local date-time, so the zone
/// suffix is stripped before a picker value goes on the wire.
pub fn to_wire_naive(dt: DateTime<Utc>) -> NaiveDateTime {
    dt.naive_utc()
}

/// Parses an API date-time, accepting both the backend's unsuffixed form and
/// full RFC 3339.
pub fn parse_api_datetime(s: &str) -> anyhow::Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc).naive_utc());
    }
    Ok(NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")?)
}
