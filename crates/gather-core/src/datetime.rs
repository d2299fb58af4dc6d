use chrono::NaiveDateTime;

pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Strips the fractional-seconds or timezone suffix the service appends to
/// datetimes, leaving the plain local portion.
///
/// `2025-01-02T10:00:00.1234567Z` and `2025-01-02T10:00:00+01:00` both
/// become `2025-01-02T10:00:00`. A trailing `Z` with no fraction and
/// negative offsets are also dropped. The offset scan starts after the
/// date part so the leading `YYYY-MM-DD` hyphens are never mistaken for
/// an offset.
pub fn normalize_wire_date(raw: &str) -> &str {
    let trimmed = raw.trim();
    let mut end = trimmed.len();

    if let Some(idx) = trimmed.find('.') {
        end = end.min(idx);
    }
    if let Some(idx) = trimmed.find('Z') {
        end = end.min(idx);
    }
    // Offsets can only appear after the time component.
    if let Some(time_start) = trimmed.find('T') {
        let time = &trimmed[time_start..];
        if let Some(idx) = time.find('+') {
            end = end.min(time_start + idx);
        }
        if let Some(idx) = time.find('-') {
            end = end.min(time_start + idx);
        }
    }

    &trimmed[..end]
}

/// Parses a wire datetime after normalization.
pub fn parse_wire_date(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(normalize_wire_date(raw), WIRE_DATE_FORMAT)
}

#[must_use]
pub fn format_wire_date(date: NaiveDateTime) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

pub mod wire_date_serde {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_wire_date, parse_wire_date};

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_wire_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_wire_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_truncates_fractional_seconds() {
        assert_eq!(
            normalize_wire_date("2025-01-02T10:00:00.1234567"),
            "2025-01-02T10:00:00"
        );
    }

    #[test]
    fn normalization_truncates_zulu_and_offset_suffixes() {
        assert_eq!(
            normalize_wire_date("2025-01-02T10:00:00Z"),
            "2025-01-02T10:00:00"
        );
        assert_eq!(
            normalize_wire_date("2025-01-02T10:00:00+01:00"),
            "2025-01-02T10:00:00"
        );
        assert_eq!(
            normalize_wire_date("2025-01-02T10:00:00-01:00"),
            "2025-01-02T10:00:00"
        );
        assert_eq!(
            normalize_wire_date("2025-01-02T10:00:00.500Z"),
            "2025-01-02T10:00:00"
        );
    }

    #[test]
    fn normalization_leaves_plain_dates_alone() {
        assert_eq!(
            normalize_wire_date("2025-01-02T10:00:00"),
            "2025-01-02T10:00:00"
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_wire_date("not a date").is_err());
        assert!(parse_wire_date("").is_err());
    }

    #[test]
    fn parse_and_format_round_trip() {
        let parsed = parse_wire_date("2025-03-01T18:30:00.99Z").expect("parse");
        assert_eq!(format_wire_date(parsed), "2025-03-01T18:30:00");
    }
}
