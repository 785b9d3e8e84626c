//! # Header Parsing
//!
//! The header is the text before the body delimiter: one `field: value` pair
//! per line. Lines without a `:` are ignored, and parsing never fails.
//!
//! A few well-known fields are coerced on the way in:
//!
//! - `crtdate`, `date`: parsed as a timestamp ([`HeaderValue::Timestamp`])
//! - `isportal`: `true` only for the literal string `"true"`
//!
//! Everything else, including unknown fields, is kept as trimmed text.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

pub const FIELD_SEPARATOR: char = ':';

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const PARENT: &str = "parent";
pub const CREATED: &str = "crtdate";
pub const DATE: &str = "date";
pub const IS_PORTAL: &str = "isportal";

/// Formats tried after RFC 3339, in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format written by the entry template.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single header value after type coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Text(String),
    Bool(bool),
    Timestamp(NaiveDateTime),
}

impl HeaderValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HeaderValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            HeaderValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

/// Field name to value mapping for one document.
///
/// No field is required; callers must handle absent keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Header(BTreeMap<String, HeaderValue>);

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&HeaderValue> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: HeaderValue) {
        self.0.insert(field.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn title(&self) -> Option<&str> {
        self.get(TITLE).and_then(HeaderValue::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.get(DESCRIPTION).and_then(HeaderValue::as_str)
    }

    pub fn parent(&self) -> Option<&str> {
        self.get(PARENT).and_then(HeaderValue::as_str)
    }

    /// Creation time from `crtdate`, falling back to `date`.
    pub fn created(&self) -> Option<NaiveDateTime> {
        self.get(CREATED)
            .and_then(HeaderValue::as_timestamp)
            .or_else(|| self.get(DATE).and_then(HeaderValue::as_timestamp))
    }

    /// Missing or non-boolean `isportal` counts as `false`.
    pub fn is_portal(&self) -> bool {
        self.get(IS_PORTAL)
            .and_then(HeaderValue::as_bool)
            .unwrap_or(false)
    }
}

/// Parses the header segment of a document.
pub fn parse_header(text: &str) -> Header {
    let mut header = Header::new();

    for line in text.lines() {
        let Some((field, raw)) = line.split_once(FIELD_SEPARATOR) else {
            continue;
        };
        if field.is_empty() {
            continue;
        }
        header.insert(field, coerce(field, raw.trim()));
    }

    header
}

fn coerce(field: &str, raw: &str) -> HeaderValue {
    match field {
        CREATED | DATE => parse_timestamp(raw)
            .map(HeaderValue::Timestamp)
            .unwrap_or_else(|| HeaderValue::Text(raw.to_string())),
        IS_PORTAL => HeaderValue::Bool(raw == "true"),
        _ => HeaderValue::Text(raw.to_string()),
    }
}

/// Parses a header timestamp. Offsets are normalized to UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn parses_plain_fields() {
        let header = parse_header("title: T\ndescription:   a short one  \n");
        assert_eq!(header.len(), 2);
        assert_eq!(header.title(), Some("T"));
        assert_eq!(header.description(), Some("a short one"));
    }

    #[test]
    fn skips_lines_without_separator() {
        let header = parse_header("just words\ntitle: kept\n\n");
        assert_eq!(header.len(), 1);
        assert_eq!(header.title(), Some("kept"));
    }

    #[test]
    fn skips_lines_with_empty_field_name() {
        let header = parse_header(": orphan value\n");
        assert!(header.is_empty());
    }

    #[test]
    fn splits_on_first_separator_only() {
        let header = parse_header("link: https://example.com/a:b\n");
        assert_eq!(
            header.get("link"),
            Some(&HeaderValue::Text("https://example.com/a:b".to_string()))
        );
    }

    #[test]
    fn unknown_fields_pass_through() {
        let header = parse_header("mood:  sunny\n");
        assert_eq!(
            header.get("mood"),
            Some(&HeaderValue::Text("sunny".to_string()))
        );
    }

    #[test]
    fn handles_crlf_line_endings() {
        let header = parse_header("title: T\r\nparent: home\r\n");
        assert_eq!(header.title(), Some("T"));
        assert_eq!(header.parent(), Some("home"));
    }

    #[rstest]
    #[case("true", true)]
    #[case("false", false)]
    #[case("True", false)]
    #[case("yes", false)]
    #[case("", false)]
    fn isportal_is_true_only_for_literal_true(#[case] raw: &str, #[case] expected: bool) {
        let header = parse_header(&format!("isportal: {raw}\n"));
        assert_eq!(header.get(IS_PORTAL), Some(&HeaderValue::Bool(expected)));
        assert_eq!(header.is_portal(), expected);
    }

    #[test]
    fn missing_isportal_is_false() {
        assert!(!parse_header("title: T").is_portal());
    }

    #[rstest]
    #[case("2022-03-01 10:20:30", at(2022, 3, 1, 10, 20, 30))]
    #[case("2022-03-01T10:20:30", at(2022, 3, 1, 10, 20, 30))]
    #[case("2022-03-01 10:20", at(2022, 3, 1, 10, 20, 0))]
    #[case("2022-03-01", at(2022, 3, 1, 0, 0, 0))]
    #[case("2022-03-01T10:20:30Z", at(2022, 3, 1, 10, 20, 30))]
    #[case("2022-03-01T12:20:30+02:00", at(2022, 3, 1, 10, 20, 30))]
    fn parses_timestamps(#[case] raw: &str, #[case] expected: NaiveDateTime) {
        assert_eq!(parse_timestamp(raw), Some(expected));
    }

    #[test]
    fn crtdate_and_date_are_coerced() {
        let header = parse_header("crtdate: 2022-03-01 10:20:30\ndate: 2021-01-02\n");
        assert_eq!(
            header.get(CREATED),
            Some(&HeaderValue::Timestamp(at(2022, 3, 1, 10, 20, 30)))
        );
        assert_eq!(
            header.get(DATE),
            Some(&HeaderValue::Timestamp(at(2021, 1, 2, 0, 0, 0)))
        );
        assert_eq!(header.created(), Some(at(2022, 3, 1, 10, 20, 30)));
    }

    #[test]
    fn created_falls_back_to_date() {
        let header = parse_header("date: 2021-01-02\n");
        assert_eq!(header.created(), Some(at(2021, 1, 2, 0, 0, 0)));
    }

    #[test]
    fn unparseable_timestamp_stays_text() {
        let header = parse_header("crtdate: last tuesday\n");
        assert_eq!(
            header.get(CREATED),
            Some(&HeaderValue::Text("last tuesday".to_string()))
        );
        assert_eq!(header.created(), None);
    }

    #[test]
    fn later_duplicate_field_wins() {
        let header = parse_header("title: one\ntitle: two\n");
        assert_eq!(header.title(), Some("two"));
    }
}
