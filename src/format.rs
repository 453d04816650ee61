//! Display formatting helpers

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Escape `&`, `<` and `>`. Not a sanitizer; quotes pass through.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// `MM/DD/YYYY h:mm:ss AM` in the browser's local time zone
pub fn format_date_us(raw: &str) -> String {
    format_date_us_in(raw, &Local)
}

/// Like [`format_date_us`] with an explicit zone.
///
/// Offset-less timestamps are read as wall-clock time in `tz`.
/// Unparsable input is returned unchanged.
pub fn format_date_us_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let trimmed = raw.trim();
    let parsed = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(tz))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        });
    match parsed {
        Some(dt) => dt.format("%m/%d/%Y %-I:%M:%S %p").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_escape_html_replaces_only_three_chars() {
        let input = r#"<b>Tom & "Jerry"</b> 'x' é"#;
        let out = escape_html(input);
        assert_eq!(out, r#"&lt;b&gt;Tom &amp; "Jerry"&lt;/b&gt; 'x' é"#);
        assert!(!out.contains('<') && !out.contains('>'));
    }

    #[test]
    fn test_escape_html_no_bare_ampersand() {
        let out = escape_html("a&&b&lt;");
        assert_eq!(out, "a&amp;&amp;b&amp;lt;");
        // every '&' left in the output starts one of the three entities
        for (i, _) in out.match_indices('&') {
            let rest = &out[i..];
            assert!(rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;"));
        }
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_format_date_backend_iso() {
        assert_eq!(
            format_date_us_in("2024-03-05T14:07:09.123456Z", &Utc),
            "03/05/2024 2:07:09 PM"
        );
        assert_eq!(format_date_us_in("2024-12-31T00:00:00Z", &Utc), "12/31/2024 12:00:00 AM");
    }

    #[test]
    fn test_format_date_converts_zone() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_date_us_in("2024-01-01T03:30:00Z", &tz), "12/31/2023 10:30:00 PM");
    }

    #[test]
    fn test_format_date_naive_is_local_wall_clock() {
        assert_eq!(format_date_us_in("2024-07-04T09:00:00", &Utc), "07/04/2024 9:00:00 AM");
    }

    #[test]
    fn test_format_date_unparsable_passthrough() {
        assert_eq!(format_date_us_in("yesterday", &Utc), "yesterday");
        assert_eq!(format_date_us_in("", &Utc), "");
    }
}
