use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};
use shortlink_core::Token;

pub const DEFAULT_BASE_URL: &str = "http://short.ly/";

const SECONDS_PER_HOUR: i64 = 3600;

/// Converts between bare tokens and user-facing short links.
#[derive(Debug, Clone)]
pub struct LinkFormatter {
    base_url: String,
}

impl LinkFormatter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generates the full short link for `token`.
    pub fn to_link(&self, token: &Token) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), token)
    }

    /// Extracts the bare token from user input, which may be either a full
    /// short link or the token itself. The base is only stripped at a path
    /// boundary.
    pub fn token_from_input<'a>(&self, input: &'a str) -> &'a str {
        let input = input.trim();
        input
            .strip_prefix(self.base_url.trim_end_matches('/'))
            .filter(|rest| rest.starts_with('/'))
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or(input)
    }
}

impl Default for LinkFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Converts a TTL given in whole hours. `None` on overflow.
pub fn hours_to_ttl(hours: i64) -> Option<SignedDuration> {
    hours
        .checked_mul(SECONDS_PER_HOUR)
        .map(SignedDuration::from_secs)
}

/// Formats `ts` as `MM/DD/YYYY HH:MM:SS` in the given time zone.
pub fn format_timestamp(ts: Timestamp, tz: &TimeZone) -> String {
    ts.to_zoned(tz.clone())
        .strftime("%m/%d/%Y %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(s: &str) -> Token {
        Token::new(s).unwrap()
    }

    #[test]
    fn to_link_joins_with_single_slash() {
        let links = LinkFormatter::new("http://short.ly/");
        assert_eq!(links.to_link(&token("abc123")), "http://short.ly/abc123");

        let links = LinkFormatter::new("https://s.example");
        assert_eq!(links.to_link(&token("abc123")), "https://s.example/abc123");
    }

    #[test]
    fn token_from_full_link() {
        let links = LinkFormatter::default();
        assert_eq!(links.token_from_input("http://short.ly/abc123"), "abc123");
        assert_eq!(links.token_from_input("  http://short.ly/abc123\n"), "abc123");
    }

    #[test]
    fn bare_token_passes_through() {
        let links = LinkFormatter::default();
        assert_eq!(links.token_from_input("abc123"), "abc123");
        // a different base is not stripped
        assert_eq!(
            links.token_from_input("http://other.ly/abc123"),
            "http://other.ly/abc123"
        );
    }

    #[test]
    fn base_is_stripped_only_at_path_boundary() {
        let links = LinkFormatter::new("http://short.ly");
        assert_eq!(
            links.token_from_input("http://short.lyabc123"),
            "http://short.lyabc123"
        );
        assert_eq!(links.token_from_input("http://short.ly/abc123"), "abc123");
    }

    #[test]
    fn link_round_trips_through_input() {
        let links = LinkFormatter::new("https://s.example/");
        let link = links.to_link(&token("Zz9Yy8"));
        assert_eq!(links.token_from_input(&link), "Zz9Yy8");
    }

    #[test]
    fn hours_convert_to_seconds() {
        assert_eq!(hours_to_ttl(1), Some(SignedDuration::from_hours(1)));
        assert_eq!(hours_to_ttl(0), Some(SignedDuration::ZERO));
        assert_eq!(hours_to_ttl(-2), Some(SignedDuration::from_secs(-7200)));
        assert_eq!(hours_to_ttl(i64::MAX), None);
    }

    #[test]
    fn timestamps_use_month_day_year() {
        let ts: Timestamp = "2024-03-05T07:08:09Z".parse().unwrap();
        assert_eq!(format_timestamp(ts, &TimeZone::UTC), "03/05/2024 07:08:09");
    }
}
