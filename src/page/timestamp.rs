//! The instant a page render is stamped with.

use super::{DateLocale, RenderError};
use crate::utils::date::DateTimeUtc;

/// Render-time instant, parsed once per render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTimestamp(DateTimeUtc);

impl PageTimestamp {
    /// Parse an ISO-8601 instant. Anything else fails the render.
    pub fn parse(iso: &str) -> Result<Self, RenderError> {
        DateTimeUtc::parse(iso)
            .map(Self)
            .ok_or_else(|| RenderError::Timestamp(iso.to_string()))
    }

    /// Calendar year, for the footer copyright.
    pub fn year(self) -> u16 {
        self.0.year
    }

    /// "Last updated" label in the given locale.
    pub fn date_label(self, locale: DateLocale) -> String {
        locale.format(self.0)
    }

    /// `YYYY-MM-DD`, for the sitemap `lastmod`.
    pub fn iso_date(self) -> String {
        self.0.to_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let ts = PageTimestamp::parse("2024-01-15T00:00:00.000Z").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.date_label(DateLocale::EnUs), "1/15/2024");
        assert_eq!(ts.iso_date(), "2024-01-15");
    }

    #[test]
    fn test_offset_shifts_calendar_day() {
        // 23:30 at -05:00 is already the next day in UTC
        let ts = PageTimestamp::parse("2023-12-31T23:30:00-05:00").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.iso_date(), "2024-01-01");
    }

    #[test]
    fn test_parse_malformed() {
        for bad in ["", "yesterday", "2024-13-01T00:00:00Z", "2024-01-15T25:00:00Z"] {
            let err = PageTimestamp::parse(bad).unwrap_err();
            assert!(matches!(err, RenderError::Timestamp(ref s) if s == bad));
        }
    }
}
