//! Locale-aware date labels.
//!
//! Numeric short-date patterns only. Month names never appear in the
//! label, so no translation tables are needed.

use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used for the "last updated" label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateLocale {
    /// `1/15/2024`
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// `15/01/2024`
    #[serde(rename = "en-GB")]
    EnGb,
    /// `15.1.2024`
    #[serde(rename = "de-DE")]
    DeDe,
    /// `15/01/2024`
    #[serde(rename = "fr-FR")]
    FrFr,
    /// `2024/1/15`
    #[serde(rename = "ja-JP")]
    JaJp,
    /// `2024-01-15`
    #[serde(rename = "iso")]
    Iso,
}

impl DateLocale {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
            Self::JaJp => "ja-JP",
            Self::Iso => "iso",
        }
    }

    /// Format the calendar date of `dt` in this locale.
    pub fn format(self, dt: DateTimeUtc) -> String {
        let DateTimeUtc {
            year, month, day, ..
        } = dt;
        match self {
            Self::EnUs => format!("{month}/{day}/{year}"),
            Self::EnGb | Self::FrFr => format!("{day:02}/{month:02}/{year}"),
            Self::DeDe => format!("{day}.{month}.{year}"),
            Self::JaJp => format!("{year}/{month}/{day}"),
            Self::Iso => dt.to_date(),
        }
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAN_15: DateTimeUtc = DateTimeUtc::from_ymd(2024, 1, 15);

    #[test]
    fn test_format_all_locales() {
        assert_eq!(DateLocale::EnUs.format(JAN_15), "1/15/2024");
        assert_eq!(DateLocale::EnGb.format(JAN_15), "15/01/2024");
        assert_eq!(DateLocale::DeDe.format(JAN_15), "15.1.2024");
        assert_eq!(DateLocale::FrFr.format(JAN_15), "15/01/2024");
        assert_eq!(DateLocale::JaJp.format(JAN_15), "2024/1/15");
        assert_eq!(DateLocale::Iso.format(JAN_15), "2024-01-15");
    }

    #[test]
    fn test_format_two_digit_parts() {
        let dt = DateTimeUtc::from_ymd(2025, 11, 3);
        assert_eq!(DateLocale::EnUs.format(dt), "11/3/2025");
        assert_eq!(DateLocale::EnGb.format(dt), "03/11/2025");
    }

    #[test]
    fn test_tag_matches_serde_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: DateLocale,
        }
        for locale in [
            DateLocale::EnUs,
            DateLocale::EnGb,
            DateLocale::DeDe,
            DateLocale::FrFr,
            DateLocale::JaJp,
            DateLocale::Iso,
        ] {
            let parsed: Wrapper = toml::from_str(&format!("locale = \"{locale}\"")).unwrap();
            assert_eq!(parsed.locale, locale);
        }
    }

    #[test]
    fn test_unknown_locale_rejected() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Wrapper {
            locale: DateLocale,
        }
        assert!(toml::from_str::<Wrapper>("locale = \"xx-YY\"").is_err());
    }
}
