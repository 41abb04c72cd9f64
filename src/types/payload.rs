//! Payload formatting for the supported data modes.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::QrError;

/// How the raw input text should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadMode {
    /// Encode the text as-is.
    #[default]
    Auto,
    /// Web address; `https://` is added when no scheme is present.
    Url,
    /// Phone number (`tel:`).
    Tel,
    /// Email address (`mailto:`).
    Email,
    /// SMS recipient (`sms:`).
    Sms,
}

impl PayloadMode {
    /// Scheme prefix unconditionally added by this mode, if any.
    fn scheme(self) -> Option<&'static str> {
        match self {
            PayloadMode::Auto | PayloadMode::Url => None,
            PayloadMode::Tel => Some("tel:"),
            PayloadMode::Email => Some("mailto:"),
            PayloadMode::Sms => Some("sms:"),
        }
    }
}

impl fmt::Display for PayloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadMode::Auto => write!(f, "auto"),
            PayloadMode::Url => write!(f, "url"),
            PayloadMode::Tel => write!(f, "tel"),
            PayloadMode::Email => write!(f, "email"),
            PayloadMode::Sms => write!(f, "sms"),
        }
    }
}

impl FromStr for PayloadMode {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(PayloadMode::Auto),
            "url" => Ok(PayloadMode::Url),
            "tel" => Ok(PayloadMode::Tel),
            "email" => Ok(PayloadMode::Email),
            "sms" => Ok(PayloadMode::Sms),
            other => Err(QrError::Parse {
                message: format!("Unknown mode: {}", other),
                help: Some("Expected one of: auto, url, tel, email, sms".to_string()),
            }),
        }
    }
}

/// Build the string that gets encoded for `raw` under `mode`.
///
/// Surrounding whitespace is always trimmed first.
pub fn format_payload(raw: &str, mode: PayloadMode) -> String {
    let raw = raw.trim();

    if mode == PayloadMode::Url {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return raw.to_string();
        }
        return format!("https://{}", raw);
    }

    match mode.scheme() {
        Some(scheme) => format!("{}{}", scheme, raw),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_passthrough_and_trim() {
        assert_eq!(format_payload(" https://a.com ", PayloadMode::Url), "https://a.com");
        assert_eq!(format_payload("http://a.com", PayloadMode::Url), "http://a.com");
    }

    #[test]
    fn test_url_adds_scheme() {
        assert_eq!(format_payload("a.com", PayloadMode::Url), "https://a.com");
        assert_eq!(format_payload("  a.com/path\n", PayloadMode::Url), "https://a.com/path");
    }

    #[test]
    fn test_scheme_modes() {
        assert_eq!(format_payload("+1555", PayloadMode::Tel), "tel:+1555");
        assert_eq!(format_payload("a@b.com", PayloadMode::Email), "mailto:a@b.com");
        assert_eq!(format_payload(" 0412 ", PayloadMode::Sms), "sms:0412");
    }

    #[test]
    fn test_auto_is_trimmed_passthrough() {
        assert_eq!(format_payload("x", PayloadMode::Auto), "x");
        assert_eq!(format_payload("  hello world  ", PayloadMode::Auto), "hello world");
        assert_eq!(format_payload("", PayloadMode::Auto), "");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("URL".parse::<PayloadMode>().unwrap(), PayloadMode::Url);
        assert_eq!("sms".parse::<PayloadMode>().unwrap(), PayloadMode::Sms);
        assert!("fax".parse::<PayloadMode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in PayloadMode::value_variants() {
            assert_eq!(mode.to_string().parse::<PayloadMode>().unwrap(), *mode);
        }
    }
}
