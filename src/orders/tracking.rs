//! Tracking number format.

use std::fmt;

use crate::error::{Error, Result};

/// Prefix shared by every tracking number.
pub const TRACKING_PREFIX: &str = "10010";

/// Number of digits following the prefix.
pub const SUFFIX_DIGITS: usize = 6;

/// Number of distinct suffixes, and so the most stops one batch can hold.
pub const SUFFIX_SPACE: u32 = 1_000_000;

/// A validated tracking number: `10010` followed by exactly six digits.
///
/// # Examples
///
/// ```
/// use u_dispatch::orders::TrackingNumber;
///
/// let t = TrackingNumber::parse(" 10010123456 ").unwrap();
/// assert_eq!(t.as_str(), "10010123456");
/// assert!(TrackingNumber::parse("10011123456").is_err());
/// assert!(TrackingNumber::parse("1001012345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Validates user input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let valid = trimmed.strip_prefix(TRACKING_PREFIX).is_some_and(|rest| {
            rest.len() == SUFFIX_DIGITS && rest.bytes().all(|b| b.is_ascii_digit())
        });
        if valid {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(Error::InvalidTrackingNumber(trimmed.to_owned()))
        }
    }

    /// Builds a tracking number from a numeric suffix, zero-padded to six
    /// digits. Returns `None` if the suffix does not fit.
    pub fn from_suffix(suffix: u32) -> Option<Self> {
        (suffix < SUFFIX_SPACE).then(|| Self(format!("{TRACKING_PREFIX}{suffix:06}")))
    }

    /// The tracking number as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the tracking number, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
