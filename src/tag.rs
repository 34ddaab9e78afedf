//! OpenType tags used when selecting tables and language systems.

use crate::error::ConfigurationError;
use std::fmt;

/// Generate a 4-byte font table tag from byte string
///
/// Example:
///
/// ```
/// # #[macro_use] extern crate glyphstream;
/// # fn main() {
/// assert_eq!(tag!(b"GSUB"), 0x47535542);
/// # }
/// ```
#[macro_export]
macro_rules! tag {
    ($w:expr) => {
        $crate::tag::from_bytes(*$w)
    };
}

/// Wrapper that formats a tag as its four ASCII characters, or as hex when it isn't printable.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct DisplayTag(pub u32);

pub const fn from_bytes(chars: [u8; 4]) -> u32 {
    ((chars[0] as u32) << 24)
        | ((chars[1] as u32) << 16)
        | ((chars[2] as u32) << 8)
        | (chars[3] as u32)
}

/// Parse a tag from a string of up to four ASCII characters, padding with spaces.
///
/// This is how language tags arrive from a font dump (`"tml2"`, `"taml"`).
pub fn from_string(s: &str) -> Result<u32, ConfigurationError> {
    if s.is_empty() || s.len() > 4 {
        return Err(ConfigurationError::BadTag(s.to_owned()));
    }

    let mut tag: u32 = 0;
    for c in s.chars() {
        if !c.is_ascii() || c.is_ascii_control() {
            return Err(ConfigurationError::BadTag(s.to_owned()));
        }
        tag = (tag << 8) | (c as u32);
    }

    for _ in s.len()..4 {
        tag = (tag << 8) | (' ' as u32);
    }

    Ok(tag)
}

impl fmt::Display for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0.to_be_bytes();
        if bytes.iter().all(|b| b.is_ascii() && !b.is_ascii_control()) {
            bytes.iter().try_for_each(|&b| write!(f, "{}", char::from(b)))
        } else {
            write!(f, "0x{:08x}", self.0)
        }
    }
}

impl fmt::Debug for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

pub const CMAP: u32 = tag!(b"cmap");
pub const DFLT: u32 = tag!(b"DFLT");
pub const GSUB: u32 = tag!(b"GSUB");
pub const TAML: u32 = tag!(b"taml");
pub const TML2: u32 = tag!(b"tml2");
