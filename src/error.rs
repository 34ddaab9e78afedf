//! Error types

use crate::tag::DisplayTag;
use std::fmt;

/// A glyph name referenced by the font tables that the font's glyph order doesn't contain
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct UnknownGlyphName(pub String);

impl fmt::Display for UnknownGlyphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown glyph name '{}'", self.0)
    }
}

impl std::error::Error for UnknownGlyphName {}

/// Error returned when building the conversion tables
///
/// Any of these leaves no usable converter: a font that is missing tables or references
/// unknown glyphs is not partially usable.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ConfigurationError {
    BadTag(String),
    MissingTable(u32),
    MissingLangSys { primary: u32, fallback: u32 },
    MismatchedReorderRules,
    UnknownGlyph(UnknownGlyphName),
}

impl From<UnknownGlyphName> for ConfigurationError {
    fn from(error: UnknownGlyphName) -> Self {
        ConfigurationError::UnknownGlyph(error)
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::BadTag(tag) => write!(f, "invalid tag '{}'", tag),
            ConfigurationError::MissingTable(tag) => {
                write!(f, "font is missing '{}' table", DisplayTag(*tag))
            }
            ConfigurationError::MissingLangSys { primary, fallback } => write!(
                f,
                "neither '{}' nor '{}' language system found",
                DisplayTag(*primary),
                DisplayTag(*fallback)
            ),
            ConfigurationError::MismatchedReorderRules => {
                write!(f, "two-part reorder rule lists differ in length")
            }
            ConfigurationError::UnknownGlyph(err) => write!(f, "configuration: {}", err),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Error returned from conversion when the missing glyph policy is to fail
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ConvertError {
    MissingGlyph(char),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MissingGlyph(ch) => {
                write!(f, "no glyph for U+{:04X} in character map", u32::from(*ch))
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Error reading a token stream back, carrying the byte offset of the offending token
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TokenError {
    BadPrefix(usize),
    BadValue(usize),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::BadPrefix(offset) => write!(f, "unknown token prefix at offset {}", offset),
            TokenError::BadValue(offset) => write!(f, "invalid token value at offset {}", offset),
        }
    }
}

impl std::error::Error for TokenError {}
