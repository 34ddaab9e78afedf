#![warn(rust_2018_idioms)]

//! Conversion of Tamil text to the glyph ids an OpenType font would display, for layout
//! programs that can place glyphs but can't shape text.
//!
//! Ligatures come from the font's `GSUB` ligature substitution lookups, applied one level
//! deep, and pre-base vowel signs are moved in front of their consonant. The result is a
//! token stream of glyph ids and passed-through codepoints, see [`encoder`].

pub mod cmap;
pub mod converter;
pub mod encoder;
pub mod error;
pub mod font_tables;
pub mod gsub;
pub mod layout;
pub mod reorder;
pub mod scripts;
pub mod tag;

pub use crate::converter::{Converter, ConverterConfig};
