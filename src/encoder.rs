//! Conversion of text to a stream of glyph tokens.
//!
//! The output is plain text a layout program can paste and interpret by prefix:
//!
//! * `g+<hex>` a glyph id,
//! * `u+<hex>` a codepoint passed through unchanged,
//! * `\n` a line break.
//!
//! Hex digits are lowercase without padding, and tokens follow each other with no separator.

use std::fmt;

use itertools::Itertools;
use log::debug;

use crate::cmap::CharMap;
use crate::error::{ConvertError, TokenError};
use crate::gsub::SubstitutionIndex;
use crate::reorder::Reordering;
use crate::scripts::ScriptConfig;

pub const GLYPH_PREFIX: &str = "g+";
pub const UNICODE_PREFIX: &str = "u+";

/// Codepoints below 31 are treated as line separators.
pub const DEFAULT_CONTROL_THRESHOLD: u32 = 31;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Glyph(u16),
    Unicode(u32),
    LineBreak,
}

/// What to emit for a codepoint in the script's range that the font doesn't map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingGlyph {
    /// Emit a `u+` token as for text outside the script
    #[default]
    PassThrough,
    /// Emit glyph 0, `.notdef`
    NotDef,
    /// Abort the conversion with `ConvertError::MissingGlyph`
    Fail,
}

/// Position in the input and the number of following positions already consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct EncoderState {
    cursor: usize,
    skip: usize,
}

impl EncoderState {
    /// Move past the current position after it emitted tokens for `consumed` positions.
    fn advance(&mut self, consumed: usize) {
        self.cursor += 1;
        self.skip = consumed.saturating_sub(1);
    }
}

/// Immutable tables for a configured font, shared by every conversion.
#[derive(Clone, Debug)]
pub struct Encoder {
    pub(crate) script: ScriptConfig,
    pub(crate) cmap: CharMap,
    pub(crate) substitutions: SubstitutionIndex,
    pub(crate) reordering: Reordering,
    pub(crate) control_threshold: u32,
    pub(crate) missing_glyph: MissingGlyph,
}

impl Encoder {
    pub fn encode(&self, text: &[char]) -> Result<Vec<Token>, ConvertError> {
        let mut tokens = Vec::with_capacity(text.len());
        let mut state = EncoderState::default();
        while state.cursor < text.len() {
            if state.skip > 0 {
                state.skip -= 1;
                state.cursor += 1;
                continue;
            }
            let consumed = self.encode_at(text, state.cursor, &mut tokens)?;
            state.advance(consumed);
        }
        Ok(tokens)
    }

    /// Emit the tokens for position `i`, returning how many positions they account for.
    fn encode_at(
        &self,
        text: &[char],
        i: usize,
        tokens: &mut Vec<Token>,
    ) -> Result<usize, ConvertError> {
        let ch = text[i];
        if u32::from(ch) < self.control_threshold {
            tokens.push(Token::LineBreak);
            return Ok(1);
        }
        if !self.script.contains(ch) {
            tokens.push(Token::Unicode(u32::from(ch)));
            return Ok(1);
        }

        let glyph = match self.cmap.map_glyph(ch) {
            Some(glyph) => glyph,
            None => return self.encode_missing(ch, tokens),
        };
        if let Some(next) = self.next_glyph(&text[i + 1..]) {
            if let Some(glyphs) = self.reordering.reorder(glyph, next) {
                tokens.extend(glyphs.into_iter().map(Token::Glyph));
                return Ok(2);
            }
            if let Some(rule) = self.substitutions.first_match(glyph, next) {
                tokens.push(Token::Glyph(rule.ligature_glyph));
                return Ok(2);
            }
        }

        tokens.push(Token::Glyph(glyph));
        Ok(1)
    }

    /// Glyph of the character after the current one. `None` at the end of the text or when the
    /// font doesn't map it, so an unmapped character never completes a reorder or ligature.
    fn next_glyph(&self, rest: &[char]) -> Option<u16> {
        rest.first().and_then(|&ch| self.cmap.map_glyph(ch))
    }

    fn encode_missing(&self, ch: char, tokens: &mut Vec<Token>) -> Result<usize, ConvertError> {
        match self.missing_glyph {
            MissingGlyph::PassThrough => {
                debug!("no glyph for U+{:04X}, passing through", u32::from(ch));
                tokens.push(Token::Unicode(u32::from(ch)));
                Ok(1)
            }
            MissingGlyph::NotDef => {
                debug!("no glyph for U+{:04X}, using .notdef", u32::from(ch));
                tokens.push(Token::Glyph(0));
                Ok(1)
            }
            MissingGlyph::Fail => Err(ConvertError::MissingGlyph(ch)),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Glyph(glyph) => write!(f, "{}{:x}", GLYPH_PREFIX, glyph),
            Token::Unicode(codepoint) => write!(f, "{}{:x}", UNICODE_PREFIX, codepoint),
            Token::LineBreak => f.write_str("\n"),
        }
    }
}

/// Concatenate tokens into the output text.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join("")
}

/// Read an output text back into tokens.
pub fn parse_tokens(s: &str) -> Result<Vec<Token>, TokenError> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    while offset < s.len() {
        let rest = &s[offset..];
        if rest.starts_with('\n') {
            tokens.push(Token::LineBreak);
            offset += 1;
            continue;
        }

        let is_glyph = rest.starts_with(GLYPH_PREFIX);
        if !is_glyph && !rest.starts_with(UNICODE_PREFIX) {
            return Err(TokenError::BadPrefix(offset));
        }
        let digits = &rest[2..];
        let len = digits
            .find(|c: char| !matches!(c, '0'..='9' | 'a'..='f'))
            .unwrap_or(digits.len());
        let value = &digits[..len];
        let token = if is_glyph {
            u16::from_str_radix(value, 16).map(Token::Glyph)
        } else {
            u32::from_str_radix(value, 16).map(Token::Unicode)
        }
        .map_err(|_| TokenError::BadValue(offset))?;
        tokens.push(token);
        offset += 2 + len;
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_tables::{Ligature, LigatureSet, LookupTable, TableDump};

    // 0 .notdef, 1 space, 2 A, 3 ka, 4 i, 5 ki, 6 e, 7 aa, 8 o, 9 ta
    fn encoder(missing_glyph: MissingGlyph) -> Encoder {
        let mut dump = TableDump::new(&[
            ".notdef", "space", "A", "ka", "i", "ki", "e", "aa", "o", "ta",
        ]);
        dump.push_cmap(0x20, "space");
        dump.push_cmap(0x41, "A");
        dump.push_cmap(0x0B95, "ka");
        dump.push_cmap(0x0BBF, "i");
        dump.push_cmap(0x0BC6, "e");
        dump.push_cmap(0x0BBE, "aa");
        dump.push_cmap(0x0BCA, "o");
        dump.push_cmap(0x0BA4, "ta");
        dump.push_lookup(LookupTable {
            ligature_sets: vec![LigatureSet::new(
                "ka",
                vec![Ligature::new(&["i"], "ki"), Ligature::new(&["e"], "A")],
            )],
        });
        let script = ScriptConfig::tamil();
        let cmap = CharMap::build(&dump).unwrap();
        Encoder {
            reordering: Reordering::new(&script, &cmap),
            substitutions: SubstitutionIndex::build(&dump, &[0]).unwrap(),
            script,
            cmap,
            control_threshold: DEFAULT_CONTROL_THRESHOLD,
            missing_glyph,
        }
    }

    fn encode(s: &str) -> Vec<Token> {
        let text: Vec<char> = s.chars().collect();
        encoder(MissingGlyph::PassThrough).encode(&text).unwrap()
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Glyph(0x42).to_string(), "g+42");
        assert_eq!(Token::Glyph(0x3ab).to_string(), "g+3ab");
        assert_eq!(Token::Unicode(0x41).to_string(), "u+41");
        assert_eq!(Token::LineBreak.to_string(), "\n");
        assert_eq!(
            tokens_to_string(&[Token::Glyph(5), Token::LineBreak, Token::Unicode(0x20)]),
            "g+5\nu+20"
        );
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(
            parse_tokens("g+5u+41\n\ng+ff"),
            Ok(vec![
                Token::Glyph(5),
                Token::Unicode(0x41),
                Token::LineBreak,
                Token::LineBreak,
                Token::Glyph(0xff)
            ])
        );
        assert_eq!(parse_tokens("g+5x+1"), Err(TokenError::BadPrefix(3)));
        assert_eq!(parse_tokens("u+"), Err(TokenError::BadValue(0)));
        assert_eq!(parse_tokens("g+10000"), Err(TokenError::BadValue(0)));
    }

    #[test]
    fn test_outside_script() {
        assert_eq!(encode("A "), vec![Token::Unicode(0x41), Token::Unicode(0x20)]);
    }

    #[test]
    fn test_control() {
        assert_eq!(
            encode("\r\nA"),
            vec![Token::LineBreak, Token::LineBreak, Token::Unicode(0x41)]
        );
        // 31 is not below the threshold
        assert_eq!(encode("\u{1F}"), vec![Token::Unicode(0x1f)]);
    }

    #[test]
    fn test_ligature() {
        assert_eq!(encode("\u{0B95}\u{0BBF}"), vec![Token::Glyph(5)]);
        assert_eq!(
            encode("\u{0B95}\u{0BBF}\u{0BA4}"),
            vec![Token::Glyph(5), Token::Glyph(9)]
        );
    }

    #[test]
    fn test_reorder_before_ligature() {
        // ka + e has a ligature rule, but reordering wins
        assert_eq!(
            encode("\u{0B95}\u{0BC6}"),
            vec![Token::Glyph(6), Token::Glyph(3)]
        );
        assert_eq!(
            encode("\u{0B95}\u{0BCA}\u{0BA4}"),
            vec![Token::Glyph(6), Token::Glyph(3), Token::Glyph(7), Token::Glyph(9)]
        );
    }

    #[test]
    fn test_next_outside_script_still_looked_up() {
        // the space glyph completes no rule, so the consonant is emitted alone
        assert_eq!(
            encode("\u{0B95} \u{0BBF}"),
            vec![Token::Glyph(3), Token::Unicode(0x20), Token::Glyph(4)]
        );
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!(encode("\u{0B95}"), vec![Token::Glyph(3)]);
        assert!(encode("").is_empty());
    }

    #[test]
    fn test_missing_glyph() {
        let text = ['\u{0B99}', '\u{0B95}'];

        assert_eq!(
            encoder(MissingGlyph::PassThrough).encode(&text),
            Ok(vec![Token::Unicode(0x0b99), Token::Glyph(3)])
        );
        assert_eq!(
            encoder(MissingGlyph::NotDef).encode(&text),
            Ok(vec![Token::Glyph(0), Token::Glyph(3)])
        );
        assert_eq!(
            encoder(MissingGlyph::Fail).encode(&text),
            Err(ConvertError::MissingGlyph('\u{0B99}'))
        );
    }

    #[test]
    fn test_unmapped_next_blocks_match() {
        // U+0B99 isn't mapped so it cannot complete a rule for the consonant before it
        assert_eq!(
            encode("\u{0B95}\u{0B99}\u{0BBF}"),
            vec![Token::Glyph(3), Token::Unicode(0x0b99), Token::Glyph(4)]
        );
    }

    #[test]
    fn test_unmapped_next_blocks_reorder() {
        assert_eq!(
            encode("\u{0B95}\u{0B99}\u{0BC6}"),
            vec![Token::Glyph(3), Token::Unicode(0x0b99), Token::Glyph(6)]
        );
        assert_eq!(
            encode("\u{0B95}\u{0B99}\u{0BCA}\u{0BA4}"),
            vec![
                Token::Glyph(3),
                Token::Unicode(0x0b99),
                Token::Glyph(8),
                Token::Glyph(9)
            ]
        );
    }

    #[test]
    fn test_next_glyph() {
        let encoder = encoder(MissingGlyph::PassThrough);

        assert_eq!(encoder.next_glyph(&['\u{0BBF}', '\u{0BC6}']), Some(4));
        assert_eq!(encoder.next_glyph(&['A']), Some(2));
        assert_eq!(encoder.next_glyph(&['\u{0B99}', '\u{0BC6}']), None);
        assert_eq!(encoder.next_glyph(&[]), None);
    }
}
