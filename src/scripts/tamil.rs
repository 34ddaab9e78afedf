//! Tamil reordering data.
//!
//! The vowel signs E, EE and AI are drawn to the left of their consonant. O, OO and AU are
//! drawn around it: E or EE on the left, AA or the AU length mark on the right.

use super::{ScriptConfig, TwoPartMark};

pub const TAMIL_BLOCK: std::ops::RangeInclusive<u32> = 0x0B80..=0x0BFF;

pub const SIGN_AA: char = '\u{0BBE}';
pub const SIGN_E: char = '\u{0BC6}';
pub const SIGN_EE: char = '\u{0BC7}';
pub const SIGN_AI: char = '\u{0BC8}';
pub const SIGN_O: char = '\u{0BCA}';
pub const SIGN_OO: char = '\u{0BCB}';
pub const SIGN_AU: char = '\u{0BCC}';
pub const AU_LENGTH_MARK: char = '\u{0BD7}';

pub fn script_config() -> ScriptConfig {
    ScriptConfig {
        unicode_range: TAMIL_BLOCK,
        single_part_marks: vec![SIGN_E, SIGN_EE, SIGN_AI],
        two_part_marks: vec![
            TwoPartMark {
                mark: SIGN_O,
                pre: SIGN_E,
                post: SIGN_AA,
            },
            TwoPartMark {
                mark: SIGN_OO,
                pre: SIGN_EE,
                post: SIGN_AA,
            },
            TwoPartMark {
                mark: SIGN_AU,
                pre: SIGN_E,
                post: AU_LENGTH_MARK,
            },
        ],
    }
}
