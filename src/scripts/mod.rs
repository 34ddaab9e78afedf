//! Per-script configuration of the converter.

pub mod tamil;

use std::ops::RangeInclusive;

use crate::error::ConfigurationError;

/// A vowel sign written after its base consonant in Unicode but drawn in two parts around it:
/// `pre` before the base and `post` after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TwoPartMark {
    pub mark: char,
    pub pre: char,
    pub post: char,
}

/// The Unicode block converted to glyphs and the vowel signs that need reordering.
///
/// Codepoints outside `unicode_range` are passed through as literals. Each of the
/// `single_part_marks` is drawn before its base consonant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptConfig {
    pub unicode_range: RangeInclusive<u32>,
    pub single_part_marks: Vec<char>,
    pub two_part_marks: Vec<TwoPartMark>,
}

impl TwoPartMark {
    /// Zip parallel lists of marks, pre-base parts and post-base parts.
    pub fn from_parallel(
        marks: &[char],
        pre: &[char],
        post: &[char],
    ) -> Result<Vec<TwoPartMark>, ConfigurationError> {
        if marks.len() != pre.len() || marks.len() != post.len() {
            return Err(ConfigurationError::MismatchedReorderRules);
        }
        Ok(marks
            .iter()
            .zip(pre)
            .zip(post)
            .map(|((&mark, &pre), &post)| TwoPartMark { mark, pre, post })
            .collect())
    }
}

impl ScriptConfig {
    pub fn tamil() -> Self {
        tamil::script_config()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.unicode_range.contains(&u32::from(ch))
    }
}
