//! Pre-base vowel sign reordering.
//!
//! Unicode stores a vowel sign after its consonant even when it is drawn before it. Without a
//! shaping engine the glyphs have to be emitted in visual order, so a consonant followed by a
//! pre-base sign is swapped, and a consonant followed by a two-part sign is split around the
//! consonant.

use log::warn;
use tinyvec::{tiny_vec, TinyVec};

use crate::cmap::CharMap;
use crate::scripts::ScriptConfig;

pub type ReorderedGlyphs = TinyVec<[u16; 3]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TwoPartGlyphs {
    mark: u16,
    pre: u16,
    post: u16,
}

/// Reordering rules of a script resolved to the glyphs of one font.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reordering {
    single_part: Vec<u16>,
    two_part: Vec<TwoPartGlyphs>,
}

impl Reordering {
    /// Resolve the marks of `script` through `cmap`.
    ///
    /// A rule that refers to a character the font doesn't map can never apply and is dropped.
    pub fn new(script: &ScriptConfig, cmap: &CharMap) -> Reordering {
        let single_part = script
            .single_part_marks
            .iter()
            .filter_map(|&mark| match cmap.map_glyph(mark) {
                Some(glyph) => Some(glyph),
                None => {
                    warn!("no glyph for pre-base mark U+{:04X}", u32::from(mark));
                    None
                }
            })
            .collect();
        let two_part = script
            .two_part_marks
            .iter()
            .filter_map(|two_part| {
                let glyphs = (
                    cmap.map_glyph(two_part.mark),
                    cmap.map_glyph(two_part.pre),
                    cmap.map_glyph(two_part.post),
                );
                match glyphs {
                    (Some(mark), Some(pre), Some(post)) => Some(TwoPartGlyphs { mark, pre, post }),
                    _ => {
                        warn!(
                            "no glyphs for two-part mark U+{:04X}",
                            u32::from(two_part.mark)
                        );
                        None
                    }
                }
            })
            .collect();
        Reordering {
            single_part,
            two_part,
        }
    }

    /// The glyphs to emit in place of `base` followed by `next`, if `next` is a reordered mark.
    ///
    /// A glyph listed both as a single-part and a two-part mark is treated as two-part.
    pub fn reorder(&self, base: u16, next: u16) -> Option<ReorderedGlyphs> {
        if let Some(two_part) = self.two_part.iter().find(|two_part| two_part.mark == next) {
            return Some(tiny_vec![two_part.pre, base, two_part.post]);
        }
        if self.single_part.contains(&next) {
            return Some(tiny_vec![next, base]);
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.single_part.is_empty() && self.two_part.is_empty()
    }
}
