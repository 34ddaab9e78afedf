//! Codepoint to glyph id mapping built from the font's `cmap` entries.

use log::info;
use rustc_hash::FxHashMap;

use crate::error::UnknownGlyphName;
use crate::font_tables::LayoutSource;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharMap {
    mappings: FxHashMap<u32, u16>,
}

impl CharMap {
    /// Resolve every `cmap` entry of `source` to a glyph id.
    ///
    /// If a codepoint is listed more than once the first entry is used.
    pub fn build<S: LayoutSource + ?Sized>(source: &S) -> Result<CharMap, UnknownGlyphName> {
        let entries = source.character_map();
        let mut mappings = FxHashMap::with_capacity_and_hasher(entries.len(), Default::default());
        for entry in &entries {
            let glyph_id = source.resolve_glyph_id(&entry.glyph_name)?;
            mappings.entry(entry.codepoint).or_insert(glyph_id);
        }
        info!("{} codepoints in character map", mappings.len());
        Ok(CharMap { mappings })
    }

    pub fn map_glyph(&self, ch: char) -> Option<u16> {
        self.map_codepoint(u32::from(ch))
    }

    pub fn map_codepoint(&self, codepoint: u32) -> Option<u16> {
        self.mappings.get(&codepoint).copied()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_tables::TableDump;

    #[test]
    fn test_map_glyph() {
        let mut dump = TableDump::new(&[".notdef", "space", "tgc_ka", "tgc_ka.alt"]);
        dump.push_cmap(0x20, "space");
        dump.push_cmap(0x0B95, "tgc_ka");
        dump.push_cmap(0x0B95, "tgc_ka.alt");
        let cmap = CharMap::build(&dump).unwrap();

        assert_eq!(cmap.len(), 2);
        assert_eq!(cmap.map_glyph('\u{0B95}'), Some(2));
        assert_eq!(cmap.map_glyph(' '), Some(1));
        assert_eq!(cmap.map_glyph('\u{0B99}'), None);
    }

    #[test]
    fn test_unknown_glyph_name() {
        let mut dump = TableDump::new(&[".notdef"]);
        dump.push_cmap(0x0B95, "tgc_ka");

        assert_eq!(
            CharMap::build(&dump),
            Err(UnknownGlyphName("tgc_ka".to_owned()))
        );
    }
}
