//! Font table records consumed by the converter.
//!
//! Reading a binary font is left to an external loader. What arrives here is the layout data
//! already extracted from the font: the script/language feature records and feature/lookup
//! records of the `GSUB` table, the ligature substitution lookups with glyphs referred to by
//! name, and the `cmap` entries mapping codepoints to glyph names.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::UnknownGlyphName;

/// Associates a language system with one of the features it enables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptFeatureEntry {
    pub script_index: usize,
    pub lang_tag: u32,
    pub feature_index: u16,
}

/// One lookup activated by a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureLookupEntry {
    pub feature_index: u16,
    pub lookup_index: u16,
}

/// A ligature substitution lookup
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupTable {
    pub ligature_sets: Vec<LigatureSet>,
}

/// The ligatures starting with `glyph`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LigatureSet {
    pub glyph: String,
    pub ligatures: Vec<Ligature>,
}

/// The glyphs following the first glyph of a ligature set, and the glyph they become.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ligature {
    pub components: Vec<String>,
    pub glyph: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterMapEntry {
    pub codepoint: u32,
    pub glyph_name: String,
}

/// Source of the layout data of a single font.
pub trait LayoutSource {
    fn script_feature_entries(&self) -> Vec<ScriptFeatureEntry>;

    fn feature_lookup_entries(&self) -> Vec<FeatureLookupEntry>;

    /// Lookups addressed by lookup index
    fn lookups(&self) -> &[LookupTable];

    fn character_map(&self) -> Vec<CharacterMapEntry>;

    fn resolve_glyph_id(&self, glyph_name: &str) -> Result<u16, UnknownGlyphName>;

    fn has_table(&self, tag: u32) -> bool;
}

/// `LayoutSource` over records held in memory, such as those read back from a font dump.
///
/// Glyph ids are positions in the glyph order.
#[derive(Clone, Debug, Default)]
pub struct TableDump {
    tables: FxHashSet<u32>,
    glyph_ids: FxHashMap<String, u16>,
    script_features: Vec<ScriptFeatureEntry>,
    feature_lookups: Vec<FeatureLookupEntry>,
    lookups: Vec<LookupTable>,
    cmap: Vec<CharacterMapEntry>,
}

impl TableDump {
    pub fn new<S: AsRef<str>>(glyph_order: &[S]) -> Self {
        let mut glyph_ids =
            FxHashMap::with_capacity_and_hasher(glyph_order.len(), Default::default());
        for (gid, name) in (0..=u16::MAX).zip(glyph_order) {
            let name: &str = name.as_ref();
            glyph_ids.entry(name.to_owned()).or_insert(gid);
        }
        TableDump {
            glyph_ids,
            ..TableDump::default()
        }
    }

    pub fn num_glyphs(&self) -> usize {
        self.glyph_ids.len()
    }

    pub fn with_table(mut self, tag: u32) -> Self {
        self.tables.insert(tag);
        self
    }

    pub fn push_script_feature(&mut self, script_index: usize, lang_tag: u32, feature_index: u16) {
        self.script_features.push(ScriptFeatureEntry {
            script_index,
            lang_tag,
            feature_index,
        });
    }

    pub fn push_feature_lookup(&mut self, feature_index: u16, lookup_index: u16) {
        self.feature_lookups.push(FeatureLookupEntry {
            feature_index,
            lookup_index,
        });
    }

    /// Append a lookup, returning its lookup index
    pub fn push_lookup(&mut self, lookup: LookupTable) -> usize {
        self.lookups.push(lookup);
        self.lookups.len() - 1
    }

    pub fn push_cmap(&mut self, codepoint: u32, glyph_name: &str) {
        self.cmap.push(CharacterMapEntry {
            codepoint,
            glyph_name: glyph_name.to_owned(),
        });
    }
}

impl LayoutSource for TableDump {
    fn script_feature_entries(&self) -> Vec<ScriptFeatureEntry> {
        self.script_features.clone()
    }

    fn feature_lookup_entries(&self) -> Vec<FeatureLookupEntry> {
        self.feature_lookups.clone()
    }

    fn lookups(&self) -> &[LookupTable] {
        &self.lookups
    }

    fn character_map(&self) -> Vec<CharacterMapEntry> {
        self.cmap.clone()
    }

    fn resolve_glyph_id(&self, glyph_name: &str) -> Result<u16, UnknownGlyphName> {
        self.glyph_ids
            .get(glyph_name)
            .copied()
            .ok_or_else(|| UnknownGlyphName(glyph_name.to_owned()))
    }

    fn has_table(&self, tag: u32) -> bool {
        self.tables.contains(&tag)
    }
}

impl LigatureSet {
    pub fn new(glyph: &str, ligatures: Vec<Ligature>) -> Self {
        LigatureSet {
            glyph: glyph.to_owned(),
            ligatures,
        }
    }
}

impl Ligature {
    pub fn new(components: &[&str], glyph: &str) -> Self {
        Ligature {
            components: components.iter().map(|&name| name.to_owned()).collect(),
            glyph: glyph.to_owned(),
        }
    }
}
