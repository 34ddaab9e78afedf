//! Configuring a converter for a font and converting text with it.
//!
//! ```
//! use glyphstream::converter::{Converter, ConverterConfig};
//! use glyphstream::font_tables::{Ligature, LigatureSet, LookupTable, TableDump};
//! use glyphstream::tag;
//!
//! let mut glyph_order = vec![".notdef".to_string(); 0x42];
//! glyph_order.extend(["ki", "ka", "i"].iter().map(|s| s.to_string()));
//! let mut font = TableDump::new(&glyph_order).with_table(tag::GSUB);
//! font.push_script_feature(0, tag::TML2, 0);
//! font.push_feature_lookup(0, 0);
//! font.push_lookup(LookupTable {
//!     ligature_sets: vec![LigatureSet::new("ka", vec![Ligature::new(&["i"], "ki")])],
//! });
//! font.push_cmap(0x0B95, "ka");
//! font.push_cmap(0x0B87, "i");
//!
//! let converter = Converter::configure(&font, ConverterConfig::default())?;
//! assert_eq!(converter.convert("\u{0B95}\u{0B87}")?, "g+42");
//! assert_eq!(converter.convert("A")?, "u+41");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::info;

use crate::cmap::CharMap;
use crate::encoder::{self, Encoder, MissingGlyph, Token, DEFAULT_CONTROL_THRESHOLD};
use crate::error::{ConfigurationError, ConvertError};
use crate::font_tables::LayoutSource;
use crate::gsub::SubstitutionIndex;
use crate::layout::{self, LangSysChoice};
use crate::reorder::Reordering;
use crate::scripts::ScriptConfig;
use crate::tag::{self, DisplayTag};

/// Settings for `Converter::configure`.
///
/// The default converts Tamil, preferring the `tml2` language system and falling back to
/// `taml`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterConfig {
    pub script: ScriptConfig,
    pub primary_lang: u32,
    pub fallback_lang: u32,
    /// Fail when the font has neither language system instead of converting without ligatures
    pub strict: bool,
    pub control_threshold: u32,
    pub missing_glyph: MissingGlyph,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            script: ScriptConfig::tamil(),
            primary_lang: tag::TML2,
            fallback_lang: tag::TAML,
            strict: false,
            control_threshold: DEFAULT_CONTROL_THRESHOLD,
            missing_glyph: MissingGlyph::default(),
        }
    }
}

impl ConverterConfig {
    pub fn with_script(mut self, script: ScriptConfig) -> Self {
        self.script = script;
        self
    }

    pub fn with_langs(mut self, primary_lang: u32, fallback_lang: u32) -> Self {
        self.primary_lang = primary_lang;
        self.fallback_lang = fallback_lang;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_control_threshold(mut self, control_threshold: u32) -> Self {
        self.control_threshold = control_threshold;
        self
    }

    pub fn with_missing_glyph(mut self, missing_glyph: MissingGlyph) -> Self {
        self.missing_glyph = missing_glyph;
        self
    }
}

/// Tables built from one font, ready to convert any number of texts.
///
/// A `Converter` is never modified after `configure`, so it can be shared between threads.
#[derive(Clone, Debug)]
pub struct Converter {
    lang_sys: LangSysChoice,
    lookup_indices: Vec<usize>,
    encoder: Encoder,
}

impl Converter {
    /// Build the conversion tables for `source`.
    pub fn configure<S: LayoutSource + ?Sized>(
        source: &S,
        config: ConverterConfig,
    ) -> Result<Converter, ConfigurationError> {
        if !source.has_table(tag::GSUB) {
            return Err(ConfigurationError::MissingTable(tag::GSUB));
        }

        let features = layout::find_langsys_features(
            &source.script_feature_entries(),
            config.primary_lang,
            config.fallback_lang,
            config.strict,
        )?;
        let lookup_indices = layout::build_lookup_indices(
            &source.feature_lookup_entries(),
            &features.feature_indices,
        );
        let substitutions = SubstitutionIndex::build(source, &lookup_indices)?;
        let cmap = CharMap::build(source)?;
        let reordering = Reordering::new(&config.script, &cmap);

        if let Some(lang_tag) = features.choice.lang_tag() {
            info!(
                "configured {} with {} lookups",
                DisplayTag(lang_tag),
                lookup_indices.len()
            );
        }

        Ok(Converter {
            lang_sys: features.choice,
            lookup_indices,
            encoder: Encoder {
                script: config.script,
                cmap,
                substitutions,
                reordering,
                control_threshold: config.control_threshold,
                missing_glyph: config.missing_glyph,
            },
        })
    }

    pub fn convert(&self, text: &str) -> Result<String, ConvertError> {
        let chars: Vec<char> = text.chars().collect();
        self.convert_chars(&chars)
    }

    pub fn convert_chars(&self, text: &[char]) -> Result<String, ConvertError> {
        let tokens = self.tokens(text)?;
        Ok(encoder::tokens_to_string(&tokens))
    }

    pub fn tokens(&self, text: &[char]) -> Result<Vec<Token>, ConvertError> {
        self.encoder.encode(text)
    }

    /// The language system whose features were applied
    pub fn lang_sys(&self) -> LangSysChoice {
        self.lang_sys
    }

    /// Lookup indices in the order their rules were added
    pub fn lookup_indices(&self) -> &[usize] {
        &self.lookup_indices
    }

    pub fn substitutions(&self) -> &SubstitutionIndex {
        &self.encoder.substitutions
    }

    pub fn cmap(&self) -> &CharMap {
        &self.encoder.cmap
    }
}
