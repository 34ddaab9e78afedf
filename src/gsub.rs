//! Ligature substitution (`gsub`) rule table.
//!
//! > The Glyph Substitution (GSUB) table provides data for substition of glyphs for appropriate
//! > rendering of scripts, such as cursively-connecting forms in Arabic script, or for advanced
//! > typographic effects, such as ligatures.
//!
//! — <https://docs.microsoft.com/en-us/typography/opentype/spec/gsub>
//!
//! Only one level of ligature substitution is supported: a rule fires when the glyph after its
//! first glyph equals its first component, whatever components follow.

use log::{info, warn};
use rustc_hash::FxHashMap;

use crate::error::UnknownGlyphName;
use crate::font_tables::{LayoutSource, LookupTable};

/// `first_glyph` followed by `component_glyphs` is replaced by `ligature_glyph`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LigatureRule {
    pub first_glyph: u16,
    pub component_glyphs: Vec<u16>,
    pub ligature_glyph: u16,
}

/// Ligature rules keyed by their first glyph.
///
/// Rules for a glyph are kept in lookup order, so rules from earlier lookups take priority.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubstitutionIndex {
    rules: FxHashMap<u16, Vec<LigatureRule>>,
    rule_count: usize,
}

impl LigatureRule {
    /// Whether `next` completes this rule. Only the first component is checked.
    pub fn matches(&self, next: u16) -> bool {
        self.component_glyphs.first() == Some(&next)
    }
}

impl SubstitutionIndex {
    /// Build the rule table from the lookups at `lookup_indices`, in that order.
    ///
    /// Lookup indices past the end of the lookup list are skipped.
    pub fn build<S: LayoutSource + ?Sized>(
        source: &S,
        lookup_indices: &[usize],
    ) -> Result<SubstitutionIndex, UnknownGlyphName> {
        let lookups = source.lookups();
        let mut index = SubstitutionIndex::default();
        for &lookup_index in lookup_indices {
            match lookups.get(lookup_index) {
                Some(lookup) => index.push_lookup(source, lookup)?,
                None => warn!("skipping missing lookup {}", lookup_index),
            }
        }
        info!(
            "{} ligature substitutions for {} glyphs",
            index.rule_count,
            index.rules.len()
        );
        Ok(index)
    }

    fn push_lookup<S: LayoutSource + ?Sized>(
        &mut self,
        source: &S,
        lookup: &LookupTable,
    ) -> Result<(), UnknownGlyphName> {
        for ligature_set in &lookup.ligature_sets {
            let first_glyph = source.resolve_glyph_id(&ligature_set.glyph)?;
            for ligature in &ligature_set.ligatures {
                let component_glyphs = ligature
                    .components
                    .iter()
                    .map(|name| source.resolve_glyph_id(name))
                    .collect::<Result<Vec<_>, _>>()?;
                let ligature_glyph = source.resolve_glyph_id(&ligature.glyph)?;
                self.push(LigatureRule {
                    first_glyph,
                    component_glyphs,
                    ligature_glyph,
                });
            }
        }
        Ok(())
    }

    pub fn push(&mut self, rule: LigatureRule) {
        self.rules.entry(rule.first_glyph).or_default().push(rule);
        self.rule_count += 1;
    }

    /// Total number of rules, counting each copy of a repeated lookup
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    /// Rules starting with `glyph` in priority order
    pub fn rules(&self, glyph: u16) -> &[LigatureRule] {
        self.rules.get(&glyph).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first rule for `glyph` that `next` completes
    pub fn first_match(&self, glyph: u16, next: u16) -> Option<&LigatureRule> {
        self.rules(glyph).iter().find(|rule| rule.matches(next))
    }
}
