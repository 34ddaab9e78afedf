//! Selection of the `GSUB` language system and the lookups it enables.

use itertools::Itertools;
use log::{info, warn};

use crate::error::ConfigurationError;
use crate::font_tables::{FeatureLookupEntry, ScriptFeatureEntry};
use crate::tag::DisplayTag;

/// Which of the configured language tags the font provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LangSysChoice {
    Primary(u32),
    Fallback(u32),
    None,
}

/// The feature indices of the chosen language system, in the order the font lists them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LangSysFeatures {
    pub choice: LangSysChoice,
    pub feature_indices: Vec<u16>,
}

impl LangSysChoice {
    pub fn lang_tag(self) -> Option<u32> {
        match self {
            LangSysChoice::Primary(tag) | LangSysChoice::Fallback(tag) => Some(tag),
            LangSysChoice::None => None,
        }
    }
}

/// Pick the features for `primary`, or for `fallback` when the font has no `primary` entries.
///
/// When neither tag is present a strict caller gets `MissingLangSys`, otherwise the selection
/// is empty and conversion proceeds without substitutions.
pub fn find_langsys_features(
    entries: &[ScriptFeatureEntry],
    primary: u32,
    fallback: u32,
    strict: bool,
) -> Result<LangSysFeatures, ConfigurationError> {
    let features_for = |lang_tag: u32| -> Vec<u16> {
        entries
            .iter()
            .filter(|entry| entry.lang_tag == lang_tag)
            .map(|entry| entry.feature_index)
            .collect()
    };

    let primary_features = features_for(primary);
    if !primary_features.is_empty() {
        info!("language system found: {}", DisplayTag(primary));
        return Ok(LangSysFeatures {
            choice: LangSysChoice::Primary(primary),
            feature_indices: primary_features,
        });
    }

    let fallback_features = features_for(fallback);
    if !fallback_features.is_empty() {
        info!(
            "language system {} not found, using {}",
            DisplayTag(primary),
            DisplayTag(fallback)
        );
        return Ok(LangSysFeatures {
            choice: LangSysChoice::Fallback(fallback),
            feature_indices: fallback_features,
        });
    }

    if strict {
        return Err(ConfigurationError::MissingLangSys { primary, fallback });
    }
    warn!(
        "neither {} nor {} language system found, no substitutions will be applied",
        DisplayTag(primary),
        DisplayTag(fallback)
    );
    Ok(LangSysFeatures {
        choice: LangSysChoice::None,
        feature_indices: Vec::new(),
    })
}

/// Expand feature indices to lookup indices.
///
/// The feature/lookup records are walked in font order and a lookup is emitted once for every
/// selected occurrence of its feature, so a feature selected twice contributes its lookups
/// twice.
pub fn build_lookup_indices(
    feature_lookups: &[FeatureLookupEntry],
    feature_indices: &[u16],
) -> Vec<usize> {
    let lookups: Vec<usize> = feature_lookups
        .iter()
        .flat_map(|entry| {
            feature_indices
                .iter()
                .filter(move |&&feature_index| feature_index == entry.feature_index)
                .map(move |_| usize::from(entry.lookup_index))
        })
        .collect();
    info!(
        "feature indices [{}] enable lookups [{}]",
        feature_indices.iter().join(", "),
        lookups.iter().join(", ")
    );
    lookups
}
