#![allow(dead_code)]

use glyphstream::font_tables::{Ligature, LigatureSet, LookupTable, TableDump};
use glyphstream::tag;

pub const KA: char = '\u{0B95}';
pub const NGA: char = '\u{0B99}';
pub const TA: char = '\u{0BA4}';
pub const MA: char = '\u{0BAE}';
pub const LA: char = '\u{0BB2}';
pub const LETTER_I: char = '\u{0B87}';
pub const SIGN_I: char = '\u{0BBF}';
pub const SIGN_E: char = '\u{0BC6}';
pub const SIGN_O: char = '\u{0BCA}';
pub const SIGN_OO: char = '\u{0BCB}';
pub const SIGN_AU: char = '\u{0BCC}';
pub const PULLI: char = '\u{0BCD}';

// (glyph id, glyph name, codepoint mapped to it)
const GLYPHS: &[(u16, &str, Option<u32>)] = &[
    (0x01, "space", Some(0x20)),
    (0x03, "A", Some(0x41)),
    (0x10, "tgc_ka", Some(0x0B95)),
    (0x11, "tgc_nga", Some(0x0B99)),
    (0x12, "tgc_ta", Some(0x0BA4)),
    (0x13, "tgc_ma", Some(0x0BAE)),
    (0x14, "tgc_la", Some(0x0BB2)),
    (0x1a, "tgv_i", Some(0x0B87)),
    (0x20, "tgm_aa", Some(0x0BBE)),
    (0x21, "tgm_i", Some(0x0BBF)),
    (0x22, "tgm_e", Some(0x0BC6)),
    (0x23, "tgm_ee", Some(0x0BC7)),
    (0x24, "tgm_ai", Some(0x0BC8)),
    (0x25, "tgm_o", Some(0x0BCA)),
    (0x26, "tgm_oo", Some(0x0BCB)),
    (0x27, "tgm_au", Some(0x0BCC)),
    (0x28, "tgm_pulli", Some(0x0BCD)),
    (0x29, "tgm_aulength", Some(0x0BD7)),
    (0x42, "tgc_ki", None),
    (0x43, "tgc_kpulli", None),
    (0x44, "tgc_ti", None),
    (0x45, "tgc_mi", None),
    (0x46, "tgc_lla", None),
    (0x47, "tgc_ke", None),
];

/// A Tamil font with `tml2` and `taml` language systems.
///
/// `tml2` enables lookups 0 and 1, `taml` enables lookups 2 and 0.
pub fn tamil_font() -> TableDump {
    let mut glyph_order: Vec<String> = (0..0x50).map(|gid| format!("glyph{:02}", gid)).collect();
    glyph_order[0] = ".notdef".to_string();
    for &(gid, name, _) in GLYPHS {
        glyph_order[usize::from(gid)] = name.to_string();
    }

    let mut font = TableDump::new(&glyph_order)
        .with_table(tag::CMAP)
        .with_table(tag::GSUB);
    font.push_script_feature(0, tag::TAML, 2);
    font.push_script_feature(0, tag::TAML, 0);
    font.push_script_feature(1, tag::TML2, 0);
    font.push_script_feature(1, tag::TML2, 1);
    font.push_feature_lookup(0, 0);
    font.push_feature_lookup(1, 1);
    font.push_feature_lookup(2, 2);

    font.push_lookup(LookupTable {
        ligature_sets: vec![LigatureSet::new(
            "tgc_ka",
            vec![
                Ligature::new(&["tgv_i"], "tgc_ki"),
                Ligature::new(&["tgm_pulli"], "tgc_kpulli"),
                Ligature::new(&["tgm_e"], "tgc_ke"),
            ],
        )],
    });
    font.push_lookup(LookupTable {
        ligature_sets: vec![
            LigatureSet::new("tgc_ta", vec![Ligature::new(&["tgm_i"], "tgc_ti")]),
            LigatureSet::new(
                "tgc_la",
                vec![Ligature::new(&["tgm_pulli", "tgc_la"], "tgc_lla")],
            ),
        ],
    });
    font.push_lookup(LookupTable {
        ligature_sets: vec![LigatureSet::new(
            "tgc_ma",
            vec![Ligature::new(&["tgm_i"], "tgc_mi")],
        )],
    });

    for &(_, name, codepoint) in GLYPHS {
        if let Some(codepoint) = codepoint {
            font.push_cmap(codepoint, name);
        }
    }
    font
}

pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
