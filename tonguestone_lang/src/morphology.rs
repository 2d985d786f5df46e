// Morphology generator: word order, morphological type, alignment, cases.
//
// All selections go through the divergence bias tables, so the correlation
// rules (isolating ⇒ few cases, synthetic ⇒ rich inventories) and the
// deterministic extremes (d=0 ⇒ SVO isolating, d=1 ⇒ neither) are decided
// in one place. This module only draws from the tables and assembles the
// result.
//
// Case inventories are prefixes of a fixed ordered list keyed by alignment,
// so the core argument cases the translator needs always exist whenever the
// count allows them, and abbreviations are unique by construction. Each
// case also gets a synthesized single-syllable marker from the finished
// phonology — a suffix for affixing types, a particle for isolating ones.

use tonguestone_prng::SeedRng;

use crate::divergence::{self, BiasTable};
use crate::phonology::synthesize_word;
use crate::types::{
    Alignment, Case, CaseSystem, Morphology, Nominal, Phonology, Phonotactics, WordOrderProfile,
};

/// Case name/abbreviation lists in marking order. The generated inventory
/// is always a prefix, so "how many cases" fully determines "which cases".
const NOM_ACC_CASES: &[(&str, &str)] = &[
    ("nominative", "NOM"),
    ("accusative", "ACC"),
    ("genitive", "GEN"),
    ("dative", "DAT"),
    ("locative", "LOC"),
    ("instrumental", "INS"),
    ("ablative", "ABL"),
    ("comitative", "COM"),
    ("benefactive", "BEN"),
];

const ERG_ABS_CASES: &[(&str, &str)] = &[
    ("absolutive", "ABS"),
    ("ergative", "ERG"),
    ("genitive", "GEN"),
    ("dative", "DAT"),
    ("locative", "LOC"),
    ("instrumental", "INS"),
    ("ablative", "ABL"),
    ("comitative", "COM"),
    ("benefactive", "BEN"),
];

const ACTIVE_STATIVE_CASES: &[(&str, &str)] = &[
    ("agentive", "AGT"),
    ("patientive", "PAT"),
    ("genitive", "GEN"),
    ("dative", "DAT"),
    ("locative", "LOC"),
    ("instrumental", "INS"),
    ("ablative", "ABL"),
    ("comitative", "COM"),
    ("benefactive", "BEN"),
];

const TRIPARTITE_CASES: &[(&str, &str)] = &[
    ("nominative", "NOM"),
    ("ergative", "ERG"),
    ("accusative", "ACC"),
    ("genitive", "GEN"),
    ("dative", "DAT"),
    ("locative", "LOC"),
    ("instrumental", "INS"),
    ("ablative", "ABL"),
    ("benefactive", "BEN"),
];

fn case_list(alignment: Alignment) -> &'static [(&'static str, &'static str)] {
    match alignment {
        Alignment::NominativeAccusative | Alignment::Neutral => NOM_ACC_CASES,
        Alignment::ErgativeAbsolutive => ERG_ABS_CASES,
        Alignment::ActiveStative => ACTIVE_STATIVE_CASES,
        Alignment::Tripartite => TRIPARTITE_CASES,
    }
}

fn pick<T: Copy>(rng: &mut SeedRng, table: &BiasTable<T>) -> T {
    let weights: Vec<f64> = table.iter().map(|&(_, w)| w).collect();
    table[rng.weighted_index(&weights)].0
}

/// Generate the morphological system. Draw order is fixed: word order,
/// type, alignment, case count, markers.
pub fn generate(
    rng: &mut SeedRng,
    target: Option<f64>,
    phonology: &Phonology,
    phonotactics: &Phonotactics,
) -> Morphology {
    let basic = pick(rng, &divergence::word_order_weights(target));
    let morph_type = pick(rng, &divergence::morph_type_weights(target));
    let alignment = pick(rng, &divergence::alignment_weights(target));
    let case_count = pick(rng, &divergence::case_count_weights(morph_type, target));

    let list = case_list(alignment);
    let count = case_count.min(list.len());
    let mut cases = Vec::with_capacity(count);
    let mut used_markers: Vec<String> = Vec::new();
    for &(name, abbr) in &list[..count] {
        let marker = unique_marker(rng, phonology, phonotactics, &mut used_markers);
        cases.push(Case {
            name: name.to_string(),
            abbr: abbr.to_string(),
            marker,
        });
    }

    Morphology {
        morph_type,
        word_order: WordOrderProfile { basic },
        alignment,
        nominal: Nominal {
            case_system: CaseSystem { cases },
        },
    }
}

/// Synthesize a one-syllable case marker distinct from the ones already
/// drawn. Collisions get a bounded number of redraws; after that a second
/// syllable disambiguates (tiny inventories can exhaust the CV space).
fn unique_marker(
    rng: &mut SeedRng,
    phonology: &Phonology,
    phonotactics: &Phonotactics,
    used: &mut Vec<String>,
) -> String {
    let mut marker = synthesize_word(phonology, phonotactics, rng, 1);
    for _ in 0..8 {
        if !used.contains(&marker) {
            break;
        }
        marker = synthesize_word(phonology, phonotactics, rng, 1);
    }
    if used.contains(&marker) {
        marker.push_str(&synthesize_word(phonology, phonotactics, rng, 1));
    }
    used.push(marker.clone());
    marker
}
