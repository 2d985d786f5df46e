// Divergence engine: bias tables and post-hoc drift scoring.
//
// The divergence parameter ("Linguistic Drift") steers feature selection
// away from the reference baseline: SVO order, isolating morphology, 0–2
// cases, no tone, CV-dominant syllables, no marked phonemes. Two modes:
//
// - `target = None`: no bias at all. Every feature is drawn uniformly over
//   its domain. This is deliberately distinct from `Some(0.0)`.
// - `target = Some(d)`: each feature gets a weight table that is a pure
//   function of `d`. At d=0 all mass sits on the baseline value; at d=1
//   the baseline value has exactly zero weight. The extremes are therefore
//   deterministic, not merely likely.
//
// Weight tables live here (not scattered through the generators) so the
// correlation rules — isolating ⇒ few cases, synthetic types ⇒ rich case
// inventories — are declarative and testable in isolation.
//
// After generation, `score` measures how far the realized language actually
// landed from the baseline. Scoring is a weighted sum of normalized
// per-feature distances, clamped to [0, 1].

use crate::phonology::is_exotic_consonant;
use crate::types::{
    Alignment, Morphology, MorphType, Phonology, Phonotactics, Prosody, WordOrder,
};

/// Bias table: each feature value paired with its selection weight.
pub type BiasTable<T> = Vec<(T, f64)>;

/// Word-order weights. Baseline SVO gets `1-d`; every other order `d/5`.
pub fn word_order_weights(target: Option<f64>) -> BiasTable<WordOrder> {
    WordOrder::ALL
        .iter()
        .map(|&order| {
            let w = match target {
                None => 1.0,
                Some(d) => {
                    if order == WordOrder::Svo {
                        1.0 - d
                    } else {
                        d / 5.0
                    }
                }
            };
            (order, w)
        })
        .collect()
}

/// Morphological-type weights. Isolating is the baseline; the synthetic
/// types split the drift mass unevenly (agglutination is the most common
/// escape route in natural languages).
pub fn morph_type_weights(target: Option<f64>) -> BiasTable<MorphType> {
    MorphType::ALL
        .iter()
        .map(|&ty| {
            let w = match target {
                None => 1.0,
                Some(d) => match ty {
                    MorphType::Isolating => 1.0 - d,
                    MorphType::Agglutinative => 0.45 * d,
                    MorphType::Polysynthetic => 0.30 * d,
                    MorphType::Fusional => 0.25 * d,
                },
            };
            (ty, w)
        })
        .collect()
}

/// Alignment weights. Nominative-accusative is the reference system; the
/// other four only gain mass as drift rises.
pub fn alignment_weights(target: Option<f64>) -> BiasTable<Alignment> {
    Alignment::ALL
        .iter()
        .map(|&al| {
            let w = match target {
                None => 1.0,
                Some(d) => {
                    if al == Alignment::NominativeAccusative {
                        (1.0 - d) + 0.2
                    } else {
                        0.25 * d
                    }
                }
            };
            (al, w)
        })
        .collect()
}

/// Case-count weights, correlated with the morphological type.
///
/// Isolating languages stay in 0..=3 with count 3 reachable only under
/// drift. Synthetic types range over 2..=9; at d=1 only counts >= 6 carry
/// weight, so maximal drift guarantees a rich inventory.
pub fn case_count_weights(morph_type: MorphType, target: Option<f64>) -> BiasTable<usize> {
    match morph_type {
        MorphType::Isolating => (0..=3)
            .map(|n| {
                let w = match target {
                    None => 1.0,
                    Some(d) => match n {
                        0 => 1.0,
                        1 => 0.8,
                        2 => 0.6,
                        _ => 0.2 * d,
                    },
                };
                (n, w)
            })
            .collect(),
        MorphType::Agglutinative | MorphType::Fusional | MorphType::Polysynthetic => (2..=9)
            .map(|n| {
                let w = match target {
                    None => 1.0,
                    Some(d) => {
                        if n >= 6 {
                            0.2 + 0.8 * d
                        } else {
                            0.8 * (1.0 - d)
                        }
                    }
                };
                (n, w)
            })
            .collect(),
    }
}

/// Probability that the language is tonal. Zero below d=0.25, rising to
/// ~0.56 at maximal drift. Unbiased mode uses a flat 0.3.
pub fn tone_probability(target: Option<f64>) -> f64 {
    match target {
        None => 0.3,
        Some(d) => (d - 0.25).max(0.0) * 0.75,
    }
}

/// Probability of mixing marked phonemes into the inventory.
pub fn exotic_probability(target: Option<f64>) -> f64 {
    match target {
        None => 0.3,
        Some(d) => 0.8 * d,
    }
}

/// Probability of taking the phonotactic extremity branch (which then
/// splits evenly between CV-only collapse and maximal clustering).
pub fn extremity_probability(target: Option<f64>) -> f64 {
    match target {
        None => 0.2,
        Some(d) => (1.5 * (d - 0.6)).clamp(0.0, 1.0),
    }
}

// Scoring weights. They sum to 1.0.
const W_WORD_ORDER: f64 = 0.20;
const W_MORPH_TYPE: f64 = 0.20;
const W_CASES: f64 = 0.20;
const W_TONE: f64 = 0.15;
const W_SYLLABLE: f64 = 0.15;
const W_EXOTIC: f64 = 0.10;

/// Measure how far a realized language drifted from the reference baseline.
pub fn score(
    morphology: &Morphology,
    phonology: &Phonology,
    phonotactics: &Phonotactics,
    prosody: &Prosody,
) -> f64 {
    let word_order_dist = if morphology.word_order.basic == WordOrder::Svo {
        0.0
    } else {
        1.0
    };

    let morph_dist = match morphology.morph_type {
        MorphType::Isolating => 0.0,
        MorphType::Fusional => 0.7,
        MorphType::Agglutinative => 0.8,
        MorphType::Polysynthetic => 1.0,
    };

    let case_count = morphology.nominal.case_system.cases.len() as f64;
    let case_dist = ((case_count - 2.0) / 4.0).clamp(0.0, 1.0);

    let tone_dist = if prosody.has_tone { 1.0 } else { 0.0 };

    let template = phonotactics.template;
    let complexity = f64::from(template.onset_max.saturating_sub(1) + template.coda_max);
    let syllable_dist = (complexity / 5.0).clamp(0.0, 1.0);

    let exotic_count = phonology
        .consonants
        .iter()
        .filter(|p| is_exotic_consonant(&p.ipa))
        .count() as f64;
    let exotic_dist = (exotic_count / 4.0).min(1.0);

    let total = W_WORD_ORDER * word_order_dist
        + W_MORPH_TYPE * morph_dist
        + W_CASES * case_dist
        + W_TONE * tone_dist
        + W_SYLLABLE * syllable_dist
        + W_EXOTIC * exotic_dist;

    total.clamp(0.0, 1.0)
}

/// Render the drift summary line shown in the language's stone text.
pub fn describe(target: Option<f64>, actual: f64) -> String {
    let measured = (actual * 100.0).round() as u32;
    match target {
        Some(t) => {
            let pct = (t * 100.0).round() as u32;
            format!("Linguistic Drift: {pct}% from the reference tongue (measured {measured}%)")
        }
        None => format!("Linguistic Drift: unguided (measured {measured}%)"),
    }
}
