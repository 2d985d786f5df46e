// Phonology generator: phoneme inventories, syllable template, tone system.
//
// Draws from two fixed pools: a plain pool of common English-like phonemes
// and an exotic pool of typologically marked segments (uvulars, ejectives,
// implosives, clicks). Drift controls how much of the exotic pool leaks in.
//
// The syllable template has an "extremity" branch at high drift: the
// language either collapses to strict CV or balloons to maximal clusters.
// Both branches stay reachable across seeds — the branch itself is a coin
// flip taken only after the extremity roll succeeds.
//
// Word-form synthesis (`synthesize_word`) lives here because every consumer
// of the template needs it: the lexicon, case markers, the language name,
// and the translator's fallback forms for unknown vocabulary.

use tonguestone_prng::SeedRng;

use crate::divergence;
use crate::types::{Phoneme, Phonology, Phonotactics, Prosody, SyllableTemplate};

/// Common consonants, roughly the English inventory plus a few near misses.
const PLAIN_CONSONANTS: &[(&str, &str)] = &[
    ("p", "voiceless bilabial stop"),
    ("b", "voiced bilabial stop"),
    ("t", "voiceless alveolar stop"),
    ("d", "voiced alveolar stop"),
    ("k", "voiceless velar stop"),
    ("g", "voiced velar stop"),
    ("m", "bilabial nasal"),
    ("n", "alveolar nasal"),
    ("ŋ", "velar nasal"),
    ("f", "voiceless labiodental fricative"),
    ("v", "voiced labiodental fricative"),
    ("s", "voiceless alveolar fricative"),
    ("z", "voiced alveolar fricative"),
    ("ʃ", "voiceless postalveolar fricative"),
    ("ʒ", "voiced postalveolar fricative"),
    ("h", "voiceless glottal fricative"),
    ("tʃ", "voiceless postalveolar affricate"),
    ("dʒ", "voiced postalveolar affricate"),
    ("l", "alveolar lateral approximant"),
    ("r", "alveolar trill"),
    ("w", "labio-velar approximant"),
    ("j", "palatal approximant"),
    ("θ", "voiceless dental fricative"),
    ("ð", "voiced dental fricative"),
];

/// Typologically marked consonants mixed in at high drift.
const EXOTIC_CONSONANTS: &[(&str, &str)] = &[
    ("q", "voiceless uvular stop"),
    ("ɢ", "voiced uvular stop"),
    ("ʔ", "glottal stop"),
    ("ħ", "voiceless pharyngeal fricative"),
    ("ʕ", "voiced pharyngeal fricative"),
    ("ʈ", "voiceless retroflex stop"),
    ("ɖ", "voiced retroflex stop"),
    ("ɬ", "voiceless lateral fricative"),
    ("ɮ", "voiced lateral fricative"),
    ("pʼ", "bilabial ejective"),
    ("tʼ", "alveolar ejective"),
    ("kʼ", "velar ejective"),
    ("ɓ", "bilabial implosive"),
    ("ɗ", "alveolar implosive"),
    ("ǀ", "dental click"),
    ("ǃ", "alveolar click"),
];

const PLAIN_VOWELS: &[(&str, &str)] = &[
    ("a", "open front unrounded"),
    ("e", "close-mid front unrounded"),
    ("i", "close front unrounded"),
    ("o", "close-mid back rounded"),
    ("u", "close back rounded"),
    ("ɪ", "near-close front unrounded"),
    ("ʊ", "near-close back rounded"),
    ("ɛ", "open-mid front unrounded"),
    ("ɔ", "open-mid back rounded"),
    ("æ", "near-open front unrounded"),
    ("ə", "mid central"),
];

const EXOTIC_VOWELS: &[(&str, &str)] = &[
    ("y", "close front rounded"),
    ("ø", "close-mid front rounded"),
    ("ɯ", "close back unrounded"),
    ("ɨ", "close central unrounded"),
    ("ʉ", "close central rounded"),
    ("œ", "open-mid front rounded"),
];

/// Tone labels used when the language turns out tonal.
const TONE_NAMES: &[&str] = &["high", "low", "rising", "falling", "mid"];

/// Whether an IPA symbol comes from the marked consonant pool.
/// Used by divergence scoring to detect exotic inventories.
pub fn is_exotic_consonant(ipa: &str) -> bool {
    EXOTIC_CONSONANTS.iter().any(|&(sym, _)| sym == ipa)
}

/// Generate the phoneme inventories, syllable template, and tone system.
///
/// All draws come from the phonology stream; the caller hands us the stream
/// and never touches it again.
pub fn generate(
    rng: &mut SeedRng,
    target: Option<f64>,
) -> (Phonology, Phonotactics, Prosody) {
    // Consonant inventory: shuffle the plain pool, take a seed-driven count.
    let mut plain: Vec<&(&str, &str)> = PLAIN_CONSONANTS.iter().collect();
    rng.shuffle(&mut plain);
    let consonant_count = rng.range_usize_inclusive(10, 22);
    let mut consonants: Vec<Phoneme> = plain[..consonant_count]
        .iter()
        .map(|&&(ipa, features)| Phoneme {
            ipa: ipa.to_string(),
            features: features.to_string(),
        })
        .collect();

    // Exotic admixture. Shuffle, count, and roll are all drawn whether or
    // not the branch fires, so draw consumption on the phonology stream is
    // identical for every divergence target.
    let mut exotic: Vec<&(&str, &str)> = EXOTIC_CONSONANTS.iter().collect();
    rng.shuffle(&mut exotic);
    let extra = rng.range_usize_inclusive(1, 4);
    let exotic_roll = rng.next_f64();
    if exotic_roll < divergence::exotic_probability(target) {
        for &&(ipa, features) in &exotic[..extra] {
            consonants.push(Phoneme {
                ipa: ipa.to_string(),
                features: features.to_string(),
            });
        }
    }

    // Vowel inventory.
    let mut plain_vowels: Vec<&(&str, &str)> = PLAIN_VOWELS.iter().collect();
    rng.shuffle(&mut plain_vowels);
    let vowel_count = rng.range_usize_inclusive(5, 8);
    let mut vowels: Vec<Phoneme> = plain_vowels[..vowel_count]
        .iter()
        .map(|&&(ipa, features)| Phoneme {
            ipa: ipa.to_string(),
            features: features.to_string(),
        })
        .collect();

    let mut exotic_vowel_pool: Vec<&(&str, &str)> = EXOTIC_VOWELS.iter().collect();
    rng.shuffle(&mut exotic_vowel_pool);
    let extra_vowels = rng.range_usize_inclusive(1, 2);
    let exotic_vowel_roll = rng.next_f64();
    if exotic_vowel_roll < divergence::exotic_probability(target) * 0.5 {
        for &&(ipa, features) in &exotic_vowel_pool[..extra_vowels] {
            vowels.push(Phoneme {
                ipa: ipa.to_string(),
                features: features.to_string(),
            });
        }
    }

    let phonology = Phonology { consonants, vowels };

    // Syllable template: extremity branch first, graded weights otherwise.
    // All four draws happen regardless of which branch wins.
    let extremity_roll = rng.next_f64();
    let simple_branch = rng.random_bool(0.5);
    let d = target.unwrap_or(0.5);
    let onset_idx = rng.weighted_index(&[1.0, 0.6, d * 0.4]);
    let coda_idx = rng.weighted_index(&[1.0, 0.7, 0.3, d * 0.3]);
    let template = if extremity_roll < divergence::extremity_probability(target) {
        if simple_branch {
            // Strict CV collapse.
            SyllableTemplate {
                onset_max: 1,
                nucleus_max: 1,
                coda_max: 0,
            }
        } else {
            // Maximal clustering.
            SyllableTemplate {
                onset_max: 3,
                nucleus_max: 1,
                coda_max: 3,
            }
        }
    } else {
        SyllableTemplate {
            onset_max: onset_idx as u8 + 1,
            nucleus_max: 1,
            coda_max: coda_idx as u8,
        }
    };
    let phonotactics = Phonotactics { template };

    // Tone system. Roll and count are drawn unconditionally; the count is
    // simply unused for atonal languages.
    let tone_roll = rng.next_f64();
    let tone_count = rng.range_usize_inclusive(2, 5);
    let has_tone = tone_roll < divergence::tone_probability(target);
    let tones = if has_tone {
        TONE_NAMES[..tone_count].iter().map(|t| t.to_string()).collect()
    } else {
        Vec::new()
    };
    let prosody = Prosody { has_tone, tones };

    (phonology, phonotactics, prosody)
}

/// Synthesize a pronounceable word from the language's inventories and
/// syllable template.
///
/// Codas stay sparse (CV-dominant surface texture) even when the template
/// permits them; onsets beyond the first consonant appear with modest
/// probability, so cluster-heavy templates still read as words rather than
/// consonant walls.
pub fn synthesize_word(
    phonology: &Phonology,
    phonotactics: &Phonotactics,
    rng: &mut SeedRng,
    syllable_count: usize,
) -> String {
    let template = phonotactics.template;
    let mut word = String::new();

    for i in 0..syllable_count.max(1) {
        // Word-initial syllables may be vowel-initial; later syllables
        // always take at least one onset consonant.
        let min_onset = usize::from(i > 0).min(template.onset_max as usize);
        let mut onset_len = rng.range_usize_inclusive(min_onset, template.onset_max.max(1) as usize);
        // Thin out long clusters.
        if onset_len > 1 && !rng.random_bool(0.35) {
            onset_len = 1;
        }
        for _ in 0..onset_len {
            let c = rng.range_usize(0, phonology.consonants.len());
            word.push_str(&phonology.consonants[c].ipa);
        }

        let v = rng.range_usize(0, phonology.vowels.len());
        word.push_str(&phonology.vowels[v].ipa);

        if template.coda_max > 0 && rng.random_bool(0.35) {
            let coda_len = rng.range_usize_inclusive(1, template.coda_max as usize);
            for _ in 0..coda_len {
                let c = rng.range_usize(0, phonology.consonants.len());
                word.push_str(&phonology.consonants[c].ipa);
            }
        }
    }

    word
}
