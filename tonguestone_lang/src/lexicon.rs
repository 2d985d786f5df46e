// Lexicon generator: deterministic vocabulary built on the syllable template.
//
// The gloss list is a fixed semantic seed set chosen to cover the
// translation engine's closed vocabulary — pronouns, core nouns and verbs,
// adjectives, coordinators, subordinators, and prepositions. Entry order is
// the order of `SEED_GLOSSES`, so entry N of two runs with the same config
// is the same word with the same form.
//
// Forms are synthesized from the finished phonotactic template: content
// words run one to three syllables, function words stay monosyllabic.
// Collisions are resolved with bounded redraws and then a lengthening
// fallback, all on the lexicon stream, so uniqueness never costs
// determinism.

use std::collections::BTreeSet;

use tonguestone_prng::SeedRng;

use crate::phonology::synthesize_word;
use crate::types::{LexEntry, Lexicon, PartOfSpeech, Phonology, Phonotactics};

/// The semantic seed set. Glosses here are the lookup keys the translation
/// engine uses; removing one silently degrades translations to fallback
/// forms, so extend rather than replace.
pub const SEED_GLOSSES: &[(&str, PartOfSpeech)] = &[
    // Pronouns
    ("I", PartOfSpeech::Pronoun),
    ("you", PartOfSpeech::Pronoun),
    ("he", PartOfSpeech::Pronoun),
    ("she", PartOfSpeech::Pronoun),
    ("it", PartOfSpeech::Pronoun),
    ("we", PartOfSpeech::Pronoun),
    ("they", PartOfSpeech::Pronoun),
    ("who", PartOfSpeech::Pronoun),
    // Core nouns
    ("man", PartOfSpeech::Noun),
    ("woman", PartOfSpeech::Noun),
    ("child", PartOfSpeech::Noun),
    ("dog", PartOfSpeech::Noun),
    ("cat", PartOfSpeech::Noun),
    ("bird", PartOfSpeech::Noun),
    ("sun", PartOfSpeech::Noun),
    ("star", PartOfSpeech::Noun),
    ("moon", PartOfSpeech::Noun),
    ("tree", PartOfSpeech::Noun),
    ("mountain", PartOfSpeech::Noun),
    ("river", PartOfSpeech::Noun),
    ("stone", PartOfSpeech::Noun),
    ("water", PartOfSpeech::Noun),
    ("fire", PartOfSpeech::Noun),
    ("night", PartOfSpeech::Noun),
    ("day", PartOfSpeech::Noun),
    ("king", PartOfSpeech::Noun),
    ("warrior", PartOfSpeech::Noun),
    ("sword", PartOfSpeech::Noun),
    ("gold", PartOfSpeech::Noun),
    ("silver", PartOfSpeech::Noun),
    ("truth", PartOfSpeech::Noun),
    ("enemy", PartOfSpeech::Noun),
    ("friend", PartOfSpeech::Noun),
    ("house", PartOfSpeech::Noun),
    ("wind", PartOfSpeech::Noun),
    ("song", PartOfSpeech::Noun),
    // Core verbs
    ("see", PartOfSpeech::Verb),
    ("eat", PartOfSpeech::Verb),
    ("sleep", PartOfSpeech::Verb),
    ("run", PartOfSpeech::Verb),
    ("work", PartOfSpeech::Verb),
    ("sing", PartOfSpeech::Verb),
    ("give", PartOfSpeech::Verb),
    ("go", PartOfSpeech::Verb),
    ("fly", PartOfSpeech::Verb),
    ("drink", PartOfSpeech::Verb),
    ("come", PartOfSpeech::Verb),
    ("know", PartOfSpeech::Verb),
    ("follow", PartOfSpeech::Verb),
    ("live", PartOfSpeech::Verb),
    ("fight", PartOfSpeech::Verb),
    ("rise", PartOfSpeech::Verb),
    ("think", PartOfSpeech::Verb),
    ("speak", PartOfSpeech::Verb),
    ("hear", PartOfSpeech::Verb),
    ("love", PartOfSpeech::Verb),
    ("fear", PartOfSpeech::Verb),
    ("make", PartOfSpeech::Verb),
    ("take", PartOfSpeech::Verb),
    ("find", PartOfSpeech::Verb),
    ("hold", PartOfSpeech::Verb),
    ("walk", PartOfSpeech::Verb),
    ("watch", PartOfSpeech::Verb),
    ("be", PartOfSpeech::Verb),
    ("want", PartOfSpeech::Verb),
    ("need", PartOfSpeech::Verb),
    ("have", PartOfSpeech::Verb),
    // Adjectives
    ("old", PartOfSpeech::Adjective),
    ("young", PartOfSpeech::Adjective),
    ("wise", PartOfSpeech::Adjective),
    ("golden", PartOfSpeech::Adjective),
    ("brave", PartOfSpeech::Adjective),
    ("tired", PartOfSpeech::Adjective),
    ("strong", PartOfSpeech::Adjective),
    ("small", PartOfSpeech::Adjective),
    ("great", PartOfSpeech::Adjective),
    ("dark", PartOfSpeech::Adjective),
    ("bright", PartOfSpeech::Adjective),
    // Coordinators
    ("and", PartOfSpeech::Conjunction),
    ("but", PartOfSpeech::Conjunction),
    ("or", PartOfSpeech::Conjunction),
    // Subordinators
    ("because", PartOfSpeech::Subordinator),
    ("when", PartOfSpeech::Subordinator),
    ("if", PartOfSpeech::Subordinator),
    ("that", PartOfSpeech::Subordinator),
    // Prepositions
    ("to", PartOfSpeech::Preposition),
    ("from", PartOfSpeech::Preposition),
    ("in", PartOfSpeech::Preposition),
    ("on", PartOfSpeech::Preposition),
    ("with", PartOfSpeech::Preposition),
    ("at", PartOfSpeech::Preposition),
];

/// Generate the full lexicon on the lexicon stream.
pub fn generate(
    rng: &mut SeedRng,
    phonology: &Phonology,
    phonotactics: &Phonotactics,
) -> Lexicon {
    let mut used = BTreeSet::new();
    let entries = SEED_GLOSSES
        .iter()
        .enumerate()
        .map(|(id, &(gloss, pos))| {
            let syllables = syllable_count(rng, pos);
            let form = unique_form(rng, phonology, phonotactics, syllables, &mut used);
            LexEntry {
                id: id as u32,
                form,
                gloss: gloss.to_string(),
                pos,
            }
        })
        .collect();
    Lexicon { entries }
}

/// Content words get one to three syllables (two most often); pronouns and
/// function words stay short.
fn syllable_count(rng: &mut SeedRng, pos: PartOfSpeech) -> usize {
    match pos {
        PartOfSpeech::Noun | PartOfSpeech::Verb | PartOfSpeech::Adjective => {
            rng.weighted_index(&[0.25, 0.55, 0.20]) + 1
        }
        PartOfSpeech::Pronoun
        | PartOfSpeech::Conjunction
        | PartOfSpeech::Subordinator
        | PartOfSpeech::Preposition
        | PartOfSpeech::Particle => 1,
    }
}

/// Draw a form not yet in use. Bounded redraws first, then grow the word a
/// syllable at a time — a CV template over a small inventory can exhaust
/// the short-form space.
fn unique_form(
    rng: &mut SeedRng,
    phonology: &Phonology,
    phonotactics: &Phonotactics,
    syllables: usize,
    used: &mut BTreeSet<String>,
) -> String {
    let mut form = synthesize_word(phonology, phonotactics, rng, syllables);
    for _ in 0..10 {
        if !used.contains(&form) {
            break;
        }
        form = synthesize_word(phonology, phonotactics, rng, syllables);
    }
    while used.contains(&form) {
        form.push_str(&synthesize_word(phonology, phonotactics, rng, 1));
    }
    used.insert(form.clone());
    form
}

/// Generate the language's own name: a capitalized two- or three-syllable
/// word from the naming stream.
pub fn generate_name(
    rng: &mut SeedRng,
    phonology: &Phonology,
    phonotactics: &Phonotactics,
) -> String {
    let syllables = rng.range_usize_inclusive(2, 3);
    let word = synthesize_word(phonology, phonotactics, rng, syllables);
    capitalize(&word)
}

/// Capitalize the first character of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonology;

    fn sample_sound_system(seed: u64) -> (Phonology, Phonotactics) {
        let mut rng = SeedRng::stream(seed, 1);
        let (ph, pt, _) = phonology::generate(&mut rng, Some(0.4));
        (ph, pt)
    }

    #[test]
    fn seed_set_covers_translator_vocabulary() {
        let glosses: Vec<&str> = SEED_GLOSSES.iter().map(|&(g, _)| g).collect();
        for required in [
            "man", "woman", "see", "and", "but", "or", "because", "when", "if", "that",
            "want", "need", "have", "to", "be", "I", "you",
        ] {
            assert!(glosses.contains(&required), "missing gloss {required}");
        }
    }

    #[test]
    fn seed_set_has_no_duplicate_glosses() {
        let mut seen = BTreeSet::new();
        for &(gloss, _) in SEED_GLOSSES {
            assert!(seen.insert(gloss), "duplicate gloss {gloss}");
        }
    }

    #[test]
    fn generate_is_deterministic_entry_for_entry() {
        let (ph, pt) = sample_sound_system(9);
        let mut a = SeedRng::stream(9, 3);
        let mut b = SeedRng::stream(9, 3);
        let lex_a = generate(&mut a, &ph, &pt);
        let lex_b = generate(&mut b, &ph, &pt);
        assert_eq!(lex_a.entries.len(), lex_b.entries.len());
        for (ea, eb) in lex_a.entries.iter().zip(&lex_b.entries) {
            assert_eq!(ea, eb);
        }
    }

    #[test]
    fn forms_are_unique() {
        for seed in 0..20 {
            let (ph, pt) = sample_sound_system(seed);
            let mut rng = SeedRng::stream(seed, 3);
            let lexicon = generate(&mut rng, &ph, &pt);
            let mut seen = BTreeSet::new();
            for entry in &lexicon.entries {
                assert!(seen.insert(entry.form.clone()), "duplicate form {}", entry.form);
                assert!(!entry.form.is_empty());
            }
        }
    }

    #[test]
    fn ids_are_sequential() {
        let (ph, pt) = sample_sound_system(2);
        let mut rng = SeedRng::stream(2, 3);
        let lexicon = generate(&mut rng, &ph, &pt);
        for (i, entry) in lexicon.entries.iter().enumerate() {
            assert_eq!(entry.id as usize, i);
        }
        assert_eq!(lexicon.entries.len(), SEED_GLOSSES.len());
    }

    #[test]
    fn names_are_capitalized_and_vary() {
        let (ph, pt) = sample_sound_system(4);
        let mut names = BTreeSet::new();
        for seed in 0..50 {
            let mut rng = SeedRng::stream(seed, 4);
            let name = generate_name(&mut rng, &ph, &pt);
            assert!(!name.is_empty());
            // Already capitalized: re-capitalizing is a no-op. (Some IPA
            // letters are caseless, so checking is_uppercase directly
            // would misfire.)
            assert_eq!(name, capitalize(&name));
            names.insert(name);
        }
        assert!(
            names.len() > 20,
            "expected >20 unique names from 50 seeds, got {}",
            names.len()
        );
    }

    #[test]
    fn capitalize_handles_edges() {
        assert_eq!(capitalize("tako"), "Tako");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ŋama"), "Ŋama");
    }
}
