// Tonguestone language generator.
//
// Produces a self-consistent constructed language — phonology, morphology,
// lexicon — from a seed and a single "drift from the reference language"
// parameter, deterministically.
//
// Architecture:
// - `types.rs`: the data model — closed grammar enums and the `Language` graph
// - `divergence.rs`: drift bias tables and post-hoc drift scoring
// - `phonology.rs`: phoneme pools, syllable template, tone, word synthesis
// - `morphology.rs`: word order, morphological type, alignment, case system
// - `lexicon.rs`: the semantic seed set and deterministic vocabulary
// - `lib.rs` (this file): `Config`, `Engine`, and the fixed generation order
//
// Determinism constraint: all randomness flows through
// `tonguestone_prng::SeedRng`, and every generation phase owns its own
// substream of the master seed (phonology, morphology, lexicon, naming).
// A draw added to or removed from one phase cannot shift the values any
// other phase sees, so two runs with the same `Config` produce languages
// that are equal entry-for-entry — the integration tests compare whole
// serialized languages.

pub mod divergence;
pub mod lexicon;
pub mod morphology;
pub mod phonology;
pub mod types;

use std::fmt;

use serde::{Deserialize, Serialize};
use tonguestone_prng::{SeedRng, hash_seed_text};

pub use types::{
    Alignment, Case, CaseSystem, Divergence, LexEntry, Lexicon, Morphology, MorphType, Nominal,
    PartOfSpeech, Phoneme, Phonology, Phonotactics, Prosody, SyllableTemplate, WordOrder,
    WordOrderProfile,
};

// Per-phase RNG stream ids. Fixed forever: changing one reshuffles every
// language generated from existing seeds.
const STREAM_PHONOLOGY: u64 = 1;
const STREAM_MORPHOLOGY: u64 = 2;
const STREAM_LEXICON: u64 = 3;
const STREAM_NAME: u64 = 4;

/// Generation configuration: an integer seed and an optional drift target.
///
/// `divergence = None` disables baseline biasing entirely (uniform feature
/// selection); `Some(0.0)` forces reference-language-like values and
/// `Some(1.0)` forces maximal drift. The two zero-ish modes are distinct on
/// purpose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub seed: u64,
    pub divergence: Option<f64>,
}

/// Configuration rejected before generation starts.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Divergence must be within [0, 1] (NaN included in the rejection).
    DivergenceOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DivergenceOutOfRange(d) => {
                write!(f, "divergence must be within [0, 1], got {d}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A complete generated language. Immutable once produced; owns every
/// nested structure exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub phonology: Phonology,
    pub phonotactics: Phonotactics,
    pub prosody: Prosody,
    pub morphology: Morphology,
    pub lexicon: Lexicon,
    pub divergence: Divergence,
    /// Human-readable summary of the language ("the stone"): name, sound
    /// system, grammar profile, and the drift line.
    pub stone: String,
}

/// The generation engine: validates a `Config` and runs the pipeline.
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
}

impl Engine {
    /// Validate the configuration and build an engine.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        if let Some(d) = config.divergence {
            if !(0.0..=1.0).contains(&d) {
                return Err(ConfigError::DivergenceOutOfRange(d));
            }
        }
        Ok(Engine { config })
    }

    /// Build an engine from a text seed (FNV-1a hashed to the integer seed).
    pub fn from_text(seed_text: &str, divergence: Option<f64>) -> Result<Self, ConfigError> {
        Engine::new(Config {
            seed: hash_seed_text(seed_text),
            divergence,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full pipeline. Pure: same config, same `Language`, always.
    ///
    /// Phase order is fixed — phonology, morphology, lexicon, name — and
    /// each phase draws from its own seed substream. Drift scoring runs
    /// last, over the finished structure.
    pub fn generate(&self) -> Language {
        let seed = self.config.seed;
        let target = self.config.divergence;

        let mut phonology_rng = SeedRng::stream(seed, STREAM_PHONOLOGY);
        let (phonology, phonotactics, prosody) =
            phonology::generate(&mut phonology_rng, target);

        let mut morphology_rng = SeedRng::stream(seed, STREAM_MORPHOLOGY);
        let morphology =
            morphology::generate(&mut morphology_rng, target, &phonology, &phonotactics);

        let mut lexicon_rng = SeedRng::stream(seed, STREAM_LEXICON);
        let lexicon = lexicon::generate(&mut lexicon_rng, &phonology, &phonotactics);

        let mut name_rng = SeedRng::stream(seed, STREAM_NAME);
        let name = lexicon::generate_name(&mut name_rng, &phonology, &phonotactics);

        let actual = divergence::score(&morphology, &phonology, &phonotactics, &prosody);
        let description = divergence::describe(target, actual);
        let divergence = Divergence {
            target,
            actual,
            description,
        };

        let stone = compose_stone(
            &name,
            &phonology,
            &phonotactics,
            &prosody,
            &morphology,
            &divergence,
        );

        Language {
            name,
            phonology,
            phonotactics,
            prosody,
            morphology,
            lexicon,
            divergence,
            stone,
        }
    }
}

/// Render the descriptive stone text for a finished language.
fn compose_stone(
    name: &str,
    phonology: &Phonology,
    phonotactics: &Phonotactics,
    prosody: &Prosody,
    morphology: &Morphology,
    divergence: &Divergence,
) -> String {
    let template = phonotactics.template;
    let syllable_shape = if template.coda_max == 0 {
        "strict CV syllables".to_string()
    } else {
        format!(
            "syllables up to C{}VC{}",
            template.onset_max, template.coda_max
        )
    };

    let tone_line = if prosody.has_tone {
        format!("{} contrastive tones", prosody.tones.len())
    } else {
        "no tone".to_string()
    };

    let cases = &morphology.nominal.case_system.cases;
    let case_line = if cases.is_empty() {
        "no nominal cases".to_string()
    } else {
        let abbrs: Vec<&str> = cases.iter().map(|c| c.abbr.as_str()).collect();
        format!("{} cases ({})", cases.len(), abbrs.join(", "))
    };

    format!(
        "{name}\n\
         {consonants} consonants, {vowels} vowels, {syllable_shape}, {tone_line}\n\
         {order} order, {morph} morphology, {alignment} alignment, {case_line}\n\
         {drift}",
        consonants = phonology.consonants.len(),
        vowels = phonology.vowels.len(),
        order = morphology.word_order.basic.as_str(),
        morph = morphology.morph_type.as_str(),
        alignment = morphology.alignment.as_str(),
        drift = divergence.description,
    )
}
