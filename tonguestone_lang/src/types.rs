// Core language-structure types: word order, morphology, phonology, lexicon.
//
// These types form the generation result (`Language` in lib.rs) and are
// consumed read-only by `tonguestone_translate`. Everything here is plain
// data with serde derives — determinism tests compare whole languages by
// their serialized JSON.
//
// The grammar variants (word order, morphological type, alignment) are
// closed enumerations. The translation engine matches on them exhaustively,
// so adding a variant is a compile-visible change across the workspace.
//
// Determinism constraint: no HashMap, no system RNG. Ordered `Vec`s
// everywhere; entry order is part of the contract.

use serde::{Deserialize, Serialize};

/// Basic constituent order of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordOrder {
    Svo,
    Sov,
    Vso,
    Vos,
    Ovs,
    Osv,
}

impl WordOrder {
    /// All six orders, in the fixed order used by the bias tables.
    pub const ALL: [WordOrder; 6] = [
        WordOrder::Svo,
        WordOrder::Sov,
        WordOrder::Vso,
        WordOrder::Vos,
        WordOrder::Ovs,
        WordOrder::Osv,
    ];

    /// Conventional typological label ("SVO", "SOV", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            WordOrder::Svo => "SVO",
            WordOrder::Sov => "SOV",
            WordOrder::Vso => "VSO",
            WordOrder::Vos => "VOS",
            WordOrder::Ovs => "OVS",
            WordOrder::Osv => "OSV",
        }
    }

    /// Whether the verb comes last in the clause. Verb-final languages
    /// front their dependent clauses and adjuncts during translation.
    pub fn is_verb_final(self) -> bool {
        matches!(self, WordOrder::Sov | WordOrder::Osv)
    }
}

/// How the language builds words from morphemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphType {
    /// Little to no inflection; grammatical relations carried by particles
    /// and word order.
    Isolating,
    /// Concatenative affixes, one meaning per affix.
    Agglutinative,
    /// Fused affixes carrying several meanings at once.
    Fusional,
    /// Highly synthetic word-internal structure; pronominal arguments
    /// incorporate into the verb complex.
    Polysynthetic,
}

impl MorphType {
    pub const ALL: [MorphType; 4] = [
        MorphType::Isolating,
        MorphType::Agglutinative,
        MorphType::Fusional,
        MorphType::Polysynthetic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MorphType::Isolating => "isolating",
            MorphType::Agglutinative => "agglutinative",
            MorphType::Fusional => "fusional",
            MorphType::Polysynthetic => "polysynthetic",
        }
    }
}

/// How core arguments of transitive vs. intransitive verbs are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    NominativeAccusative,
    ErgativeAbsolutive,
    ActiveStative,
    Tripartite,
    Neutral,
}

impl Alignment {
    pub const ALL: [Alignment; 5] = [
        Alignment::NominativeAccusative,
        Alignment::ErgativeAbsolutive,
        Alignment::ActiveStative,
        Alignment::Tripartite,
        Alignment::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::NominativeAccusative => "nominative-accusative",
            Alignment::ErgativeAbsolutive => "ergative-absolutive",
            Alignment::ActiveStative => "active-stative",
            Alignment::Tripartite => "tripartite",
            Alignment::Neutral => "neutral",
        }
    }
}

/// A single phoneme: its IPA symbol plus a short feature description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phoneme {
    pub ipa: String,
    /// Distinctive features, e.g. "voiceless velar stop".
    pub features: String,
}

/// Consonant and vowel inventories. No duplicate IPA symbols within a
/// category — enforced by construction (pool shuffling, deduped admixture).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phonology {
    pub consonants: Vec<Phoneme>,
    pub vowels: Vec<Phoneme>,
}

/// Syllable slot maximums. `coda_max == 0` means a strict CV language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableTemplate {
    pub onset_max: u8,
    pub nucleus_max: u8,
    pub coda_max: u8,
}

/// Permitted syllable shapes for the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phonotactics {
    pub template: SyllableTemplate,
}

/// Tone system. `tones` is empty unless `has_tone` is set, in which case it
/// holds at least two named tones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prosody {
    pub has_tone: bool,
    pub tones: Vec<String>,
}

/// A nominal case with its name, gloss abbreviation, and surface marker.
///
/// The marker is a synthesized single syllable; affixing languages suffix
/// it to the noun, isolating languages realize it as a separate particle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    pub abbr: String,
    pub marker: String,
}

/// Ordered case inventory. Abbreviations are unique within a language and
/// the order is stable for a given seed + divergence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSystem {
    pub cases: Vec<Case>,
}

impl CaseSystem {
    /// Look up a case by name. Returns `None` when the language simply
    /// lacks that case — callers leave the noun unmarked.
    pub fn find(&self, name: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.name == name)
    }
}

/// Nominal morphology (currently just the case system).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nominal {
    pub case_system: CaseSystem,
}

/// Word-order profile. Only the basic order is generated today; the struct
/// leaves room for marked orders (questions, topicalization) later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOrderProfile {
    pub basic: WordOrder,
}

/// The morphological system of a generated language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morphology {
    pub morph_type: MorphType,
    pub word_order: WordOrderProfile,
    pub alignment: Alignment,
    pub nominal: Nominal,
}

/// Part of speech for a lexical entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Pronoun,
    Conjunction,
    Subordinator,
    Preposition,
    Particle,
}

/// One lexicon entry: a synthesized surface form paired with its gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexEntry {
    pub id: u32,
    pub form: String,
    pub gloss: String,
    pub pos: PartOfSpeech,
}

/// The generated vocabulary, in a fixed seed-determined order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub entries: Vec<LexEntry>,
}

impl Lexicon {
    /// All entries, in generation order.
    pub fn all(&self) -> &[LexEntry] {
        &self.entries
    }

    /// Look up an entry by its gloss (exact match).
    pub fn find(&self, gloss: &str) -> Option<&LexEntry> {
        self.entries.iter().find(|e| e.gloss == gloss)
    }

    /// Filter entries by part of speech.
    pub fn by_pos(&self, pos: PartOfSpeech) -> Vec<&LexEntry> {
        self.entries.iter().filter(|e| e.pos == pos).collect()
    }
}

/// How far the language drifted from the reference baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Divergence {
    /// The configured target, if one was given.
    pub target: Option<f64>,
    /// Measured drift of the realized language, in [0, 1].
    pub actual: f64,
    /// Human-readable summary; always names the "Linguistic Drift" feature
    /// and the target percentage.
    pub description: String,
}
