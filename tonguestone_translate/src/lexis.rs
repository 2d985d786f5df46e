// Closed-class English word lists and the lemmatizer.
//
// The translator only recognizes a bounded slice of English. These tables
// define that slice: determiners and auxiliaries that get absorbed,
// coordinators and subordinators that steer clause structure, and the
// content-word lemmas the generated lexicon can realize. Anything outside
// the tables is treated as an unknown noun-like word and rendered with a
// synthesized fallback form — unknown vocabulary must never fail a
// translation.
//
// Lemmatization is a small irregular-form table plus suffix stripping
// validated against the known-lemma sets. It is deliberately not a general
// English stemmer: it only needs to cover the closed verb/noun vocabulary.

/// Articles, absorbed during NP parsing.
pub const DETERMINERS: &[&str] = &["the", "a", "an"];

/// Clause- and NP-level coordinators.
pub const COORDINATORS: &[&str] = &["and", "but", "or"];

/// Subordinating conjunctions.
pub const SUBORDINATORS: &[&str] = &["because", "when", "if", "that"];

/// Copula forms, all lemmatized to "be".
pub const COPULAS: &[&str] = &["is", "are", "am", "was", "were", "be", "been", "being"];

/// Auxiliaries and modals, absorbed without a surface reflex. Tense and
/// modality marking is out of scope for the bound grammar.
pub const AUXILIARIES: &[&str] = &[
    "will", "would", "can", "could", "shall", "should", "may", "might", "must", "do", "does",
    "did",
];

pub const PREPOSITIONS: &[&str] = &["to", "from", "in", "on", "with", "at"];

/// Pronoun surface forms mapped to their lexicon gloss.
pub const PRONOUNS: &[(&str, &str)] = &[
    ("i", "I"),
    ("you", "you"),
    ("he", "he"),
    ("him", "he"),
    ("she", "she"),
    ("her", "she"),
    ("it", "it"),
    ("we", "we"),
    ("us", "we"),
    ("they", "they"),
    ("them", "they"),
    ("who", "who"),
];

/// Verb lemmas the generated lexicon covers.
pub const KNOWN_VERBS: &[&str] = &[
    "see", "eat", "sleep", "run", "work", "sing", "give", "go", "fly", "drink", "come", "know",
    "follow", "live", "fight", "rise", "think", "speak", "hear", "love", "fear", "make", "take",
    "find", "hold", "walk", "watch", "be", "want", "need", "have",
];

/// Noun lemmas the generated lexicon covers (plural stripping targets).
pub const KNOWN_NOUNS: &[&str] = &[
    "man", "woman", "child", "dog", "cat", "bird", "sun", "star", "moon", "tree", "mountain",
    "river", "stone", "water", "fire", "night", "day", "king", "warrior", "sword", "gold",
    "silver", "truth", "enemy", "friend", "house", "wind", "song",
];

pub const KNOWN_ADJECTIVES: &[&str] = &[
    "old", "young", "wise", "golden", "brave", "tired", "strong", "small", "great", "dark",
    "bright",
];

/// Verbs whose sole argument patterns with objects under active-stative
/// alignment (non-volitional / stative predicates).
pub const STATIVE_VERBS: &[&str] = &["sleep", "be", "live", "know", "fear", "love", "want", "need", "have"];

/// Matrix verbs that take an infinitival complement ("wants to eat").
pub const INFINITIVE_MATRIX_VERBS: &[&str] = &["want", "need", "have"];

/// Irregular verb forms. Checked before suffix stripping.
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("ran", "run"),
    ("saw", "see"),
    ("gave", "give"),
    ("flew", "fly"),
    ("came", "come"),
    ("slept", "sleep"),
    ("fought", "fight"),
    ("went", "go"),
    ("knew", "know"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("ate", "eat"),
    ("drank", "drink"),
    ("rose", "rise"),
    ("thought", "think"),
    ("spoke", "speak"),
    ("heard", "hear"),
    ("made", "make"),
    ("took", "take"),
    ("found", "find"),
    ("held", "hold"),
    ("had", "have"),
    ("has", "have"),
];

/// Irregular noun plurals.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("enemies", "enemy"),
];

pub fn is_determiner(token: &str) -> bool {
    DETERMINERS.contains(&token)
}

pub fn is_coordinator(token: &str) -> bool {
    COORDINATORS.contains(&token)
}

pub fn is_subordinator(token: &str) -> bool {
    SUBORDINATORS.contains(&token)
}

pub fn is_copula(token: &str) -> bool {
    COPULAS.contains(&token)
}

pub fn is_auxiliary(token: &str) -> bool {
    AUXILIARIES.contains(&token)
}

pub fn is_preposition(token: &str) -> bool {
    PREPOSITIONS.contains(&token)
}

pub fn is_adjective(token: &str) -> bool {
    KNOWN_ADJECTIVES.contains(&token)
}

pub fn is_stative_verb(lemma: &str) -> bool {
    STATIVE_VERBS.contains(&lemma)
}

/// Pronoun gloss for a surface token, if it is a pronoun.
pub fn pronoun_gloss(token: &str) -> Option<&'static str> {
    PRONOUNS
        .iter()
        .find(|&&(surface, _)| surface == token)
        .map(|&(_, gloss)| gloss)
}

/// Lemmatize a verb token. Returns `None` when the token cannot be read as
/// a known verb — the caller then treats it as something else.
pub fn verb_lemma(token: &str) -> Option<&'static str> {
    if is_copula(token) {
        return Some("be");
    }
    if let Some(&(_, lemma)) = IRREGULAR_VERBS.iter().find(|&&(form, _)| form == token) {
        return Some(lemma);
    }
    if let Some(lemma) = KNOWN_VERBS.iter().find(|&&v| v == token) {
        return Some(lemma);
    }

    // Suffix stripping, validated against the known-verb list. Each
    // candidate stem is only accepted if it is a known lemma.
    let candidates = stem_candidates(token);
    for candidate in &candidates {
        if let Some(lemma) = KNOWN_VERBS.iter().find(|&&v| v == candidate.as_str()) {
            return Some(lemma);
        }
    }
    None
}

/// Lemmatize a noun token; falls back to the surface form for unknowns.
pub fn noun_gloss(token: &str) -> String {
    if let Some(&(_, lemma)) = IRREGULAR_NOUNS.iter().find(|&&(form, _)| form == token) {
        return lemma.to_string();
    }
    if KNOWN_NOUNS.contains(&token) {
        return token.to_string();
    }
    for candidate in stem_candidates(token) {
        if KNOWN_NOUNS.contains(&candidate.as_str()) {
            return candidate;
        }
    }
    token.to_string()
}

/// Whether the token reads as a verb in the bound grammar.
pub fn is_verbal(token: &str) -> bool {
    verb_lemma(token).is_some()
}

/// Candidate stems from regular suffix stripping: -ies/-ied → -y, -es, -s,
/// -ed (with silent-e restoration), -ing (with silent-e restoration and
/// doubled-consonant reduction).
fn stem_candidates(token: &str) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(stem) = token.strip_suffix("ies") {
        out.push(format!("{stem}y"));
    }
    if let Some(stem) = token.strip_suffix("ied") {
        out.push(format!("{stem}y"));
    }
    if let Some(stem) = token.strip_suffix("es") {
        out.push(stem.to_string());
    }
    if let Some(stem) = token.strip_suffix('s') {
        out.push(stem.to_string());
    }
    if let Some(stem) = token.strip_suffix("ed") {
        out.push(stem.to_string());
        out.push(format!("{stem}e"));
    }
    if let Some(stem) = token.strip_suffix("ing") {
        out.push(stem.to_string());
        out.push(format!("{stem}e"));
        // Doubled final consonant: running → run.
        let chars: Vec<char> = stem.chars().collect();
        if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
            out.push(chars[..chars.len() - 1].iter().collect());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_verbs_lemmatize() {
        assert_eq!(verb_lemma("ran"), Some("run"));
        assert_eq!(verb_lemma("saw"), Some("see"));
        assert_eq!(verb_lemma("slept"), Some("sleep"));
        assert_eq!(verb_lemma("went"), Some("go"));
        assert_eq!(verb_lemma("flew"), Some("fly"));
    }

    #[test]
    fn regular_verbs_lemmatize() {
        assert_eq!(verb_lemma("sees"), Some("see"));
        assert_eq!(verb_lemma("watches"), Some("watch"));
        assert_eq!(verb_lemma("flies"), Some("fly"));
        assert_eq!(verb_lemma("worked"), Some("work"));
        assert_eq!(verb_lemma("lived"), Some("live"));
        assert_eq!(verb_lemma("rises"), Some("rise"));
        assert_eq!(verb_lemma("running"), Some("run"));
        assert_eq!(verb_lemma("making"), Some("make"));
        assert_eq!(verb_lemma("wants"), Some("want"));
        assert_eq!(verb_lemma("needs"), Some("need"));
    }

    #[test]
    fn copulas_lemmatize_to_be() {
        for form in COPULAS {
            assert_eq!(verb_lemma(form), Some("be"));
        }
    }

    #[test]
    fn non_verbs_do_not_lemmatize() {
        assert_eq!(verb_lemma("mountain"), None);
        assert_eq!(verb_lemma("the"), None);
        assert_eq!(verb_lemma("xyzzy"), None);
    }

    #[test]
    fn noun_plurals_strip() {
        assert_eq!(noun_gloss("birds"), "bird");
        assert_eq!(noun_gloss("enemies"), "enemy");
        assert_eq!(noun_gloss("men"), "man");
        assert_eq!(noun_gloss("women"), "woman");
        assert_eq!(noun_gloss("houses"), "house");
    }

    #[test]
    fn unknown_nouns_pass_through() {
        assert_eq!(noun_gloss("dragon"), "dragon");
        assert_eq!(noun_gloss("xyzzy"), "xyzzy");
    }

    #[test]
    fn pronoun_glosses() {
        assert_eq!(pronoun_gloss("i"), Some("I"));
        assert_eq!(pronoun_gloss("them"), Some("they"));
        assert_eq!(pronoun_gloss("her"), Some("she"));
        assert_eq!(pronoun_gloss("man"), None);
    }

    #[test]
    fn category_predicates() {
        assert!(is_determiner("the"));
        assert!(is_coordinator("but"));
        assert!(is_subordinator("because"));
        assert!(is_auxiliary("will"));
        assert!(is_preposition("from"));
        assert!(is_adjective("tired"));
        assert!(is_stative_verb("sleep"));
        assert!(!is_stative_verb("run"));
    }
}
