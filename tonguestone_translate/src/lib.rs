// Tonguestone translation engine.
//
// Translates a bounded subset of English into a generated language,
// producing both the target text and an interlinear gloss. The pipeline:
//
//   text → sentences → tokens → clause tree → realized words → result
//
// - `lexis.rs`: closed-class word tables and the lemmatizer
// - `clause.rs`: clause/NP analysis over the token stream
// - `realize.rs`: word order, case marking, and morphology application
// - `lib.rs` (this file): sentence splitting, tokenizing, `Translator`
//
// Translation is total over recognizable input: unknown vocabulary gets a
// deterministic synthesized form, and malformed structure degrades to a
// best-effort reading. The only errors are empty input and input with no
// word tokens at all.

pub mod clause;
pub mod lexis;
pub mod realize;

use std::fmt;

use serde::{Deserialize, Serialize};
use tonguestone_lang::Language;

use crate::clause::parse_sentence;
use crate::realize::realize_tree;

/// A finished translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Target-language text, one period-terminated sentence per realized
    /// input sentence.
    pub target: String,
    /// Interlinear gloss, one "form = gloss (role)" line per target word.
    pub gloss: String,
    /// Whether segmentation found more than one sentence in the input.
    pub is_multi_sentence: bool,
}

/// Input the translator refuses outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Empty or whitespace-only input.
    Empty,
    /// Input with no recognizable word tokens (punctuation only).
    NoClause,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "input text is empty"),
            InputError::NoClause => write!(f, "input contains no translatable clause"),
        }
    }
}

impl std::error::Error for InputError {}

/// Translator bound to one generated language.
pub struct Translator<'a> {
    lang: &'a Language,
}

impl<'a> Translator<'a> {
    pub fn new(lang: &'a Language) -> Self {
        Translator { lang }
    }

    /// Translate English text into the bound language.
    pub fn translate_to_conlang(&self, text: &str) -> Result<TranslationResult, InputError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }

        let sentences = split_sentences(trimmed);
        // The flag reflects segmentation, not how many segments survived
        // realization.
        let is_multi_sentence = sentences.len() > 1;

        let mut sentence_targets = Vec::new();
        let mut gloss_lines = Vec::new();

        for sentence in &sentences {
            let tokens = tokenize(sentence);
            let Some(tree) = parse_sentence(&tokens) else {
                continue;
            };
            let words = realize_tree(self.lang, &tree);
            if words.is_empty() {
                continue;
            }

            let forms: Vec<&str> = words.iter().map(|w| w.form.as_str()).collect();
            sentence_targets.push(format!("{}.", forms.join(" ")));
            for word in &words {
                gloss_lines.push(format!("{} = {}", word.form, word.annotation));
            }
        }

        if sentence_targets.is_empty() {
            return Err(InputError::NoClause);
        }

        Ok(TranslationResult {
            target: sentence_targets.join(" "),
            gloss: gloss_lines.join("\n"),
            is_multi_sentence,
        })
    }
}

/// Split text into sentences on terminal punctuation. Empty segments
/// (consecutive terminators, trailing punctuation) are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize one sentence: lowercase alphabetic runs, everything else is a
/// separator.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in sentence.chars() {
        if ch.is_alphabetic() {
            current.extend(ch.to_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
