// Clause analysis: a recursive-descent recognizer over the token stream.
//
// The bound grammar recognizes:
// - clause coordination with and/but/or (a verb required on both sides),
// - subordination with because/when/if/that (sentence-initial or medial),
// - coordinated noun phrases (sharing role and case),
// - infinitival complements (want/need/have + "to" + verb [+ PP]),
// - copula + adjective predicates,
// - plain [NP] V [NP] [PP]* clauses.
//
// Parsing is best-effort: unknown words become noun-like heads, a clause
// with no detectable verb falls back to a copular reading, and stray
// tokens are dropped. The only hard failure is a sentence with no word
// tokens at all, reported by the caller as `InputError::NoClause`.

use crate::lexis;

/// A noun phrase: head gloss, optional adjectives, optional conjoined NP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounPhrase {
    /// Gloss key for the head (lemmatized noun, pronoun gloss, or the raw
    /// surface form for unknown words).
    pub head: String,
    pub adjectives: Vec<String>,
    pub pronoun: bool,
    /// Conjoined second NP ("X and Y"), with its coordinator gloss.
    pub conjoined: Option<(String, Box<NounPhrase>)>,
}

/// A prepositional phrase adjunct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepPhrase {
    pub prep: String,
    pub object: NounPhrase,
}

/// One simple clause after analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub subject: Option<NounPhrase>,
    /// Matrix verb lemma.
    pub verb: String,
    /// Infinitival complement verb lemma ("wants to eat" → Some("eat")).
    pub complement_verb: Option<String>,
    /// Predicate adjective for copular clauses ("he is tired").
    pub predicate_adjective: Option<String>,
    pub object: Option<NounPhrase>,
    pub adjuncts: Vec<PrepPhrase>,
}

impl Clause {
    /// A clause counts as transitive when it has a direct object. Matters
    /// for ergative and tripartite subject marking.
    pub fn is_transitive(&self) -> bool {
        self.object.is_some()
    }
}

/// The clause structure of one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseTree {
    Leaf(Clause),
    Coordination {
        coordinator: String,
        left: Box<ClauseTree>,
        right: Box<ClauseTree>,
    },
    Subordination {
        subordinator: String,
        main: Box<ClauseTree>,
        dependent: Box<ClauseTree>,
    },
}

/// Parse one sentence's tokens into a clause tree. Returns `None` for an
/// empty token list; every non-empty list parses to something.
pub fn parse_sentence(tokens: &[String]) -> Option<ClauseTree> {
    if tokens.is_empty() {
        return None;
    }

    // Sentence-initial subordinator: "When the sun rises the birds sing."
    // The dependent/main boundary sits at the start of the second verb's
    // subject NP.
    if lexis::is_subordinator(&tokens[0]) && tokens.len() > 1 {
        let rest = &tokens[1..];
        if let Some(boundary) = dependent_boundary(rest) {
            let dependent = parse_sentence(&rest[..boundary])?;
            let main = parse_sentence(&rest[boundary..])?;
            return Some(ClauseTree::Subordination {
                subordinator: tokens[0].clone(),
                main: Box::new(main),
                dependent: Box::new(dependent),
            });
        }
        // No second clause: treat the dependent content as the sentence.
        return parse_sentence(rest);
    }

    // Clause-level coordination: a coordinator with a verb on both sides.
    for (i, token) in tokens.iter().enumerate() {
        if lexis::is_coordinator(token)
            && has_verb(&tokens[..i])
            && has_verb(&tokens[i + 1..])
        {
            let left = parse_sentence(&tokens[..i])?;
            let right = parse_sentence(&tokens[i + 1..])?;
            return Some(ClauseTree::Coordination {
                coordinator: token.clone(),
                left: Box::new(left),
                right: Box::new(right),
            });
        }
    }

    // Medial subordinator: main clause first, dependent after.
    for (i, token) in tokens.iter().enumerate().skip(1) {
        if lexis::is_subordinator(token) && i + 1 < tokens.len() {
            let main = parse_sentence(&tokens[..i])?;
            let dependent = parse_sentence(&tokens[i + 1..])?;
            return Some(ClauseTree::Subordination {
                subordinator: token.clone(),
                main: Box::new(main),
                dependent: Box::new(dependent),
            });
        }
    }

    Some(ClauseTree::Leaf(parse_clause(tokens)))
}

fn has_verb(tokens: &[String]) -> bool {
    tokens.iter().any(|t| lexis::is_verbal(t))
}

/// For a subordinator-initial sentence (minus the subordinator), find where
/// the main clause begins: locate the second verb, then back over its
/// subject NP (determiners, adjectives, pronouns, noun-like words,
/// auxiliaries). Returns `None` when there is no second clause.
fn dependent_boundary(tokens: &[String]) -> Option<usize> {
    let mut verb_positions = tokens.iter().enumerate().filter_map(|(i, t)| {
        if lexis::is_verbal(t) { Some(i) } else { None }
    });
    let first = verb_positions.next()?;
    let second = verb_positions.next()?;

    let mut boundary = second;
    while boundary > first + 1 {
        let prev = &tokens[boundary - 1];
        let subject_material = lexis::is_determiner(prev)
            || lexis::is_adjective(prev)
            || lexis::is_auxiliary(prev)
            || lexis::pronoun_gloss(prev).is_some()
            || is_noun_like(prev);
        if subject_material {
            boundary -= 1;
        } else {
            break;
        }
    }
    Some(boundary)
}

/// Anything that is not a recognized function word or verb reads as a noun.
fn is_noun_like(token: &str) -> bool {
    !lexis::is_verbal(token)
        && !lexis::is_determiner(token)
        && !lexis::is_coordinator(token)
        && !lexis::is_subordinator(token)
        && !lexis::is_preposition(token)
        && !lexis::is_auxiliary(token)
        && !lexis::is_adjective(token)
}

/// Parse a simple clause: [NP] (aux)* V [to V] [NP] [PP]*.
fn parse_clause(tokens: &[String]) -> Clause {
    let mut cursor = Cursor::new(tokens);

    let subject = if cursor.peek().is_some_and(|t| !lexis::is_verbal(t)) {
        cursor.parse_np()
    } else {
        None
    };

    cursor.skip_auxiliaries();

    let mut verb = String::from("be");
    let mut complement_verb = None;
    let mut predicate_adjective = None;
    let mut object = None;

    if let Some(token) = cursor.peek() {
        if lexis::is_copula(token) {
            cursor.advance();
            cursor.skip_auxiliaries();
            // "he is tired" vs "she is a warrior".
            if let Some(next) = cursor.peek() {
                if lexis::is_adjective(next) {
                    predicate_adjective = Some(next.to_string());
                    cursor.advance();
                } else if !lexis::is_preposition(next) {
                    object = cursor.parse_np();
                }
            }
        } else if let Some(lemma) = lexis::verb_lemma(token) {
            verb = lemma.to_string();
            cursor.advance();

            // Infinitival complement: want/need/have + "to" + verb.
            if lexis::INFINITIVE_MATRIX_VERBS.contains(&lemma)
                && cursor.peek() == Some("to")
                && cursor.peek_at(1).is_some_and(lexis::is_verbal)
            {
                cursor.advance(); // "to"
                let comp = cursor.peek().and_then(lexis::verb_lemma);
                if let Some(comp) = comp {
                    complement_verb = Some(comp.to_string());
                    cursor.advance();
                }
            }

            if cursor.peek().is_some_and(|t| {
                !lexis::is_preposition(t) && !lexis::is_verbal(t)
            }) {
                object = cursor.parse_np();
            }
        } else {
            // No verb in sight: copular fallback over whatever remains.
            object = cursor.parse_np();
        }
    }

    let mut adjuncts = Vec::new();
    while let Some(token) = cursor.peek() {
        if lexis::is_preposition(token) {
            let prep = token.to_string();
            cursor.advance();
            if let Some(np) = cursor.parse_np() {
                adjuncts.push(PrepPhrase { prep, object: np });
            } else {
                break;
            }
        } else {
            // Stray token the bound grammar cannot place; drop it.
            cursor.advance();
        }
    }

    Clause {
        subject,
        verb,
        complement_verb,
        predicate_adjective,
        object,
        adjuncts,
    }
}

/// Token-stream cursor with the NP sub-parser.
struct Cursor<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [String]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn peek_at(&self, offset: usize) -> Option<&str> {
        self.tokens.get(self.pos + offset).map(String::as_str)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_auxiliaries(&mut self) {
        while self.peek().is_some_and(lexis::is_auxiliary) {
            self.advance();
        }
    }

    /// Parse a noun phrase: [det] adj* head [coord NP]. Returns `None` when
    /// the stream does not start with NP material.
    fn parse_np(&mut self) -> Option<NounPhrase> {
        while self.peek().is_some_and(lexis::is_determiner) {
            self.advance();
        }

        let mut adjectives = Vec::new();
        while let Some(token) = self.peek() {
            if !lexis::is_adjective(token) {
                break;
            }
            adjectives.push(token.to_string());
            self.advance();
        }

        let head_token = self.peek()?;
        if lexis::is_verbal(head_token)
            || lexis::is_preposition(head_token)
            || lexis::is_coordinator(head_token)
            || lexis::is_subordinator(head_token)
        {
            // The adjectives were the whole phrase ("the old ..."); promote
            // the last adjective to head rather than losing the NP.
            return adjectives.pop().map(|adj| NounPhrase {
                head: adj,
                adjectives,
                pronoun: false,
                conjoined: None,
            });
        }

        let (head, pronoun) = match lexis::pronoun_gloss(head_token) {
            Some(gloss) => (gloss.to_string(), true),
            None => (lexis::noun_gloss(head_token), false),
        };
        self.advance();

        // NP coordination: "X and Y" where Y is not a new clause. Clause
        // coordination was handled before clause parsing, so a coordinator
        // here either joins NPs or precedes a verb we should not consume.
        let mut conjoined = None;
        if let Some(token) = self.peek() {
            if lexis::is_coordinator(token)
                && self
                    .peek_at(1)
                    .is_some_and(|t| !lexis::is_verbal(t) && !lexis::is_preposition(t))
            {
                let coordinator = token.to_string();
                self.advance();
                if let Some(second) = self.parse_np() {
                    conjoined = Some((coordinator, Box::new(second)));
                }
            }
        }

        Some(NounPhrase {
            head,
            adjectives,
            pronoun,
            conjoined,
        })
    }
}
