// Realization: linearize an analyzed clause tree into target-language words.
//
// This is where the generated grammar actually bites: constituent blocks are
// ordered by the language's basic word order, core arguments take the case
// their alignment assigns, and case exponence follows the morphological type
// (separate particle, hyphenated suffix, fused suffix, or incorporation into
// the verb complex for polysynthetic languages).
//
// Every emitted word carries a gloss annotation, so the interlinear gloss
// always has exactly one line per target word.

use tonguestone_lang::{Alignment, Case, Language, MorphType, WordOrder, phonology};
use tonguestone_prng::{SeedRng, hash_seed_text};

use crate::clause::{Clause, ClauseTree, NounPhrase, PrepPhrase};
use crate::lexis;

/// One target-language word with its interlinear gloss annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealizedWord {
    pub form: String,
    /// Gloss plus role, e.g. "man.NOM (subject)".
    pub annotation: String,
}

/// Linearize a whole clause tree.
pub fn realize_tree(lang: &Language, tree: &ClauseTree) -> Vec<RealizedWord> {
    let mut out = Vec::new();
    realize_into(lang, tree, &mut out);
    out
}

fn realize_into(lang: &Language, tree: &ClauseTree, out: &mut Vec<RealizedWord>) {
    match tree {
        ClauseTree::Leaf(clause) => realize_clause(lang, clause, out),
        ClauseTree::Coordination {
            coordinator,
            left,
            right,
        } => {
            realize_into(lang, left, out);
            out.push(RealizedWord {
                form: word_form(lang, coordinator),
                annotation: format!("{coordinator} (conjunction)"),
            });
            realize_into(lang, right, out);
        }
        ClauseTree::Subordination {
            subordinator,
            main,
            dependent,
        } => {
            let sub_word = RealizedWord {
                form: word_form(lang, subordinator),
                annotation: format!("{subordinator} (subordinator)"),
            };
            // Verb-final languages front their dependent clauses.
            if lang.morphology.word_order.basic.is_verb_final() {
                out.push(sub_word);
                realize_into(lang, dependent, out);
                realize_into(lang, main, out);
            } else {
                realize_into(lang, main, out);
                out.push(sub_word);
                realize_into(lang, dependent, out);
            }
        }
    }
}

fn realize_clause(lang: &Language, clause: &Clause, out: &mut Vec<RealizedWord>) {
    let morph = &lang.morphology;
    let transitive = clause.is_transitive();

    let subject_case = subject_case_name(morph.alignment, transitive, &clause.verb);
    let object_case = object_case_name(morph.alignment);

    // Polysynthetic languages pull simple pronominal arguments into the
    // verb complex instead of spelling them as free words.
    let incorporate = morph.morph_type == MorphType::Polysynthetic;
    let subject_incorporates =
        incorporate && clause.subject.as_ref().is_some_and(is_simple_pronoun);
    let object_incorporates =
        incorporate && clause.object.as_ref().is_some_and(is_simple_pronoun);

    let mut subject_block = Vec::new();
    if !subject_incorporates {
        if let Some(np) = &clause.subject {
            realize_np(lang, np, subject_case, "subject", &mut subject_block);
        }
    }

    let mut object_block = Vec::new();
    if !object_incorporates {
        if let Some(np) = &clause.object {
            realize_np(lang, np, object_case, "object", &mut object_block);
        }
    }

    let verb_block = realize_verb(
        lang,
        clause,
        subject_incorporates.then(|| &clause.subject),
        object_incorporates.then(|| &clause.object),
    );

    let mut adjunct_block = Vec::new();
    for pp in &clause.adjuncts {
        realize_pp(lang, pp, &mut adjunct_block);
    }

    // Constituent order. Adjuncts pattern with objects: preverbal in
    // verb-final languages, clause-final otherwise.
    let blocks: [&[RealizedWord]; 4] = match morph.word_order.basic {
        WordOrder::Svo => [&subject_block, &verb_block, &object_block, &adjunct_block],
        WordOrder::Sov => [&subject_block, &object_block, &adjunct_block, &verb_block],
        WordOrder::Vso => [&verb_block, &subject_block, &object_block, &adjunct_block],
        WordOrder::Vos => [&verb_block, &object_block, &subject_block, &adjunct_block],
        WordOrder::Ovs => [&object_block, &verb_block, &subject_block, &adjunct_block],
        WordOrder::Osv => [&object_block, &subject_block, &adjunct_block, &verb_block],
    };
    for block in blocks {
        out.extend_from_slice(block);
    }
}

fn is_simple_pronoun(np: &NounPhrase) -> bool {
    np.pronoun && np.adjectives.is_empty() && np.conjoined.is_none()
}

/// The verb complex: main verb (with incorporated pronominal arguments for
/// polysynthetic languages), infinitival complement, predicate adjective.
fn realize_verb(
    lang: &Language,
    clause: &Clause,
    incorporated_subject: Option<&Option<NounPhrase>>,
    incorporated_object: Option<&Option<NounPhrase>>,
) -> Vec<RealizedWord> {
    let mut block = Vec::new();

    let mut form = word_form(lang, &clause.verb);
    let mut gloss = clause.verb.clone();
    if let Some(Some(np)) = incorporated_subject {
        form = format!("{}-{form}", word_form(lang, &np.head));
        gloss = format!("{}-{gloss}", np.head);
    }
    if let Some(Some(np)) = incorporated_object {
        form = format!("{form}-{}", word_form(lang, &np.head));
        gloss = format!("{gloss}-{}", np.head);
    }
    let role = if gloss == clause.verb {
        "verb"
    } else {
        "verb complex"
    };
    block.push(RealizedWord {
        form,
        annotation: format!("{gloss} ({role})"),
    });

    if let Some(comp) = &clause.complement_verb {
        let comp_form = word_form(lang, comp);
        let to_form = word_form(lang, "to");
        if lang.morphology.morph_type == MorphType::Isolating {
            block.push(RealizedWord {
                form: to_form,
                annotation: "to (infinitive particle)".to_string(),
            });
            block.push(RealizedWord {
                form: comp_form,
                annotation: format!("{comp} (complement verb)"),
            });
        } else {
            block.push(RealizedWord {
                form: format!("{comp_form}-{to_form}"),
                annotation: format!("{comp}.INF (complement verb)"),
            });
        }
    }

    if let Some(adj) = &clause.predicate_adjective {
        block.push(RealizedWord {
            form: word_form(lang, adj),
            annotation: format!("{adj} (predicate)"),
        });
    }

    block
}

/// Realize a noun phrase with the given case. A conjoined NP repeats the
/// role and case of the first conjunct.
fn realize_np(
    lang: &Language,
    np: &NounPhrase,
    case_name: Option<&str>,
    role: &str,
    out: &mut Vec<RealizedWord>,
) {
    for adj in &np.adjectives {
        out.push(RealizedWord {
            form: word_form(lang, adj),
            annotation: format!("{adj} (modifier)"),
        });
    }

    let head_form = word_form(lang, &np.head);
    let case = case_name.and_then(|name| lang.morphology.nominal.case_system.find(name));
    match case {
        Some(case) => mark_noun(lang, &np.head, head_form, case, role, out),
        None => out.push(RealizedWord {
            form: head_form,
            annotation: format!("{} ({role})", np.head),
        }),
    }

    if let Some((coordinator, second)) = &np.conjoined {
        out.push(RealizedWord {
            form: word_form(lang, coordinator),
            annotation: format!("{coordinator} (conjunction)"),
        });
        realize_np(lang, second, case_name, role, out);
    }
}

/// Case exponence by morphological type.
fn mark_noun(
    lang: &Language,
    gloss: &str,
    head_form: String,
    case: &Case,
    role: &str,
    out: &mut Vec<RealizedWord>,
) {
    match lang.morphology.morph_type {
        MorphType::Isolating => {
            out.push(RealizedWord {
                form: head_form,
                annotation: format!("{gloss} ({role})"),
            });
            out.push(RealizedWord {
                form: case.marker.clone(),
                annotation: format!("{} (case particle)", case.abbr),
            });
        }
        MorphType::Agglutinative | MorphType::Polysynthetic => {
            out.push(RealizedWord {
                form: format!("{head_form}-{}", case.marker),
                annotation: format!("{gloss}.{} ({role})", case.abbr),
            });
        }
        MorphType::Fusional => {
            out.push(RealizedWord {
                form: format!("{head_form}{}", case.marker),
                annotation: format!("{gloss}.{} ({role})", case.abbr),
            });
        }
    }
}

/// Prepositional adjuncts: when the language has the matching oblique case,
/// the case alone carries the meaning and no adposition surfaces. Otherwise
/// the preposition is translated as a word of its own.
fn realize_pp(lang: &Language, pp: &PrepPhrase, out: &mut Vec<RealizedWord>) {
    let case_name = preposition_case(&pp.prep);
    let has_case = case_name
        .map(|name| lang.morphology.nominal.case_system.find(name).is_some())
        .unwrap_or(false);

    if has_case {
        realize_np(lang, &pp.object, case_name, "oblique", out);
    } else {
        out.push(RealizedWord {
            form: word_form(lang, &pp.prep),
            annotation: format!("{} (adposition)", pp.prep),
        });
        realize_np(lang, &pp.object, None, "oblique", out);
    }
}

fn preposition_case(prep: &str) -> Option<&'static str> {
    match prep {
        "to" => Some("dative"),
        "from" => Some("ablative"),
        "in" | "on" | "at" => Some("locative"),
        "with" => Some("instrumental"),
        _ => None,
    }
}

fn subject_case_name(
    alignment: Alignment,
    transitive: bool,
    verb: &str,
) -> Option<&'static str> {
    match alignment {
        Alignment::NominativeAccusative => Some("nominative"),
        Alignment::ErgativeAbsolutive => Some(if transitive { "ergative" } else { "absolutive" }),
        Alignment::ActiveStative => {
            if !transitive && lexis::is_stative_verb(verb) {
                Some("patientive")
            } else {
                Some("agentive")
            }
        }
        Alignment::Tripartite => Some(if transitive { "ergative" } else { "nominative" }),
        Alignment::Neutral => None,
    }
}

fn object_case_name(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::NominativeAccusative | Alignment::Tripartite => Some("accusative"),
        Alignment::ErgativeAbsolutive => Some("absolutive"),
        Alignment::ActiveStative => Some("patientive"),
        Alignment::Neutral => None,
    }
}

/// Surface form for a gloss. Known glosses come from the lexicon; unknown
/// vocabulary gets a synthesized form seeded by the gloss and the language
/// name, so the same unknown word always renders the same way in a given
/// language.
fn word_form(lang: &Language, gloss: &str) -> String {
    if let Some(entry) = lang.lexicon.find(gloss) {
        return entry.form.clone();
    }
    let mut rng = SeedRng::new(hash_seed_text(gloss) ^ hash_seed_text(&lang.name));
    phonology::synthesize_word(&lang.phonology, &lang.phonotactics, &mut rng, 2)
}
