//! Rebuilding a highlighted surface form from a decoded analysis.
//!
//! Dispatches on part of speech into the external form builder. Any
//! combination the builder cannot produce degrades to a single plain-base
//! fragment; reproduction never fails.

use crate::decoder::DetectedForm;
use crate::generator::{FormBuilder, NounForms, Phrasal, VerbForms};
use crate::grammar::{GrammarNumber, GrammarPerson, PartOfSpeech, Septik};

/// Rebuild the surface form described by `form`.
///
/// Always returns at least one fragment.
pub fn reproduce<B: FormBuilder>(builder: &B, form: &DetectedForm) -> Phrasal {
    let phrasal = dispatch(builder, form);
    if phrasal.is_empty() {
        Phrasal::of_base(&form.base)
    } else {
        phrasal
    }
}

fn dispatch<B: FormBuilder>(builder: &B, form: &DetectedForm) -> Phrasal {
    match form.part_of_speech {
        PartOfSpeech::Noun => {
            let noun = builder.build_noun(&form.base);
            let septik = form.septik.unwrap_or(Septik::Atau);
            if let Some(person) = form.person {
                let number = form.number.unwrap_or(GrammarNumber::Singular);
                noun.possessive_septik_form(person, number, septik)
            } else if form.number == Some(GrammarNumber::Plural) {
                noun.plural_septik_form(septik)
            } else {
                noun.septik_form(septik)
            }
        }
        PartOfSpeech::Pronoun => match form.septik {
            Some(septik) => builder.build_noun(&form.base).septik_form(septik),
            None => Phrasal::of_base(&form.base),
        },
        PartOfSpeech::Adjective => match form.tense.as_deref() {
            Some(tag) if !tag.is_empty() => {
                builder.build_noun(&form.base).derived_adjective(tag)
            }
            _ => Phrasal::of_base(&form.base),
        },
        PartOfSpeech::Verb => reproduce_verb(builder, form),
        PartOfSpeech::Other => Phrasal::of_base(&form.base),
    }
}

fn reproduce_verb<B: FormBuilder>(builder: &B, form: &DetectedForm) -> Phrasal {
    let verb = builder.build_verb(&form.base, form.exceptional_verb);
    let sentence_type = form.sentence_type;

    match form.tense.as_deref() {
        Some("pastParticiple") => verb.past_participle(sentence_type),
        Some("presentParticiple") => verb.present_participle(sentence_type),
        Some("futureParticiple") => verb.future_participle(sentence_type),
        Some("perfectGerund") => verb.perfect_gerund(),
        Some("continuousGerund") => verb.continuous_gerund(),
        Some("intentionGerund") => verb.intention_gerund(),
        Some(tense) => {
            let person = form.person.unwrap_or(GrammarPerson::Third);
            let number = form.number.unwrap_or(GrammarNumber::Singular);
            verb.finite_form(tense, sentence_type, person, number)
                .unwrap_or_else(|| Phrasal::of_base(&form.base))
        }
        None => Phrasal::of_base(&form.base),
    }
}
