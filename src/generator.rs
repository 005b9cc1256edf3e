//! Surface of the external word-form generation collaborator.
//!
//! Building the actual affixed forms is delegated to an implementation of
//! [`FormBuilder`]; this crate only defines the capability and the
//! [`Phrasal`] value it yields, so reproduction stays testable with stubs.

use serde::Serialize;

use crate::grammar::{GrammarNumber, GrammarPerson, SentenceType, Septik};

/// Grammatical role of one fragment of a rebuilt word, used for
/// highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentKind {
    Unclassified,
    Base,
    PluralAffix,
    PossessiveAffix,
    SeptikAffix,
    TenseAffix,
    PersonalAffix,
    Negation,
    QuestionParticle,
}

/// One tagged piece of a rebuilt surface form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub text: String,
    pub kind: FragmentKind,
}

impl Fragment {
    pub fn new(text: impl Into<String>, kind: FragmentKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// An ordered sequence of tagged fragments forming one surface word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Phrasal {
    pub fragments: Vec<Fragment>,
}

impl Phrasal {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// A single untagged-base phrasal, the universal fallback.
    pub fn of_base(base: &str) -> Self {
        Self {
            fragments: vec![Fragment::new(base, FragmentKind::Base)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The plain display string, fragments joined in order.
    pub fn surface(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

/// Declension of one noun base.
pub trait NounForms {
    fn septik_form(&self, septik: Septik) -> Phrasal;
    fn plural_septik_form(&self, septik: Septik) -> Phrasal;
    fn possessive_septik_form(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        septik: Septik,
    ) -> Phrasal;
    /// Adjective derived from this base, keyed by the service's
    /// derivation tag.
    fn derived_adjective(&self, tag: &str) -> Phrasal;
}

/// Conjugation of one verb base.
pub trait VerbForms {
    fn past_participle(&self, sentence_type: SentenceType) -> Phrasal;
    fn present_participle(&self, sentence_type: SentenceType) -> Phrasal;
    fn future_participle(&self, sentence_type: SentenceType) -> Phrasal;
    fn perfect_gerund(&self) -> Phrasal;
    fn continuous_gerund(&self) -> Phrasal;
    fn intention_gerund(&self) -> Phrasal;
    /// General finite form; `None` when the tense tag is not one the
    /// builder knows.
    fn finite_form(
        &self,
        tense: &str,
        sentence_type: SentenceType,
        person: GrammarPerson,
        number: GrammarNumber,
    ) -> Option<Phrasal>;
}

/// Factory handed in by the hosting application.
pub trait FormBuilder {
    type Noun: NounForms;
    type Verb: VerbForms;

    fn build_noun(&self, base: &str) -> Self::Noun;
    fn build_verb(&self, base: &str, exceptional: bool) -> Self::Verb;
}
