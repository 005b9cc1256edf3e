//! Closed grammatical categories and the ordered tables the lookup service
//! indexes into.

use serde::Serialize;

/// Part of speech of a detected form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Adjective,
    Verb,
    Other,
}

/// Sentence type, which selects affix and particle placement in rebuilt forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceType {
    Statement,
    Negative,
    Question,
}

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GrammarPerson {
    First,
    Second,
    SecondPolite,
    Third,
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarNumber {
    Singular,
    Plural,
}

/// Kazakh noun case (septik).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Septik {
    Atau,
    Ilik,
    Barys,
    Tabys,
    Zhatys,
    Shygys,
    Komektes,
}

// Service reply indexes resolve through these tables; order is part of the
// wire contract and must not change.
const SENTENCE_TYPES: &[SentenceType] = &[
    SentenceType::Statement,
    SentenceType::Negative,
    SentenceType::Question,
];

const GRAMMAR_PERSONS: &[GrammarPerson] = &[
    GrammarPerson::First,
    GrammarPerson::Second,
    GrammarPerson::SecondPolite,
    GrammarPerson::Third,
];

const GRAMMAR_NUMBERS: &[GrammarNumber] = &[GrammarNumber::Singular, GrammarNumber::Plural];

const SEPTIKS: &[Septik] = &[
    Septik::Atau,
    Septik::Ilik,
    Septik::Barys,
    Septik::Tabys,
    Septik::Zhatys,
    Septik::Shygys,
    Septik::Komektes,
];

impl SentenceType {
    pub fn from_index(index: usize) -> Option<Self> {
        SENTENCE_TYPES.get(index).copied()
    }
}

impl GrammarPerson {
    pub fn from_index(index: usize) -> Option<Self> {
        GRAMMAR_PERSONS.get(index).copied()
    }
}

impl GrammarNumber {
    pub fn from_index(index: usize) -> Option<Self> {
        GRAMMAR_NUMBERS.get(index).copied()
    }
}

impl Septik {
    pub fn from_index(index: usize) -> Option<Self> {
        SEPTIKS.get(index).copied()
    }
}
