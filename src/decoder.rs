//! Decoding the lookup service's compact per-word replies.
//!
//! Each reply entry carries the dictionary form, a part-of-speech tag and a
//! colon-delimited `transition` string encoding the grammatical features of
//! the surface form. Decoding is pure: malformed entries are dropped, never
//! raised.

use serde::{Deserialize, Serialize};

use crate::grammar::{GrammarNumber, GrammarPerson, PartOfSpeech, SentenceType, Septik};

/// Reply body of `GET /detect`.
///
/// A missing `words` key means the service found no candidate forms, which
/// is a valid empty result rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectResponse {
    #[serde(default)]
    pub words: Vec<RawWord>,
}

/// One candidate analysis as sent by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWord {
    /// Dictionary (base) form
    pub initial: String,
    pub meta: RawMeta,
    /// Colon-delimited feature indexes, see [`decode`]
    pub transition: String,
    /// Irregular conjugation marker
    #[serde(default)]
    pub exceptional: bool,
    #[serde(default, rename = "ruGlosses")]
    pub ru_glosses: Vec<String>,
    #[serde(default, rename = "enGlosses")]
    pub en_glosses: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMeta {
    pub pos: String,
}

/// Translations of the base form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Glosses {
    pub ru: Vec<String>,
    pub en: Vec<String>,
}

/// One decoded candidate analysis of a word token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedForm {
    pub part_of_speech: PartOfSpeech,
    /// Dictionary form the surface word was traced back to
    pub base: String,
    pub sentence_type: SentenceType,
    pub exceptional_verb: bool,
    /// Tense tag for verbs; derivation tag for adjectives
    pub tense: Option<String>,
    pub person: Option<GrammarPerson>,
    pub number: Option<GrammarNumber>,
    /// Noun case, present only on nominal forms
    pub septik: Option<Septik>,
    pub glosses: Glosses,
}

/// An index field decodes to its table entry; empty, non-numeric or
/// out-of-range fields decode to absent.
fn parse_index(field: &str) -> Option<usize> {
    field.parse::<usize>().ok()
}

/// Decode one reply entry into a [`DetectedForm`].
///
/// Returns `None` when the entry is unusable: empty dictionary form, empty
/// part-of-speech tag, or a `transition` that is not 4 fields
/// (`sentenceType:tense:person:number`, verbs) or 5 (plus `septik`,
/// nominal forms).
pub fn decode(raw: &RawWord) -> Option<DetectedForm> {
    if raw.initial.is_empty() {
        return None;
    }

    // The service tags irregular verbs "w" instead of "v".
    let (part_of_speech, reclassified) = match raw.meta.pos.as_str() {
        "" => return None,
        "n" => (PartOfSpeech::Noun, false),
        "v" => (PartOfSpeech::Verb, false),
        "w" => (PartOfSpeech::Verb, true),
        "p" | "pro" => (PartOfSpeech::Pronoun, false),
        "a" | "adj" => (PartOfSpeech::Adjective, false),
        _ => (PartOfSpeech::Other, false),
    };

    let fields: Vec<&str> = raw.transition.split(':').collect();
    let septik_field = match fields.len() {
        4 => None,
        5 => Some(fields[4]),
        _ => return None,
    };

    let sentence_type = parse_index(fields[0])
        .and_then(SentenceType::from_index)
        .unwrap_or(SentenceType::Statement);
    let tense = (!fields[1].is_empty()).then(|| fields[1].to_string());
    let person = parse_index(fields[2]).and_then(GrammarPerson::from_index);
    let number = parse_index(fields[3]).and_then(GrammarNumber::from_index);
    let septik = septik_field.and_then(parse_index).and_then(Septik::from_index);

    Some(DetectedForm {
        part_of_speech,
        base: raw.initial.clone(),
        sentence_type,
        exceptional_verb: reclassified || raw.exceptional,
        tense,
        person,
        number,
        septik,
        glosses: Glosses {
            ru: raw.ru_glosses.clone(),
            en: raw.en_glosses.clone(),
        },
    })
}

/// Decode every entry, silently dropping the unusable ones.
///
/// Output order matches input order and the result is never longer than the
/// input; this function never panics.
pub fn decode_all(raws: &[RawWord]) -> Vec<DetectedForm> {
    raws.iter().filter_map(decode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(pos: &str, transition: &str) -> RawWord {
        RawWord {
            initial: "бару".to_string(),
            meta: RawMeta { pos: pos.to_string() },
            transition: transition.to_string(),
            exceptional: false,
            ru_glosses: vec![],
            en_glosses: vec![],
        }
    }

    #[test]
    fn test_four_field_transition_never_has_septik() {
        let form = decode(&raw("v", "0:past:0:0")).unwrap();

        assert_eq!(form.part_of_speech, PartOfSpeech::Verb);
        assert_eq!(form.sentence_type, SentenceType::Statement);
        assert_eq!(form.tense.as_deref(), Some("past"));
        assert_eq!(form.person, Some(GrammarPerson::First));
        assert_eq!(form.number, Some(GrammarNumber::Singular));
        assert_eq!(form.septik, None);
    }

    #[test]
    fn test_five_field_transition_decodes_all_features() {
        let form = decode(&raw("n", "1::3:1:2")).unwrap();

        assert_eq!(form.part_of_speech, PartOfSpeech::Noun);
        assert_eq!(form.sentence_type, SentenceType::Negative);
        assert_eq!(form.tense, None);
        assert_eq!(form.person, Some(GrammarPerson::Third));
        assert_eq!(form.number, Some(GrammarNumber::Plural));
        assert_eq!(form.septik, Some(Septik::Barys));
    }

    #[test]
    fn test_wrong_field_count_is_dropped() {
        assert_eq!(decode(&raw("v", "")), None);
        assert_eq!(decode(&raw("v", "0:past:0")), None);
        assert_eq!(decode(&raw("n", "0::0:0:0:0")), None);
    }

    #[test]
    fn test_out_of_range_and_garbage_indexes_decode_to_absent() {
        let form = decode(&raw("n", "9:x:17:abc:42")).unwrap();

        // Absent sentence type falls back to Statement; the rest stay unset.
        assert_eq!(form.sentence_type, SentenceType::Statement);
        assert_eq!(form.tense.as_deref(), Some("x"));
        assert_eq!(form.person, None);
        assert_eq!(form.number, None);
        assert_eq!(form.septik, None);
    }

    #[test]
    fn test_exceptional_verb_tag_reclassifies() {
        let form = decode(&raw("w", "2:presentTransitive:1:0")).unwrap();

        assert_eq!(form.part_of_speech, PartOfSpeech::Verb);
        assert!(form.exceptional_verb);
        assert_eq!(form.sentence_type, SentenceType::Question);
    }

    #[test]
    fn test_exceptional_flag_marks_verb() {
        let mut entry = raw("v", "0:past:0:0");
        entry.exceptional = true;
        assert!(decode(&entry).unwrap().exceptional_verb);
    }

    #[test]
    fn test_empty_initial_or_pos_is_dropped() {
        let mut entry = raw("v", "0:past:0:0");
        entry.initial = String::new();
        assert_eq!(decode(&entry), None);

        assert_eq!(decode(&raw("", "0:past:0:0")), None);
    }

    #[test]
    fn test_unknown_pos_maps_to_other() {
        let form = decode(&raw("adv", "0::0:0")).unwrap();
        assert_eq!(form.part_of_speech, PartOfSpeech::Other);
    }

    #[test]
    fn test_decode_all_drops_without_reordering() {
        let entries = vec![
            raw("v", "0:past:0:0"),
            raw("v", "broken"),
            raw("n", "0::3:0:0"),
        ];

        let forms = decode_all(&entries);

        assert_eq!(forms.len(), 2);
        assert_eq!(forms[0].part_of_speech, PartOfSpeech::Verb);
        assert_eq!(forms[1].part_of_speech, PartOfSpeech::Noun);
    }

    #[test]
    fn test_response_without_words_key() {
        let response: DetectResponse = serde_json::from_str("{}").unwrap();
        assert!(response.words.is_empty());
    }

    #[test]
    fn test_wire_format_deserializes() {
        let body = r#"{
            "words": [{
                "initial": "кітап",
                "meta": {"pos": "n"},
                "transition": "0::3:1:4",
                "ruGlosses": ["книга"],
                "enGlosses": ["book"]
            }]
        }"#;

        let response: DetectResponse = serde_json::from_str(body).unwrap();
        let forms = decode_all(&response.words);

        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].base, "кітап");
        assert_eq!(forms[0].septik, Some(Septik::Zhatys));
        assert_eq!(forms[0].glosses.ru, vec!["книга".to_string()]);
        assert_eq!(forms[0].glosses.en, vec!["book".to_string()]);
    }
}
