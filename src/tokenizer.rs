//! Splitting raw input into word and filler tokens.
//!
//! A word token is a maximal run of Kazakh letters; everything between two
//! word tokens (punctuation, whitespace, digits, foreign letters) becomes a
//! single filler token, so the token sequence always reconstructs the input.

use serde::Serialize;

/// One contiguous slice of the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The exact text of this slice
    pub content: String,
    /// True when the slice is a run of Kazakh letters
    pub is_word: bool,
}

/// Letters of the Kazakh Cyrillic alphabet, both cases.
///
/// Covers the full Russian Cyrillic range (used by loanwords) plus the nine
/// Kazakh-specific letters. Latin letters and digits are not word characters.
fn is_kazakh_letter(c: char) -> bool {
    matches!(c,
        'а'..='я' | 'А'..='Я' | 'ё' | 'Ё'
        | 'ә' | 'Ә' | 'ғ' | 'Ғ' | 'қ' | 'Қ' | 'ң' | 'Ң'
        | 'ө' | 'Ө' | 'ұ' | 'Ұ' | 'ү' | 'Ү' | 'һ' | 'Һ' | 'і' | 'І')
}

/// Split `text` into an ordered token sequence.
///
/// Total over any input: never fails, and the concatenation of the returned
/// token contents equals `text` exactly. Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_is_word = false;

    for c in text.chars() {
        let word = is_kazakh_letter(c);
        if !run.is_empty() && word != run_is_word {
            tokens.push(Token {
                content: std::mem::take(&mut run),
                is_word: run_is_word,
            });
        }
        run.push(c);
        run_is_word = word;
    }

    if !run.is_empty() {
        tokens.push(Token {
            content: run,
            is_word: run_is_word,
        });
    }

    tokens
}
