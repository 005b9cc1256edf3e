//! The per-run analysis state machine.
//!
//! A session is a plain synchronous value: the driver advances it with
//! explicit operations and awaits the network in between, so the one-at-a-
//! time, in-order sequencing is enforced here and testable without a
//! service.

use serde::Serialize;

use crate::decoder::DetectedForm;
use crate::tokenizer::{tokenize, Token};

/// Lifecycle of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Idle,
    Analyzing,
    Done,
    Error,
}

/// One token paired with its candidate analyses.
///
/// Filler tokens and failed-to-classify words carry zero forms; ambiguous
/// words may carry several.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedPart {
    pub token: Token,
    pub detected_forms: Vec<DetectedForm>,
}

/// State of a single analysis run.
///
/// Invariants: `breakdown.len() == position` at all times, `position` only
/// grows, and nothing advances once the status is `Error`.
#[derive(Debug)]
pub struct AnalysisSession {
    tokens: Vec<Token>,
    position: usize,
    breakdown: Vec<AnalyzedPart>,
    status: SessionStatus,
}

impl AnalysisSession {
    /// Tokenize `text` into a fresh, not-yet-started session.
    pub fn new(text: &str) -> Self {
        Self {
            tokens: tokenize(text),
            position: 0,
            breakdown: Vec::new(),
            status: SessionStatus::Idle,
        }
    }

    /// An empty placeholder session, used before the first run.
    pub fn idle() -> Self {
        Self::new("")
    }

    /// Move from `Idle` to `Analyzing`.
    ///
    /// Returns false (and marks the session failed) when there is nothing
    /// to analyze.
    pub fn begin(&mut self) -> bool {
        if self.tokens.is_empty() {
            self.status = SessionStatus::Error;
            false
        } else {
            self.status = SessionStatus::Analyzing;
            true
        }
    }

    /// Advance over filler tokens and return the lookup query for the next
    /// word token, without consuming it.
    ///
    /// Filler tokens are appended to the breakdown with zero forms as they
    /// are passed. Returns `None` once every token is resolved, flipping
    /// the status to `Done`.
    pub fn advance_to_word(&mut self) -> Option<String> {
        if self.status != SessionStatus::Analyzing {
            return None;
        }

        while self.position < self.tokens.len() {
            let token = &self.tokens[self.position];
            if token.is_word {
                return Some(token.content.to_lowercase());
            }
            self.breakdown.push(AnalyzedPart {
                token: token.clone(),
                detected_forms: Vec::new(),
            });
            self.position += 1;
        }

        self.status = SessionStatus::Done;
        None
    }

    /// Consume the word token the session is waiting on, recording its
    /// decoded forms.
    pub fn resume(&mut self, detected_forms: Vec<DetectedForm>) {
        debug_assert_eq!(self.status, SessionStatus::Analyzing);
        debug_assert!(self.tokens[self.position].is_word);

        self.breakdown.push(AnalyzedPart {
            token: self.tokens[self.position].clone(),
            detected_forms,
        });
        self.position += 1;
    }

    /// Mark the run failed. The breakdown built so far stays readable.
    pub fn fail(&mut self) {
        self.status = SessionStatus::Error;
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Parts resolved so far, in token order.
    pub fn breakdown(&self) -> &[AnalyzedPart] {
        &self.breakdown
    }

    /// (resolved, total) token counts for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.position, self.tokens.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_fails_to_begin() {
        let mut session = AnalysisSession::new("");
        assert!(!session.begin());
        assert_eq!(session.status(), SessionStatus::Error);
    }

    #[test]
    fn test_filler_tokens_resolve_synchronously() {
        let mut session = AnalysisSession::new("?! ... ");
        assert!(session.begin());

        assert_eq!(session.advance_to_word(), None);
        assert_eq!(session.status(), SessionStatus::Done);
        assert_eq!(session.breakdown().len(), 1);
        assert!(session.breakdown()[0].detected_forms.is_empty());
    }

    #[test]
    fn test_word_query_is_lowercased_and_not_consumed() {
        let mut session = AnalysisSession::new("Сәлем!");
        session.begin();

        assert_eq!(session.advance_to_word().as_deref(), Some("сәлем"));
        // Still waiting on the same word until resume.
        assert_eq!(session.advance_to_word().as_deref(), Some("сәлем"));
        assert_eq!(session.status(), SessionStatus::Analyzing);

        session.resume(Vec::new());
        assert_eq!(session.advance_to_word(), None);
        assert_eq!(session.status(), SessionStatus::Done);
        assert_eq!(session.breakdown().len(), 2);
    }

    #[test]
    fn test_breakdown_length_tracks_position() {
        let mut session = AnalysisSession::new("бір, екі, үш");
        session.begin();

        while let Some(_query) = session.advance_to_word() {
            let (resolved, _) = session.progress();
            assert_eq!(session.breakdown().len(), resolved);
            session.resume(Vec::new());
        }

        let (resolved, total) = session.progress();
        assert_eq!(resolved, total);
        assert_eq!(session.breakdown().len(), 5);
        assert_eq!(session.status(), SessionStatus::Done);
    }

    #[test]
    fn test_fail_keeps_partial_breakdown() {
        let mut session = AnalysisSession::new("бір екі");
        session.begin();

        let first = session.advance_to_word();
        assert_eq!(first.as_deref(), Some("бір"));
        session.resume(Vec::new());
        session.fail();

        assert_eq!(session.status(), SessionStatus::Error);
        assert_eq!(session.breakdown().len(), 1);
        // A failed session never hands out further work.
        assert_eq!(session.advance_to_word(), None);
        assert_eq!(session.status(), SessionStatus::Error);
    }

    #[test]
    fn test_breakdown_preserves_token_order() {
        let mut session = AnalysisSession::new("Қалың қалай?");
        session.begin();

        while let Some(_query) = session.advance_to_word() {
            session.resume(Vec::new());
        }

        let contents: Vec<&str> = session
            .breakdown()
            .iter()
            .map(|p| p.token.content.as_str())
            .collect();
        assert_eq!(contents, vec!["Қалың", " ", "қалай", "?"]);
    }
}
