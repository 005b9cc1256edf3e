//! The sequential analysis driver.
//!
//! Walks a token sequence left to right with at most one lookup in flight,
//! so the breakdown accumulates deterministically in token order without a
//! reorder step.

use std::collections::HashSet;

use thiserror::Error;
use tokio::sync::watch;

use crate::config::AnalysisConfig;
use crate::decoder::{decode_all, DetectedForm};
use crate::lookup::{LookupError, WordLookup};
use crate::session::{AnalysisSession, SessionStatus};

/// Fatal analysis failures. Everything else (malformed reply entries,
/// unknown feature combinations) is absorbed where it occurs.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input contained no tokens at all
    #[error("nothing to analyze")]
    EmptyInput,

    /// A word lookup failed; the session stops where it stands
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Snapshot published after every session state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Tokens resolved so far
    pub resolved: usize,
    /// Total token count of the run
    pub total: usize,
    pub status: SessionStatus,
}

/// Drives one analysis run at a time against a [`WordLookup`] source.
pub struct Analyzer<L> {
    lookup: L,
    denied_tenses: HashSet<String>,
    session: AnalysisSession,
    progress_tx: watch::Sender<Progress>,
}

impl<L: WordLookup> Analyzer<L> {
    pub fn new(lookup: L, config: &AnalysisConfig) -> Self {
        let (progress_tx, _) = watch::channel(Progress {
            resolved: 0,
            total: 0,
            status: SessionStatus::Idle,
        });

        Self {
            lookup,
            denied_tenses: config.denied_tenses.iter().cloned().collect(),
            session: AnalysisSession::idle(),
            progress_tx,
        }
    }

    /// Run a full analysis of `text`, replacing any previous session.
    ///
    /// Calling this while a run is already in progress is a no-op. On
    /// failure the session keeps the breakdown built so far and no further
    /// lookups are issued.
    pub async fn start(&mut self, text: &str) -> Result<(), AnalysisError> {
        if self.session.status() == SessionStatus::Analyzing {
            tracing::warn!("analysis already in progress, ignoring start request");
            return Ok(());
        }

        self.session = AnalysisSession::new(text);
        if !self.session.begin() {
            self.publish_progress();
            return Err(AnalysisError::EmptyInput);
        }
        self.publish_progress();

        while let Some(query) = self.session.advance_to_word() {
            self.publish_progress();

            let response = match self.lookup.detect(&query).await {
                Ok(response) => response,
                Err(error) => {
                    tracing::warn!(word = %query, %error, "word lookup failed");
                    self.session.fail();
                    self.publish_progress();
                    return Err(error.into());
                }
            };

            let forms = self.admissible_forms(decode_all(&response.words));
            tracing::debug!(word = %query, candidates = forms.len(), "word resolved");
            self.session.resume(forms);
            self.publish_progress();
        }

        self.publish_progress();
        tracing::info!(tokens = self.session.tokens().len(), "analysis complete");
        Ok(())
    }

    /// Drop decoded forms whose tense the deployment has marked unreliable.
    fn admissible_forms(&self, forms: Vec<DetectedForm>) -> Vec<DetectedForm> {
        forms
            .into_iter()
            .filter(|form| match &form.tense {
                Some(tense) => !self.denied_tenses.contains(tense),
                None => true,
            })
            .collect()
    }

    /// The current session, for results and progress display.
    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    /// Subscribe to progress snapshots without borrowing the analyzer.
    pub fn subscribe(&self) -> watch::Receiver<Progress> {
        self.progress_tx.subscribe()
    }

    fn publish_progress(&self) {
        let (resolved, total) = self.session.progress();
        self.progress_tx.send_replace(Progress {
            resolved,
            total,
            status: self.session.status(),
        });
    }
}
