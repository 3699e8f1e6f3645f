pub mod state;

pub use state::{CopyFeedback, RequestState, COPY_FEEDBACK_WINDOW};

use crate::{
    models::{StockAnalysisResult, StockInput},
    report,
    services::{AnalysisApi, AnalysisError, ClipboardService},
    utils::{default_analysis_date, log_request_transition, Logger},
};
use std::sync::Arc;

/// Handle identifying one issued request. Outcomes carrying a superseded
/// token are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Owns the lifecycle of one analysis request: idle → loading →
/// (result | error), plus the clipboard export of the current result.
///
/// Starting a new request always clears the previous result or error, and
/// only the latest issued request may settle the state: responses of
/// superseded requests resolve into no-ops instead of overwriting newer
/// data.
pub struct AnalysisOrchestrator {
    service: Arc<dyn AnalysisApi>,
    clipboard: ClipboardService,
    state: RequestState,
    copy_feedback: CopyFeedback,
    latest_token: u64,
    selected_emiten: Option<String>,
    logger: Logger,
}

impl AnalysisOrchestrator {
    pub fn new(service: Arc<dyn AnalysisApi>) -> Self {
        Self {
            service,
            clipboard: ClipboardService::new(),
            state: RequestState::Idle,
            copy_feedback: CopyFeedback::default(),
            latest_token: 0,
            selected_emiten: None,
            logger: Logger::new("ORCHESTRATOR"),
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.copy_feedback
    }

    /// Synchronously enter `Loading` and issue a fresh request token.
    ///
    /// Clears any previous result or error; a request still in flight is
    /// superseded and its eventual outcome will be discarded.
    pub fn begin_request(&mut self, input: &StockInput) -> RequestToken {
        self.latest_token += 1;
        log_request_transition(
            self.state.name(),
            "LOADING",
            &format!("submit #{} for {}", self.latest_token, input.emiten),
        );
        self.state = RequestState::Loading;
        RequestToken(self.latest_token)
    }

    /// Apply a request outcome. Returns `false` when the token has been
    /// superseded, in which case the state is left untouched.
    ///
    /// For the latest token this always replaces `Loading` with a terminal
    /// variant; no outcome path can leave the loading state behind.
    pub fn apply_outcome(
        &mut self,
        token: RequestToken,
        outcome: Result<StockAnalysisResult, AnalysisError>,
    ) -> bool {
        if token.0 != self.latest_token {
            self.logger.debug(&format!(
                "Discarding stale outcome of request #{} (latest is #{})",
                token.0, self.latest_token
            ));
            return false;
        }

        let next = match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(error) => RequestState::Failed(error.to_string()),
        };
        log_request_transition(
            self.state.name(),
            next.name(),
            &format!("request #{} settled", token.0),
        );
        self.state = next;
        true
    }

    /// Run one full request cycle against the analysis service.
    ///
    /// The `emiten` is expected to be non-empty; the input form (or the CLI
    /// standing in for it) enforces that upstream.
    pub async fn submit(&mut self, input: StockInput) -> &RequestState {
        let token = self.begin_request(&input);
        let outcome = self.service.analyze(&input).await;
        self.apply_outcome(token, outcome);
        &self.state
    }

    /// React to an externally supplied ticker selection.
    ///
    /// A new non-`None` ticker distinct from the previous selection starts
    /// an analysis over the default date (today, both ends of the range);
    /// `None` or a repeated identical ticker does nothing.
    pub async fn select_ticker(&mut self, ticker: Option<&str>) -> &RequestState {
        match ticker {
            Some(emiten) if self.selected_emiten.as_deref() != Some(emiten) => {
                self.selected_emiten = Some(emiten.to_string());
                let date = default_analysis_date();
                self.submit(StockInput::for_date(emiten, &date)).await
            }
            _ => &self.state,
        }
    }

    /// Serialize the current result and push it to the system clipboard.
    ///
    /// Gated on a present result. Returns whether the write succeeded and
    /// arms the copy-feedback window on success; a clipboard failure is
    /// logged and otherwise swallowed, leaving request state untouched.
    pub fn copy_report(&mut self) -> bool {
        let text = match self.state.result() {
            Some(result) => report::serialize(result),
            None => return false,
        };

        match self.clipboard.write(&text) {
            Ok(()) => {
                self.copy_feedback.mark_copied();
                true
            }
            Err(error) => {
                self.logger
                    .warn(&format!("Clipboard write failed: {}", error));
                false
            }
        }
    }
}
