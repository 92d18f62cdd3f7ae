use thiserror::Error;
use tracing::{error, info};

use super::{ClientError, SummaryClient};
use crate::SummarizeRequest;

/// Label on the submit control while idle.
pub const SUBMIT_LABEL: &str = "要約する";
/// Label on the submit control while a request is in flight.
pub const BUSY_LABEL: &str = "要約中...";

/// Whether the form has a request in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Awaiting,
}

/// Why a submit action did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("要約するテキストを入力してください。")]
    EmptyInput,

    #[error("a summarization request is already in flight")]
    Busy,
}

/// Form state: the text box, the displayed summary, and the in-flight lock.
#[derive(Debug, Clone)]
pub struct SummaryForm {
    input: String,
    summary: String,
    state: FormState,
}

impl Default for SummaryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryForm {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            summary: String::new(),
            state: FormState::Idle,
        }
    }

    /// Replace the input text. Ignored while disabled; returns whether it was applied.
    pub fn set_input(&mut self, text: impl Into<String>) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.input = text.into();
        true
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The displayed summary or error line, if there is one.
    pub fn summary(&self) -> Option<&str> {
        if self.summary.is_empty() {
            None
        } else {
            Some(&self.summary)
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Input and submit control are both disabled while awaiting.
    pub fn is_disabled(&self) -> bool {
        self.state == FormState::Awaiting
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            FormState::Idle => SUBMIT_LABEL,
            FormState::Awaiting => BUSY_LABEL,
        }
    }

    /// Start a request: idle → awaiting. Clears the previous summary.
    pub fn submit(&mut self) -> Result<SummarizeRequest, SubmitRejected> {
        if self.is_disabled() {
            return Err(SubmitRejected::Busy);
        }
        if self.input.trim().is_empty() {
            return Err(SubmitRejected::EmptyInput);
        }

        self.state = FormState::Awaiting;
        self.summary.clear();
        Ok(SummarizeRequest::new(self.input.clone()))
    }

    /// Settle the in-flight request: awaiting → idle.
    pub fn settle(&mut self, outcome: Result<String, ClientError>) {
        self.summary = match outcome {
            Ok(summary) => {
                info!("Summarization successful: {summary}");
                summary
            }
            Err(e) => {
                error!("summarization failed: {e}");
                format!("要約中にエラーが発生しました: {e}")
            }
        };
        self.state = FormState::Idle;
    }

    /// Submit, send the request with `client`, and settle with its outcome.
    pub async fn run(&mut self, client: &SummaryClient) -> Result<(), SubmitRejected> {
        let request = self.submit()?;
        let outcome = client.summarize(&request).await;
        self.settle(outcome);
        Ok(())
    }
}
