//! Host integration ports.
//!
//! An editor (or any other host) supplies the text around the cursor through
//! a [`TextSource`] and shows the outcome through a [`MessageSink`]. The
//! library stays free of any editor API.

use tracing::debug;

use crate::{token_at, verify_with_config, CheckConfig, Result, Verification};

/// Supplies the text under the user's cursor or selection.
pub trait TextSource {
    /// Text surrounding the point, and the byte offset of the point in it.
    fn text_at_point(&self) -> Option<(String, usize)>;
}

/// Displays a transient message to the user.
pub trait MessageSink {
    fn display(&mut self, message: &str);
}

/// Fixed text with a cursor offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticText {
    pub text: String,
    pub offset: usize,
}

impl StaticText {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }
}

impl TextSource for StaticText {
    fn text_at_point(&self) -> Option<(String, usize)> {
        Some((self.text.clone(), self.offset))
    }
}

/// Collects displayed messages in order.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    pub messages: Vec<String>,
}

impl MessageSink for MessageLog {
    fn display(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Verify the ISBN under the host's cursor and report it.
///
/// The sink always receives exactly one message: the summary on success, or
/// an `error:` line on failure, never a number computed from bad input.
pub fn run_at_point<S, M>(source: &S, sink: &mut M, config: &CheckConfig) -> Result<Verification>
where
    S: TextSource + ?Sized,
    M: MessageSink + ?Sized,
{
    let result = check_source(source, config);
    match &result {
        Ok(report) => sink.display(&report.summary()),
        Err(err) => sink.display(&format!("error: {err}")),
    }
    result
}

fn check_source<S: TextSource + ?Sized>(source: &S, config: &CheckConfig) -> Result<Verification> {
    let (text, offset) = source.text_at_point().unwrap_or_default();
    // Nothing ISBN-like under the cursor reads as empty input
    let token = token_at(&text, offset).map(|t| t.value).unwrap_or_default();
    debug!(offset, token = %token, "checking token at point");
    verify_with_config(&token, config)
}
