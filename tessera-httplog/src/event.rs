//! Log events, handlers, and the installed-handler slot.

use std::sync::Arc;

use log::Level;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::{MessageFormatter, ResponseInfo};

static HANDLER: Lazy<RwLock<Option<Arc<dyn Handler>>>> = Lazy::new(|| RwLock::new(None));

/// A single log event on a named channel.
///
/// An event optionally carries an HTTP roundtrip as structured context; the
/// formatter decides whether to expand it, so the emitting side never does
/// any formatting of its own.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// Channel the event is tagged with.
    pub channel: &'static str,
    /// Event severity.
    pub level: Level,
    /// Plain message text.
    pub message: String,
    /// Attached roundtrip context, consumed by the formatter.
    pub roundtrip: Option<ResponseInfo>,
}

impl LogEvent {
    /// Create an event with no attached context.
    pub fn new(channel: &'static str, level: Level, message: impl Into<String>) -> Self {
        Self {
            channel,
            level,
            message: message.into(),
            roundtrip: None,
        }
    }

    /// Attach a roundtrip (the response plus its back-referenced request).
    pub fn with_roundtrip(mut self, response: ResponseInfo) -> Self {
        self.roundtrip = Some(response);
        self
    }
}

/// Receives formatted-or-not events; the handler owns the output side.
pub trait Handler: Send + Sync {
    /// Emit one event.
    fn emit(&self, event: &LogEvent);
}

/// Handler writing one formatted line (plus any appended blocks) to stderr.
pub struct StderrHandler<F> {
    formatter: F,
}

impl<F: MessageFormatter> StderrHandler<F> {
    /// Create a handler using the given formatter.
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }
}

impl<F: MessageFormatter + Send + Sync> Handler for StderrHandler<F> {
    fn emit(&self, event: &LogEvent) {
        eprintln!("{}", self.formatter.format_message(event));
    }
}

/// Install the process-wide handler used by [`dispatch`].
///
/// Replaces any previously installed handler.
pub fn set_handler<H: Handler + 'static>(handler: H) {
    *HANDLER.write() = Some(Arc::new(handler));
}

/// Send an event to the installed handler; a no-op when none is installed.
pub fn dispatch(event: &LogEvent) {
    let handler = HANDLER.read().clone();
    if let Some(handler) = handler {
        handler.emit(event);
    }
}
