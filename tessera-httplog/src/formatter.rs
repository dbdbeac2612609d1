//! Message formatting, including the appended HTTP roundtrip block.

use std::fmt::Write as _;

use http::HeaderMap;

use crate::{HTTP_LOG_CHANNEL, LogEvent};

/// Turns a log event into its final message text.
pub trait MessageFormatter {
    /// Format one event.
    fn format_message(&self, event: &LogEvent) -> String;
}

/// Single-line `LEVEL [channel] message` format.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter;

impl MessageFormatter for LineFormatter {
    fn format_message(&self, event: &LogEvent) -> String {
        format!("{:5} [{}] {}", event.level, event.channel, event.message)
    }
}

/// Formatter that expands HTTP roundtrips attached to `httplogger` events.
///
/// Delegates to a base formatter and, only for events on
/// [`HTTP_LOG_CHANNEL`] carrying a roundtrip, appends a readable block with
/// the request method, URL, headers, and body, followed by the response
/// status, reason, URL, headers, and text. Events on any other channel come
/// out byte-identical to the base formatter's output.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFormatter<F = LineFormatter> {
    base: F,
}

impl HttpFormatter {
    /// Create a formatter over the default [`LineFormatter`] base.
    pub fn new() -> Self {
        Self {
            base: LineFormatter,
        }
    }
}

impl<F: MessageFormatter> HttpFormatter<F> {
    /// Create a formatter delegating to the given base.
    pub fn with_base(base: F) -> Self {
        Self { base }
    }
}

impl<F: MessageFormatter> MessageFormatter for HttpFormatter<F> {
    fn format_message(&self, event: &LogEvent) -> String {
        let mut result = self.base.format_message(event);

        if event.channel != HTTP_LOG_CHANNEL {
            return result;
        }
        let Some(response) = &event.roundtrip else {
            return result;
        };
        let request = &response.request;

        // String formatting cannot fail; the Write signature demands a Result.
        let _ = write!(
            result,
            "\n---------------- request ----------------\n\
             {method} {req_url}\n\
             {req_headers}\n\
             \n\
             {body}\n\
             ---------------- response ----------------\n\
             {status} {reason} {res_url}\n\
             {res_headers}\n\
             \n\
             {text}",
            method = request.method,
            req_url = request.url,
            req_headers = format_headers(&request.headers),
            body = request.body.as_deref().unwrap_or(""),
            status = response.status.as_u16(),
            reason = response.reason(),
            res_url = response.url,
            res_headers = format_headers(&response.headers),
            text = response.text,
        );

        result
    }
}

/// One `name: value` line per header.
fn format_headers(headers: &HeaderMap) -> String {
    let lines: Vec<String> = headers
        .iter()
        .map(|(name, value)| {
            format!("{}: {}", name, value.to_str().unwrap_or("<binary>"))
        })
        .collect();
    lines.join("\n")
}
