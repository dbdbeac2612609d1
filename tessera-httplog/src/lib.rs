//! HTTP request/response roundtrip logging.
//!
//! Two halves, wired through a standard hook/formatter pipeline:
//!
//! - [`log_roundtrip`] is called after a response is received. It emits one
//!   debug-level [`LogEvent`] on the fixed [`HTTP_LOG_CHANNEL`] channel with
//!   the roundtrip attached as structured context, and does no formatting of
//!   its own.
//! - [`HttpFormatter`] expands that context into a readable request/response
//!   block, and leaves events from every other channel untouched.
//!
//! # Usage
//!
//! ```
//! use http::{Method, StatusCode};
//! use tessera_httplog::{
//!     HttpFormatter, RequestInfo, ResponseInfo, StderrHandler, log_roundtrip, set_handler,
//! };
//!
//! // Once, at startup: install a handler with the HTTP-aware formatter.
//! set_handler(StderrHandler::new(HttpFormatter::new()));
//!
//! // After each HTTP exchange: describe the roundtrip and hand it over.
//! let request = RequestInfo::new(Method::GET, "http://example.com".parse().unwrap());
//! let response = ResponseInfo::new(
//!     StatusCode::OK,
//!     "http://example.com".parse().unwrap(),
//!     request,
//! )
//! .with_text("ok");
//! log_roundtrip(response);
//! ```

mod event;
mod formatter;
mod roundtrip;

pub use event::{Handler, LogEvent, StderrHandler, dispatch, set_handler};
pub use formatter::{HttpFormatter, LineFormatter, MessageFormatter};
pub use roundtrip::{RequestInfo, ResponseInfo};

use log::Level;

/// Channel all HTTP roundtrip events are tagged with.
pub const HTTP_LOG_CHANNEL: &str = "httplogger";

/// Hook to call after an HTTP response is received.
///
/// Emits one debug-level event on [`HTTP_LOG_CHANNEL`] carrying the response
/// (and, through its back-reference, the request) as structured context. The
/// hook performs no formatting and never fails; with no handler installed it
/// is a no-op.
pub fn log_roundtrip(response: ResponseInfo) {
    let event = LogEvent::new(HTTP_LOG_CHANNEL, Level::Debug, "HTTP roundtrip")
        .with_roundtrip(response);
    dispatch(&event);
}
