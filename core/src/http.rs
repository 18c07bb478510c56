//! HTTP messages as plain data.
//!
//! # Design
//! Requests and responses are described as owned plain data so that request
//! building and envelope parsing stay pure and synchronous. Only the
//! `Transport` implementation ever touches the network; everything above it
//! works on these values and is testable without a socket.
//!
//! Bodies are always JSON and the dashboard API negotiates nothing beyond
//! `Content-Type: application/json`, so the transport derives that header from
//! the presence of a body rather than carrying a header list here.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, ready for a `Transport` to execute.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// The envelope layer interprets the body; the status code only feeds
/// diagnostics when the body turns out not to be a valid envelope.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
