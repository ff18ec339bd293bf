//! HTTP exchanges described as plain data.
//!
//! # Design
//! Requests and responses are inert values: `TodoClient` builds `HttpRequest`s
//! and interprets `HttpResponse`s without performing any I/O, and a
//! [`Transport`](crate::transport::Transport) implementation carries values of
//! these types across the network. Keeping the exchange as data makes the
//! whole state machine testable with a scripted transport.
//!
//! All fields use owned types so values can be moved freely across task
//! boundaries.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// `url` is absolute; the base URL is already folded in by the builder.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Non-2xx statuses are carried here as ordinary values; interpreting them
/// is the parser's job, not the transport's.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
