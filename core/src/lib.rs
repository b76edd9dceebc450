//! Typed blocking client for the Pelican game-server panel HTTP API.
//!
//! # Overview
//! `PelicanClient::new(base_url, token)` is the entry point. The
//! administrative API lives under `client.application()` (users, nodes,
//! servers, eggs, ...) and the user-facing API under `client.client()`
//! (account, and per-server files, backups, schedules, ...). Every
//! operation is one HTTP request and returns `Result<T, Error>`.
//!
//! # Design
//! - Requests and responses are plain data (`HttpRequest`, `HttpResponse`).
//!   `Gateway::build` is pure; the `Transport` trait performs the exchange,
//!   with `UreqTransport` as the default implementation.
//! - Non-2xx responses become `Error::Api(ApiError)`, carrying the panel's
//!   `errors` entries. Failures with no response at all are
//!   `Error::Transport`, the transport's error unchanged.
//! - Entities are unwrapped from the panel's `{object, attributes}`
//!   envelopes; paginated lists keep their pagination metadata in `Page`.
//! - DTOs are defined independently from the mock-panel crate; integration
//!   tests catch schema drift.

pub mod application;
pub mod client;
pub mod client_api;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod http;
pub mod multipart;
pub mod query;
pub mod request;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::PelicanClient;
pub use envelope::{Page, PageMeta, Pagination, PaginationLinks};
pub use error::{ApiError, Error, ErrorEntry, ErrorSource, TransportError};
pub use gateway::Gateway;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use multipart::{EncodedForm, Multipart};
pub use request::RequestConfig;
pub use transport::{Transport, UreqTransport};
