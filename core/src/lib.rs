//! Client-side synchronization store for a remote todo service.
//!
//! # Overview
//! `TodoStore` mirrors the server's todo list in memory: fetch on creation,
//! mutate via request, reconcile local state from the response. Views stay
//! thin; they render the store's state and invoke its operations.
//!
//! # Design
//! - `TodoClient` is stateless: each operation splits into `build_*`
//!   (produces an `HttpRequest`) and `parse_*` (consumes an `HttpResponse`),
//!   so the I/O boundary is explicit and the core stays deterministic.
//! - The [`Transport`] trait executes the round-trip; production code uses
//!   the reqwest-backed [`HttpTransport`], tests use a scripted one.
//! - Mutations are pessimistic: no item flips and no list splice happens
//!   before the server's response resolves, and the returned representation
//!   replaces the local entry wholesale.
//! - Errors come in two tiers: local validation failures never reach the
//!   network; remote failures collapse into one user-facing message with
//!   the cause logged via `tracing`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use config::ApiConfig;
pub use error::{ApiError, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{EditDraft, Filter, Status, TodoStore};
pub use transport::{HttpTransport, Transport, TransportError};
pub use types::{CreateTodo, Todo, UpdateTodo};
