//! Blocking API client for the JSONPlaceholder posts and comments service.
//!
//! # Overview
//! `PostsClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `JsonPlaceholder` pairs it with a
//! `Transport` (by default a `ureq` agent with a request timeout) and exposes
//! one method per remote operation.
//!
//! # Design
//! - `PostsClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and the request/response mapping is testable with
//!   plain data.
//! - Status mapping lives in one place: 2xx succeeds, 404 on an
//!   id-addressed call is `ApiError::NotFound`, anything else is another
//!   `ApiError` variant.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod blocking;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use blocking::JsonPlaceholder;
pub use client::PostsClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, Resource};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Comment, Id, NewPost, Post, PostPatch, PostQuery};
