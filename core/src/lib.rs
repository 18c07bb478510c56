//! Synchronous data-access client for the pulseboard dashboard API.
//!
//! # Overview
//! The dashboard backend is a thin JSON REST surface: every endpoint answers
//! with a `{success, data|error}` envelope. This crate issues the calls,
//! unwraps the envelope, and applies one uniform failure policy: list reads
//! degrade to empty, single-record reads to absent, writes re-raise a
//! normalized error. A pure mapper shapes client-side drafts into the exact
//! field sets the API persists.
//!
//! # Design
//! - `DashboardClient` holds only the configured base path and a `Transport`.
//! - Requests and responses are plain data (`HttpRequest` / `HttpResponse`);
//!   the `Transport` trait is the single I/O seam, with a `ureq`-backed
//!   production implementation and scripted doubles in tests.
//! - The mock server is schemaless; the integration tests pin the wire shape
//!   of every entity end to end.
//! - Every call is fire-once: no caching, no retries, no pagination.

pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod mapper;
pub mod transport;
pub mod types;

pub use client::DashboardClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{
    CardStatus, Course, DailyData, DailyDataDraft, DailyDataPayload, KanbanCard, Lane,
    MasteryRecord, NewCourse, NewKanbanCard, NewMasteryRecord, NewUser, Service, ServiceDraft,
    ServicePayload, User,
};
