//! Domain DTOs for the dashboard API.
//!
//! # Design
//! Wire names are camelCase and identity is a server-assigned integer. For
//! each entity kind the crate exposes the record the API returns plus a
//! creation payload; the two mapped kinds (services, daily data) additionally
//! split into a client-shaped draft and the exact payload the mapper
//! produces.

mod daily;
mod kanban;
mod learning;
mod service;
mod user;

pub use daily::{DailyData, DailyDataDraft, DailyDataPayload};
pub use kanban::{CardStatus, KanbanCard, Lane, NewKanbanCard};
pub use learning::{Course, MasteryRecord, NewCourse, NewMasteryRecord};
pub use service::{Service, ServiceDraft, ServicePayload};
pub use user::{NewUser, User};
