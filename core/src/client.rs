//! Dashboard API client: one method per operation, one shared failure policy.
//!
//! # Design
//! `DashboardClient` holds only the configured base path and a `Transport`.
//! Each operation builds a plain-data request, executes it through the
//! transport, and unwraps the response envelope. Failure handling is
//! concentrated in four helpers rather than repeated per call: list reads
//! degrade to an empty vector, single reads to `None`, and every mutating
//! operation normalizes the failure and re-raises it. Read paths favor
//! availability; write paths must not hide data loss. Every failure is logged
//! before it is returned or propagated.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::{BulkEnvelope, BulkRequest, Envelope};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::mapper;
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    Course, DailyData, DailyDataDraft, KanbanCard, MasteryRecord, NewCourse, NewKanbanCard,
    NewMasteryRecord, NewUser, Service, ServiceDraft, User,
};

/// Client for the dashboard REST API.
///
/// Stateless between calls: a shared client may issue independent, unordered
/// requests. Sequencing (create-then-refresh and the like) is the caller's
/// concern. Calls cannot be cancelled once issued.
pub struct DashboardClient {
    base_url: String,
    transport: Box<dyn Transport>,
}

impl DashboardClient {
    /// Client against `base_url` (the API prefix, e.g. `http://host/api`)
    /// using the production transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }

    /// Client with a caller-supplied transport, for test doubles and
    /// alternate endpoints.
    pub fn with_transport(base_url: &str, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport: Box::new(transport),
        }
    }

    // --- services ---

    pub fn list_services(&self) -> Vec<Service> {
        self.fetch_list("/services", "failed to load services")
    }

    pub fn get_service(&self, id: i64) -> Option<Service> {
        self.fetch_one(&format!("/services/{id}"), "service not found")
    }

    pub fn create_service(&self, draft: &ServiceDraft) -> Result<Service, ApiError> {
        let payload = mapper::service_payload(draft);
        self.send(
            HttpMethod::Post,
            "/services",
            &payload,
            "failed to create service",
        )
    }

    pub fn update_service(&self, id: i64, draft: &ServiceDraft) -> Result<Service, ApiError> {
        let payload = mapper::service_payload(draft);
        self.send(
            HttpMethod::Put,
            &format!("/services/{id}"),
            &payload,
            "failed to update service",
        )
    }

    pub fn delete_service(&self, id: i64) -> Result<bool, ApiError> {
        self.send_delete(&format!("/services/{id}"), "failed to delete service")
    }

    // --- daily data ---

    pub fn list_daily_data(&self) -> Vec<DailyData> {
        self.fetch_list("/daily-data", "failed to load daily data")
    }

    pub fn get_daily_data(&self, id: i64) -> Option<DailyData> {
        self.fetch_one(&format!("/daily-data/{id}"), "daily data not found")
    }

    /// Create one daily record owned by `service_id`. The mapper injects the
    /// owning reference, overriding any on the draft.
    pub fn create_daily_data(
        &self,
        service_id: i64,
        draft: &DailyDataDraft,
    ) -> Result<DailyData, ApiError> {
        let payload = mapper::daily_payload(draft, service_id);
        self.send(
            HttpMethod::Post,
            "/daily-data",
            &payload,
            "failed to create daily data",
        )
    }

    pub fn update_daily_data(
        &self,
        id: i64,
        service_id: i64,
        draft: &DailyDataDraft,
    ) -> Result<DailyData, ApiError> {
        let payload = mapper::daily_payload(draft, service_id);
        self.send(
            HttpMethod::Put,
            &format!("/daily-data/{id}"),
            &payload,
            "failed to update daily data",
        )
    }

    pub fn delete_daily_data(&self, id: i64) -> Result<bool, ApiError> {
        self.send_delete(&format!("/daily-data/{id}"), "failed to delete daily data")
    }

    /// Insert or update a batch of daily records in one request. Succeeds or
    /// fails as a unit; on success returns the server's record count.
    pub fn bulk_upsert_daily_data(
        &self,
        service_id: i64,
        drafts: &[DailyDataDraft],
    ) -> Result<u64, ApiError> {
        const FALLBACK: &str = "failed to bulk upsert daily data";
        let payload = BulkRequest {
            data: drafts
                .iter()
                .map(|draft| mapper::daily_payload(draft, service_id))
                .collect(),
        };
        let body = match serde_json::to_string(&payload) {
            Ok(body) => body,
            Err(e) => {
                let err = ApiError::Serialization(e.to_string());
                tracing::warn!(error = %err, "bulk upsert not sent");
                return Err(err);
            }
        };
        let request = HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/daily-data/bulk", self.base_url),
            body: Some(body),
        };
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| BulkEnvelope::parse(&response))
            .and_then(|envelope| envelope.into_count(FALLBACK));
        if let Err(err) = &result {
            tracing::warn!(path = %request.path, error = %err, "bulk upsert failed");
        }
        result
    }

    // --- users ---

    pub fn list_users(&self) -> Vec<User> {
        self.fetch_list("/users", "failed to load users")
    }

    pub fn get_user(&self, id: i64) -> Option<User> {
        self.fetch_one(&format!("/users/{id}"), "user not found")
    }

    pub fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.send(HttpMethod::Post, "/users", user, "failed to create user")
    }

    pub fn update_user(&self, id: i64, user: &NewUser) -> Result<User, ApiError> {
        self.send(
            HttpMethod::Put,
            &format!("/users/{id}"),
            user,
            "failed to update user",
        )
    }

    pub fn delete_user(&self, id: i64) -> Result<bool, ApiError> {
        self.send_delete(&format!("/users/{id}"), "failed to delete user")
    }

    // --- mastery ---

    pub fn list_mastery(&self) -> Vec<MasteryRecord> {
        self.fetch_list("/mastery", "failed to load mastery records")
    }

    pub fn get_mastery(&self, id: i64) -> Option<MasteryRecord> {
        self.fetch_one(&format!("/mastery/{id}"), "mastery record not found")
    }

    pub fn create_mastery(&self, record: &NewMasteryRecord) -> Result<MasteryRecord, ApiError> {
        self.send(
            HttpMethod::Post,
            "/mastery",
            record,
            "failed to create mastery record",
        )
    }

    pub fn update_mastery(
        &self,
        id: i64,
        record: &NewMasteryRecord,
    ) -> Result<MasteryRecord, ApiError> {
        self.send(
            HttpMethod::Put,
            &format!("/mastery/{id}"),
            record,
            "failed to update mastery record",
        )
    }

    pub fn delete_mastery(&self, id: i64) -> Result<bool, ApiError> {
        self.send_delete(&format!("/mastery/{id}"), "failed to delete mastery record")
    }

    // --- courses ---

    pub fn list_courses(&self) -> Vec<Course> {
        self.fetch_list("/courses", "failed to load courses")
    }

    pub fn get_course(&self, id: i64) -> Option<Course> {
        self.fetch_one(&format!("/courses/{id}"), "course not found")
    }

    pub fn create_course(&self, course: &NewCourse) -> Result<Course, ApiError> {
        self.send(
            HttpMethod::Post,
            "/courses",
            course,
            "failed to create course",
        )
    }

    pub fn update_course(&self, id: i64, course: &NewCourse) -> Result<Course, ApiError> {
        self.send(
            HttpMethod::Put,
            &format!("/courses/{id}"),
            course,
            "failed to update course",
        )
    }

    pub fn delete_course(&self, id: i64) -> Result<bool, ApiError> {
        self.send_delete(&format!("/courses/{id}"), "failed to delete course")
    }

    // --- kanban ---

    pub fn list_kanban_cards(&self) -> Vec<KanbanCard> {
        self.fetch_list("/kanban", "failed to load kanban cards")
    }

    pub fn get_kanban_card(&self, id: i64) -> Option<KanbanCard> {
        self.fetch_one(&format!("/kanban/{id}"), "kanban card not found")
    }

    pub fn create_kanban_card(&self, card: &NewKanbanCard) -> Result<KanbanCard, ApiError> {
        self.send(
            HttpMethod::Post,
            "/kanban",
            card,
            "failed to create kanban card",
        )
    }

    pub fn update_kanban_card(
        &self,
        id: i64,
        card: &NewKanbanCard,
    ) -> Result<KanbanCard, ApiError> {
        self.send(
            HttpMethod::Put,
            &format!("/kanban/{id}"),
            card,
            "failed to update kanban card",
        )
    }

    pub fn delete_kanban_card(&self, id: i64) -> Result<bool, ApiError> {
        self.send_delete(&format!("/kanban/{id}"), "failed to delete kanban card")
    }

    // --- execute-and-normalize helpers ---

    fn get_request(&self, sub_path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{sub_path}", self.base_url),
            body: None,
        }
    }

    fn round_trip<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response: HttpResponse = self.transport.execute(request)?;
        Envelope::<T>::parse(&response)?.into_result(fallback)
    }

    /// List read: any failure degrades to an empty vector.
    fn fetch_list<T: DeserializeOwned>(&self, sub_path: &str, fallback: &str) -> Vec<T> {
        let request = self.get_request(sub_path);
        match self.round_trip(&request, fallback) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(path = %request.path, error = %err, "list read failed, showing empty");
                Vec::new()
            }
        }
    }

    /// Single read: any failure degrades to an absent result.
    fn fetch_one<T: DeserializeOwned>(&self, sub_path: &str, fallback: &str) -> Option<T> {
        let request = self.get_request(sub_path);
        match self.round_trip(&request, fallback) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(path = %request.path, error = %err, "lookup failed, showing absent");
                None
            }
        }
    }

    /// Write: normalize the failure, log it, re-raise.
    fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        sub_path: &str,
        payload: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let body = match serde_json::to_string(payload) {
            Ok(body) => body,
            Err(e) => {
                let err = ApiError::Serialization(e.to_string());
                tracing::warn!(error = %err, "write not sent");
                return Err(err);
            }
        };
        let request = HttpRequest {
            method,
            path: format!("{}{sub_path}", self.base_url),
            body: Some(body),
        };
        self.round_trip(&request, fallback).map_err(|err| {
            tracing::warn!(path = %request.path, error = %err, "write failed");
            err
        })
    }

    fn send_delete(&self, sub_path: &str, fallback: &str) -> Result<bool, ApiError> {
        let request = HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}{sub_path}", self.base_url),
            body: None,
        };
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| Envelope::<bool>::parse(&response))
            .and_then(|envelope| envelope.into_flag(fallback));
        if let Err(err) = &result {
            tracing::warn!(path = %request.path, error = %err, "delete failed");
        }
        result
    }
}
