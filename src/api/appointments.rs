use crate::api::endpoint::Endpoint;
use crate::api::to_payload;
use crate::domain::model::{HttpMethod, PayloadKind};
use crate::domain::ports::RequestHelper;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

const RESOURCE: &str = "appointments";

pub const LIST_BY_USER: Endpoint = Endpoint::new(
    RESOURCE,
    "list-by-user",
    HttpMethod::Get,
    "/appointments/user/{id}",
    PayloadKind::None,
);
pub const CREATE: Endpoint = Endpoint::new(RESOURCE, "create", HttpMethod::Post, "/appointments/", PayloadKind::Body);
pub const GET: Endpoint = Endpoint::new(RESOURCE, "get", HttpMethod::Get, "/appointments/{id}", PayloadKind::None);
pub const UPDATE: Endpoint = Endpoint::new(RESOURCE, "update", HttpMethod::Put, "/appointments/{id}", PayloadKind::Body);
pub const CANCEL: Endpoint = Endpoint::new(
    RESOURCE,
    "cancel",
    HttpMethod::Put,
    "/appointments/{id}/cancel",
    PayloadKind::None,
);
pub const RECOMMEND: Endpoint = Endpoint::new(
    RESOURCE,
    "recommend",
    HttpMethod::Post,
    "/appointments/recommend",
    PayloadKind::Body,
);
pub const ANALYZE_SYMPTOMS: Endpoint = Endpoint::new(
    RESOURCE,
    "analyze-symptoms",
    HttpMethod::Post,
    "/appointments/analyze-symptoms",
    PayloadKind::Body,
);
pub const SEARCH_HOSPITALS: Endpoint = Endpoint::new(
    RESOURCE,
    "search-hospitals",
    HttpMethod::Get,
    "/appointments/hospitals",
    PayloadKind::Query,
);
pub const AVAILABLE_SLOTS: Endpoint = Endpoint::new(
    RESOURCE,
    "available-slots",
    HttpMethod::Get,
    "/appointments/hospitals/{hospital_id}/slots",
    PayloadKind::Query,
);
pub const LIST_USER_APPOINTMENTS: Endpoint = Endpoint::new(
    RESOURCE,
    "list-user-appointments",
    HttpMethod::Get,
    "/appointments/user/{id}/appointments",
    PayloadKind::Query,
);
pub const STATUS: Endpoint = Endpoint::new(
    RESOURCE,
    "status",
    HttpMethod::Get,
    "/appointments/{id}/status",
    PayloadKind::None,
);

pub const ENDPOINTS: &[Endpoint] = &[
    LIST_BY_USER,
    CREATE,
    GET,
    UPDATE,
    CANCEL,
    RECOMMEND,
    ANALYZE_SYMPTOMS,
    SEARCH_HOSPITALS,
    AVAILABLE_SLOTS,
    LIST_USER_APPOINTMENTS,
    STATUS,
];

/// 預約掛號
pub struct AppointmentsApi<'a, H: RequestHelper + ?Sized> {
    helper: &'a H,
}

impl<'a, H: RequestHelper + ?Sized> AppointmentsApi<'a, H> {
    pub(crate) fn new(helper: &'a H) -> Self {
        Self { helper }
    }

    pub async fn list_by_user(&self, user_id: impl Display) -> Result<Value> {
        let request = LIST_BY_USER.request(&[&user_id], None)?;
        self.helper.send(request).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = CREATE.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    pub async fn get(&self, appointment_id: impl Display) -> Result<Value> {
        let request = GET.request(&[&appointment_id], None)?;
        self.helper.send(request).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, appointment_id: impl Display, data: &B) -> Result<Value> {
        let request = UPDATE.request(&[&appointment_id], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    /// 取消預約，不帶主體
    pub async fn cancel(&self, appointment_id: impl Display) -> Result<Value> {
        let request = CANCEL.request(&[&appointment_id], None)?;
        self.helper.send(request).await
    }

    /// 智能預約推薦
    pub async fn recommend<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = RECOMMEND.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    pub async fn analyze_symptoms<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = ANALYZE_SYMPTOMS.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    /// `params` 例如 `{"location": "北京", "department": "心内科"}`
    pub async fn search_hospitals<Q: Serialize + ?Sized>(&self, params: &Q) -> Result<Value> {
        let request = SEARCH_HOSPITALS.request(&[], Some(to_payload(params)?))?;
        self.helper.send(request).await
    }

    pub async fn available_slots<Q: Serialize + ?Sized>(&self, hospital_id: &str, params: &Q) -> Result<Value> {
        let request = AVAILABLE_SLOTS.request(&[&hospital_id], Some(to_payload(params)?))?;
        self.helper.send(request).await
    }

    pub async fn list_user_appointments<Q: Serialize + ?Sized>(
        &self,
        user_id: impl Display,
        params: &Q,
    ) -> Result<Value> {
        let request = LIST_USER_APPOINTMENTS.request(&[&user_id], Some(to_payload(params)?))?;
        self.helper.send(request).await
    }

    pub async fn status(&self, appointment_id: impl Display) -> Result<Value> {
        let request = STATUS.request(&[&appointment_id], None)?;
        self.helper.send(request).await
    }
}
