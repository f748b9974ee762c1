use crate::api::endpoint::Endpoint;
use crate::api::to_payload;
use crate::domain::model::{HttpMethod, PayloadKind};
use crate::domain::ports::RequestHelper;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

const RESOURCE: &str = "medications";

pub const GUIDANCE: Endpoint = Endpoint::new(
    RESOURCE,
    "guidance",
    HttpMethod::Post,
    "/medications/guidance",
    PayloadKind::Body,
);
pub const REMINDERS_BY_USER: Endpoint = Endpoint::new(
    RESOURCE,
    "reminders-by-user",
    HttpMethod::Get,
    "/medications/reminders/{id}",
    PayloadKind::None,
);
pub const CREATE_REMINDER: Endpoint = Endpoint::new(
    RESOURCE,
    "create-reminder",
    HttpMethod::Post,
    "/medications/reminders",
    PayloadKind::Body,
);
pub const CHECK_INTERACTIONS: Endpoint = Endpoint::new(
    RESOURCE,
    "check-interactions",
    HttpMethod::Post,
    "/medications/interactions",
    PayloadKind::Body,
);
pub const RECORDS_BY_USER: Endpoint = Endpoint::new(
    RESOURCE,
    "records-by-user",
    HttpMethod::Get,
    "/medications/records/{id}",
    PayloadKind::None,
);
pub const PARSE_PRESCRIPTION: Endpoint = Endpoint::new(
    RESOURCE,
    "parse-prescription",
    HttpMethod::Post,
    "/medications/parse-prescription",
    PayloadKind::Body,
);
pub const INSTRUCTIONS: Endpoint = Endpoint::new(
    RESOURCE,
    "instructions",
    HttpMethod::Post,
    "/medications/instructions",
    PayloadKind::Body,
);
pub const SCHEDULE: Endpoint = Endpoint::new(
    RESOURCE,
    "schedule",
    HttpMethod::Post,
    "/medications/schedule",
    PayloadKind::Body,
);
pub const PHARMACY_GUIDANCE: Endpoint = Endpoint::new(
    RESOURCE,
    "pharmacy-guidance",
    HttpMethod::Get,
    "/medications/pharmacy-guidance/{hospital_name}",
    PayloadKind::None,
);
pub const USER_MEDICATIONS: Endpoint = Endpoint::new(
    RESOURCE,
    "user-medications",
    HttpMethod::Get,
    "/medications/user/{id}/medications",
    PayloadKind::None,
);

pub const ENDPOINTS: &[Endpoint] = &[
    GUIDANCE,
    REMINDERS_BY_USER,
    CREATE_REMINDER,
    CHECK_INTERACTIONS,
    RECORDS_BY_USER,
    PARSE_PRESCRIPTION,
    INSTRUCTIONS,
    SCHEDULE,
    PHARMACY_GUIDANCE,
    USER_MEDICATIONS,
];

/// 用藥指導與提醒
pub struct MedicationsApi<'a, H: RequestHelper + ?Sized> {
    helper: &'a H,
}

impl<'a, H: RequestHelper + ?Sized> MedicationsApi<'a, H> {
    pub(crate) fn new(helper: &'a H) -> Self {
        Self { helper }
    }

    pub async fn medication_guidance<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = GUIDANCE.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    pub async fn reminders(&self, user_id: impl Display) -> Result<Value> {
        let request = REMINDERS_BY_USER.request(&[&user_id], None)?;
        self.helper.send(request).await
    }

    pub async fn create_reminder<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = CREATE_REMINDER.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    /// 藥物交互作用檢查
    pub async fn check_interactions<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = CHECK_INTERACTIONS.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    pub async fn records(&self, user_id: impl Display) -> Result<Value> {
        let request = RECORDS_BY_USER.request(&[&user_id], None)?;
        self.helper.send(request).await
    }

    pub async fn parse_prescription<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = PARSE_PRESCRIPTION.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    pub async fn instructions<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = INSTRUCTIONS.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    /// 用藥時間表
    pub async fn schedule<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = SCHEDULE.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    /// 取藥指導，醫院名稱會被編碼成路徑片段
    pub async fn pharmacy_guidance(&self, hospital_name: &str) -> Result<Value> {
        let request = PHARMACY_GUIDANCE.request(&[&hospital_name], None)?;
        self.helper.send(request).await
    }

    pub async fn user_medications(&self, user_id: impl Display) -> Result<Value> {
        let request = USER_MEDICATIONS.request(&[&user_id], None)?;
        self.helper.send(request).await
    }
}
