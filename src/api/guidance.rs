use crate::api::endpoint::Endpoint;
use crate::api::to_payload;
use crate::domain::model::{HttpMethod, PayloadKind};
use crate::domain::ports::RequestHelper;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

const RESOURCE: &str = "guidance";

pub const SYMPTOM_ANALYSIS: Endpoint = Endpoint::new(
    RESOURCE,
    "symptom-analysis",
    HttpMethod::Post,
    "/guidance/symptom-analysis",
    PayloadKind::Body,
);
pub const PROCESS: Endpoint = Endpoint::new(RESOURCE, "process", HttpMethod::Post, "/guidance/process", PayloadKind::Body);
pub const DEPARTMENT_RECOMMEND: Endpoint = Endpoint::new(
    RESOURCE,
    "department-recommend",
    HttpMethod::Post,
    "/guidance/department-recommend",
    PayloadKind::Body,
);
pub const PREPARATION: Endpoint = Endpoint::new(
    RESOURCE,
    "preparation",
    HttpMethod::Post,
    "/guidance/preparation",
    PayloadKind::Body,
);
pub const FULL: Endpoint = Endpoint::new(
    RESOURCE,
    "full",
    HttpMethod::Get,
    "/guidance/appointment/{id}/full",
    PayloadKind::None,
);
pub const STEP: Endpoint = Endpoint::new(RESOURCE, "step", HttpMethod::Post, "/guidance/step", PayloadKind::Body);
pub const LOCATION: Endpoint = Endpoint::new(RESOURCE, "location", HttpMethod::Post, "/guidance/location", PayloadKind::Body);
pub const VOICE: Endpoint = Endpoint::new(RESOURCE, "voice", HttpMethod::Get, "/guidance/voice/{step}", PayloadKind::Query);
pub const STEPS: Endpoint = Endpoint::new(RESOURCE, "steps", HttpMethod::Get, "/guidance/steps", PayloadKind::None);
pub const COMPLETE_LOG: Endpoint = Endpoint::new(
    RESOURCE,
    "complete-log",
    HttpMethod::Put,
    "/guidance/log/{id}/complete",
    PayloadKind::None,
);
pub const HISTORY: Endpoint = Endpoint::new(
    RESOURCE,
    "history",
    HttpMethod::Get,
    "/guidance/user/{id}/history",
    PayloadKind::None,
);

pub const ENDPOINTS: &[Endpoint] = &[
    SYMPTOM_ANALYSIS,
    PROCESS,
    DEPARTMENT_RECOMMEND,
    PREPARATION,
    FULL,
    STEP,
    LOCATION,
    VOICE,
    STEPS,
    COMPLETE_LOG,
    HISTORY,
];

/// 就醫指導
pub struct GuidanceApi<'a, H: RequestHelper + ?Sized> {
    helper: &'a H,
}

impl<'a, H: RequestHelper + ?Sized> GuidanceApi<'a, H> {
    pub(crate) fn new(helper: &'a H) -> Self {
        Self { helper }
    }

    pub async fn analyze_symptom<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = SYMPTOM_ANALYSIS.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    /// 就診流程指導
    pub async fn process_guidance<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = PROCESS.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    pub async fn department_recommendation<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = DEPARTMENT_RECOMMEND.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    /// 就醫準備建議
    pub async fn preparation_advice<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = PREPARATION.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    pub async fn full_guidance(&self, appointment_id: impl Display) -> Result<Value> {
        let request = FULL.request(&[&appointment_id], None)?;
        self.helper.send(request).await
    }

    pub async fn step_guidance<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = STEP.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    /// 院內位置指引
    pub async fn location_guidance<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = LOCATION.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    /// 語音指導文字，`params` 可帶 `language`
    pub async fn voice_guidance<Q: Serialize + ?Sized>(&self, step: &str, params: &Q) -> Result<Value> {
        let request = VOICE.request(&[&step], Some(to_payload(params)?))?;
        self.helper.send(request).await
    }

    pub async fn steps(&self) -> Result<Value> {
        let request = STEPS.request(&[], None)?;
        self.helper.send(request).await
    }

    pub async fn complete_log(&self, log_id: impl Display) -> Result<Value> {
        let request = COMPLETE_LOG.request(&[&log_id], None)?;
        self.helper.send(request).await
    }

    pub async fn history(&self, user_id: impl Display) -> Result<Value> {
        let request = HISTORY.request(&[&user_id], None)?;
        self.helper.send(request).await
    }
}
