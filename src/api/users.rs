use crate::api::endpoint::Endpoint;
use crate::api::to_payload;
use crate::domain::model::{HttpMethod, PayloadKind};
use crate::domain::ports::RequestHelper;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

pub const LIST: Endpoint = Endpoint::new("users", "list", HttpMethod::Get, "/users/", PayloadKind::Query);
pub const CREATE: Endpoint = Endpoint::new("users", "create", HttpMethod::Post, "/users/", PayloadKind::Body);
pub const GET: Endpoint = Endpoint::new("users", "get", HttpMethod::Get, "/users/{id}", PayloadKind::None);
pub const UPDATE: Endpoint = Endpoint::new("users", "update", HttpMethod::Put, "/users/{id}", PayloadKind::Body);
pub const DELETE: Endpoint = Endpoint::new("users", "delete", HttpMethod::Delete, "/users/{id}", PayloadKind::None);
pub const GET_BY_PHONE: Endpoint = Endpoint::new(
    "users",
    "get-by-phone",
    HttpMethod::Get,
    "/users/phone/{phone}",
    PayloadKind::None,
);
pub const HEALTH_PROFILE: Endpoint = Endpoint::new(
    "users",
    "health-profile",
    HttpMethod::Get,
    "/users/{id}/health-profile",
    PayloadKind::None,
);

pub const ENDPOINTS: &[Endpoint] = &[LIST, CREATE, GET, UPDATE, DELETE, GET_BY_PHONE, HEALTH_PROFILE];

/// 使用者管理
pub struct UsersApi<'a, H: RequestHelper + ?Sized> {
    helper: &'a H,
}

impl<'a, H: RequestHelper + ?Sized> UsersApi<'a, H> {
    pub(crate) fn new(helper: &'a H) -> Self {
        Self { helper }
    }

    /// 取得使用者列表，`params` 原樣放進查詢字串
    pub async fn list<Q: Serialize + ?Sized>(&self, params: &Q) -> Result<Value> {
        let request = LIST.request(&[], Some(to_payload(params)?))?;
        self.helper.send(request).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        let request = CREATE.request(&[], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    pub async fn get(&self, user_id: impl Display) -> Result<Value> {
        let request = GET.request(&[&user_id], None)?;
        self.helper.send(request).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, user_id: impl Display, data: &B) -> Result<Value> {
        let request = UPDATE.request(&[&user_id], Some(to_payload(data)?))?;
        self.helper.send(request).await
    }

    pub async fn delete(&self, user_id: impl Display) -> Result<Value> {
        let request = DELETE.request(&[&user_id], None)?;
        self.helper.send(request).await
    }

    pub async fn get_by_phone(&self, phone: &str) -> Result<Value> {
        let request = GET_BY_PHONE.request(&[&phone], None)?;
        self.helper.send(request).await
    }

    /// 健康檔案：病史、過敏、慢性病與近期就診數
    pub async fn health_profile(&self, user_id: impl Display) -> Result<Value> {
        let request = HEALTH_PROFILE.request(&[&user_id], None)?;
        self.helper.send(request).await
    }
}
