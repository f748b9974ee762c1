//! REST 資源模組。每個操作都是一個 [`Endpoint`] 常數加上一個
//! 直接轉交給 request helper 的方法；這一層不檢查、不轉換、不重試。

pub mod appointments;
pub mod endpoint;
pub mod guidance;
pub mod medications;
pub mod users;

pub use appointments::AppointmentsApi;
pub use endpoint::Endpoint;
pub use guidance::GuidanceApi;
pub use medications::MedicationsApi;
pub use users::UsersApi;

use crate::utils::error::{EscortError, Result};
use serde::Serialize;
use serde_json::Value;

pub const RESOURCES: &[&str] = &["users", "appointments", "guidance", "medications"];

pub(crate) fn to_payload<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// 所有端點，依資源分組並保持宣告順序
pub fn catalog() -> impl Iterator<Item = &'static Endpoint> {
    users::ENDPOINTS
        .iter()
        .chain(appointments::ENDPOINTS)
        .chain(guidance::ENDPOINTS)
        .chain(medications::ENDPOINTS)
}

pub fn find(resource: &str, operation: &str) -> Result<&'static Endpoint> {
    catalog()
        .find(|e| e.resource == resource && e.operation == operation)
        .ok_or_else(|| EscortError::UnknownEndpoint {
            resource: resource.to_string(),
            operation: operation.to_string(),
        })
}
