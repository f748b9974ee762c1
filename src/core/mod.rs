pub mod client;
pub mod request;

pub use crate::domain::model::{ApiRequest, HttpMethod, PayloadKind};
pub use crate::domain::ports::{ClientSettings, RequestHelper};
pub use crate::utils::error::Result;
