pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod router;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ClientConfig;

pub use core::{client::EscortClient, request::HttpRequestHelper};
pub use router::{Navigator, Router};
pub use utils::error::{EscortError, Result};
