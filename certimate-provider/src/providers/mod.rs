//! Variant catalogs, one module per record kind.

pub mod access;
#[cfg(feature = "deploy")]
pub mod deploy;
#[cfg(feature = "notify")]
pub mod notify;

pub use access::{AccessConfig, AccessProvider};
#[cfg(feature = "deploy")]
pub use deploy::{DeployConfig, DeployProvider};
#[cfg(feature = "notify")]
pub use notify::{NotifyConfig, NotifyProvider};
