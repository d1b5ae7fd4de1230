pub mod chain;
pub mod config;
pub mod error;
pub mod fees;
pub mod local;
pub(crate) mod manifest;
pub mod network;
pub mod validate;
pub mod wallet;
pub use config::{Config, Manifest, NetworkAlias};
pub use error::{ConfigError, Result};
pub use network::{Network, NetworkRegistry};
