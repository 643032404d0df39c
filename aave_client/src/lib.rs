pub mod client;
pub mod config;
pub mod contracts;
pub mod error;
pub mod models;
pub mod units;

pub use client::{build_provider, connect, validate_address, AaveV3Client};
pub use config::{NetworkConfig, SUPPORTED_NETWORKS};
pub use error::{ClientError, ClientResult};
pub use models::{TokenInfo, UserAccountData, UserPosition};
