pub mod bridge;
pub mod config;
pub mod errors;
pub mod ffi;
pub mod https;
pub mod net;

pub use bridge::HttpBridge;
pub use config::{BridgeConfig, DEFAULT_USER_AGENT};
pub use errors::BridgeError;
