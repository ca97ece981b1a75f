//! Domain-based type organization
//!
//! - device: address, connection state, snapshot and settings of the switch
//! - error: device failure taxonomy
//! - config: runtime configuration from the shell
//! - assistant: chat transcript and assistant API payloads

pub mod assistant;
pub mod config;
pub mod device;
pub mod error;

pub use assistant::*;
pub use config::*;
pub use device::*;
pub use error::*;
