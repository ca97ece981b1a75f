use thiserror::Error;

/// Failures talking to the switch.
///
/// All variants end up either as `ConnectionState::Error` or as a save
/// failure notification; the UI never tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error("invalid device address {0:?}")]
    InvalidAddress(String),

    #[error("device did not answer in time")]
    Timeout,

    #[error("network failure: {0}")]
    Network(String),

    #[error("unexpected device response: {0}")]
    Protocol(String),

    #[error("device command {path} failed: {reason}")]
    Command { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_details() {
        assert_eq!(
            DeviceError::InvalidAddress("192.168".to_string()).to_string(),
            "invalid device address \"192.168\""
        );
        assert_eq!(
            DeviceError::Command {
                path: "/on".to_string(),
                reason: "HTTP 500".to_string()
            }
            .to_string(),
            "device command /on failed: HTTP 500"
        );
    }
}
