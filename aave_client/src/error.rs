use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Failure taxonomy for protocol queries. Every variant carries a stable
/// machine-readable code (see [`ClientError::code`]) so callers can branch
/// without parsing the human-readable message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Invalid Ethereum address format")]
    InvalidAddress,

    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),

    #[error("Network connection error. Please check your internet connection.")]
    Network(String),

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimit(String),

    #[error("Request timeout. Please try again.")]
    Timeout(String),

    #[error("{0}")]
    Unknown(String),
}

impl ClientError {
    /// Stable code string, distinct from the display message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAddress => "INVALID_ADDRESS",
            Self::UnsupportedNetwork(_) => "UNSUPPORTED_NETWORK",
            Self::Network(_) => "NETWORK_ERROR",
            Self::RateLimit(_) => "RATE_LIMIT",
            Self::Timeout(_) => "TIMEOUT",
            Self::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Classifies a transport-level failure by inspecting its message.
    ///
    /// Rate-limit and timeout markers are checked before the generic
    /// connection markers, so a message like "network request timed out"
    /// lands on [`ClientError::Timeout`].
    pub fn classify(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let lower = detail.to_lowercase();

        if lower.contains("invalid address") {
            Self::InvalidAddress
        } else if lower.contains("rate limit") || lower.contains("too many requests") || lower.contains("429") {
            Self::RateLimit(detail)
        } else if lower.contains("timeout") || lower.contains("timed out") {
            Self::Timeout(detail)
        } else if lower.contains("network") || lower.contains("connection") || lower.contains("dns") {
            Self::Network(detail)
        } else {
            Self::Unknown(detail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_timeout_before_network() {
        let err = ClientError::classify("network request timed out after 60s");
        assert_eq!(err.code(), "TIMEOUT");
    }

    #[test]
    fn classify_rate_limit() {
        let err = ClientError::classify("server returned 429 Too Many Requests");
        assert_eq!(err.code(), "RATE_LIMIT");
    }

    #[test]
    fn classify_connection_failure() {
        let err = ClientError::classify("error sending request: connection refused");
        assert_eq!(err.code(), "NETWORK_ERROR");
    }

    #[test]
    fn classify_falls_back_to_unknown() {
        let err = ClientError::classify("execution reverted");
        assert_eq!(err.code(), "UNKNOWN_ERROR");
        assert_eq!(err.to_string(), "execution reverted");
    }

    #[test]
    fn codes_are_distinct_from_messages() {
        let err = ClientError::UnsupportedNetwork("polygon".to_string());
        assert_eq!(err.code(), "UNSUPPORTED_NETWORK");
        assert_eq!(err.to_string(), "Unsupported network: polygon");
    }
}
