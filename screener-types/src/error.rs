use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the screener workspace.
///
/// Variants split into two groups. Provider-reported conditions (`Http`,
/// `RateLimited`, `Provider`) are "soft": the orchestrator turns them into
/// report warnings next to an empty result. Everything else aborts the
/// current operation and is returned to the caller.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScreenerError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "search").
        capability: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("{capability} request failed with HTTP status {status}")]
    Http {
        /// Capability label of the failed request.
        capability: String,
        /// HTTP status code returned by the provider.
        status: u16,
    },

    /// The provider throttled the request and replied with an informational notice.
    #[error("provider rate limit: {message}")]
    RateLimited {
        /// Notice text returned by the provider.
        message: String,
    },

    /// The provider rejected the request with an explicit error message.
    #[error("provider error: {message}")]
    Provider {
        /// Error text returned by the provider.
        message: String,
    },

    /// The request could not be sent or the response body could not be read.
    #[error("transport error: {message}")]
    Transport {
        /// Human-readable description of the transport failure.
        message: String,
    },

    /// Issues with the returned or expected data (malformed JSON, missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an opaque error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },
}

impl ScreenerError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build an `Http` error for a capability and status code.
    #[must_use]
    pub fn http(capability: impl Into<String>, status: u16) -> Self {
        Self::Http {
            capability: capability.into(),
            status,
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Transport` error from any displayable failure.
    pub fn transport(err: impl core::fmt::Display) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Whether this error is reported to the user as a warning rather than
    /// aborting the operation.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::RateLimited { .. } | Self::Provider { .. }
        )
    }

    /// HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
