//! Crate-level error types shared across the catalog, host, and transport layers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Request-time parameter or body validation failure.
	#[error(transparent)]
	Validation(#[from] crate::action::ValidationError),
	/// Construction-time descriptor validation failure.
	#[error(transparent)]
	Descriptor(#[from] crate::endpoint::DescriptorError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Invocation named an action the registrar never attached.
	#[error("No action named `{action}` is registered under the `{namespace}` namespace.")]
	UnknownAction {
		/// Namespace the lookup ran against.
		namespace: String,
		/// Action name supplied by the caller.
		action: String,
	},
	/// Request body could not be serialized to JSON.
	#[error("Request body could not be serialized to JSON.")]
	SerializeBody {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Endpoint answered with a non-2xx status (raised by
	/// [`TransportResponse::error_for_status`](crate::http::TransportResponse::error_for_status)).
	#[error("Endpoint returned an unexpected HTTP status {status}: {body_preview}")]
	UnexpectedStatus {
		/// HTTP status code returned by the endpoint.
		status: u16,
		/// Truncated, lossily-decoded body preview.
		body_preview: String,
	},
	/// Base URL cannot carry endpoint path segments (e.g. `mailto:`).
	#[error("Base URL cannot be extended with endpoint path segments.")]
	OpaqueBaseUrl,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
