//! Transport primitives for dispatching prepared endpoint requests.
//!
//! The module exposes [`Transport`] alongside [`TransportRequest`] and [`TransportResponse`]
//! so downstream crates can integrate custom HTTP clients. The trait is the crate's only
//! dependency on an HTTP stack: everything above it works with crate-owned request/response
//! types, and responses stay raw bytes because deserialization belongs to the caller.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::CONTENT_TYPE;
// self
use crate::{_prelude::*, endpoint::HttpMethod};

const BODY_PREVIEW_LIMIT: usize = 256;

/// Boxed future returned by [`Transport::execute`].
pub type TransportFuture<E> =
	Pin<Box<dyn Future<Output = std::result::Result<TransportResponse, E>> + Send>>;

/// Abstraction over HTTP stacks capable of executing prepared endpoint requests.
///
/// Implementations must be `Send + Sync + 'static` so a client host can share them behind
/// `Arc<T>` without additional wrappers, and the returned futures must be `Send` so dispatch
/// can hop executors. The host owns everything else: validation runs before `execute` is
/// called, and whatever the endpoint answers is surfaced verbatim.
pub trait Transport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying HTTP stack.
	type Error: 'static + Send + Sync + StdError;

	/// Executes one prepared request against the endpoint.
	fn execute(&self, request: TransportRequest) -> TransportFuture<Self::Error>;
}

/// Fully-formed request produced by [`ClientAction::prepare`](crate::action::ClientAction::prepare).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
	/// HTTP verb to issue.
	pub method: HttpMethod,
	/// Absolute URL with every placeholder substituted.
	pub url: Url,
	/// JSON payload bytes, when the invocation carries one.
	pub body: Option<Vec<u8>>,
}
impl TransportRequest {
	/// Returns the rendered path portion of the URL.
	pub fn path(&self) -> &str {
		self.url.path()
	}
}

/// Raw response surfaced to callers without any deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportResponse {
	/// HTTP status code returned by the endpoint.
	pub status: u16,
	/// Response body bytes, verbatim.
	pub body: Vec<u8>,
}
impl TransportResponse {
	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Returns the body lossily decoded as UTF-8.
	pub fn body_utf8(&self) -> std::borrow::Cow<'_, str> {
		String::from_utf8_lossy(&self.body)
	}

	/// Converts non-2xx responses into [`Error::UnexpectedStatus`] with a truncated body
	/// preview; success responses pass through unchanged.
	pub fn error_for_status(self) -> Result<Self> {
		if self.is_success() {
			Ok(self)
		} else {
			let body_preview = truncate_preview(self.body_utf8().into_owned());

			Err(Error::UnexpectedStatus { status: self.status, body_preview })
		}
	}
}

#[cfg(feature = "reqwest")]
/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Management endpoints answer directly rather than delegating to another URI; configure any
/// custom [`ReqwestClient`] to disable redirect following before handing it over.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Transport for ReqwestTransport {
	type Error = ReqwestError;

	fn execute(&self, request: TransportRequest) -> TransportFuture<Self::Error> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client.request(request.method.into(), request.url);

			if let Some(body) = request.body {
				builder = builder.header(CONTENT_TYPE, "application/json").body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(TransportResponse { status, body })
		})
	}
}
#[cfg(feature = "reqwest")]
impl From<HttpMethod> for reqwest::Method {
	fn from(method: HttpMethod) -> Self {
		match method {
			HttpMethod::Get => Self::GET,
			HttpMethod::Put => Self::PUT,
			HttpMethod::Post => Self::POST,
			HttpMethod::Delete => Self::DELETE,
		}
	}
}

fn truncate_preview(body: String) -> String {
	if body.chars().count() <= BODY_PREVIEW_LIMIT {
		return body;
	}

	let mut buf = String::new();

	for (idx, ch) in body.chars().enumerate() {
		if idx >= BODY_PREVIEW_LIMIT {
			buf.push('…');

			break;
		}
		buf.push(ch);
	}

	buf
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn error_for_status_passes_success_through() {
		let response = TransportResponse { status: 201, body: b"{\"status\":\"CREATED\"}".to_vec() };

		assert!(response.is_success());
		assert_eq!(
			response.clone().error_for_status().expect("2xx should pass through."),
			response,
		);
	}

	#[test]
	fn error_for_status_surfaces_failures_with_preview() {
		let response = TransportResponse { status: 403, body: b"no permission".to_vec() };
		let err = response.error_for_status().expect_err("403 should surface as an error.");

		assert!(matches!(
			err,
			Error::UnexpectedStatus { status: 403, ref body_preview } if body_preview == "no permission",
		));
	}

	#[test]
	fn long_previews_are_truncated() {
		let response = TransportResponse { status: 500, body: vec![b'x'; 1_024] };
		let Err(Error::UnexpectedStatus { body_preview, .. }) = response.error_for_status() else {
			panic!("500 should surface as an unexpected status.");
		};

		assert_eq!(body_preview.chars().count(), BODY_PREVIEW_LIMIT + 1);
		assert!(body_preview.ends_with('…'));
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn methods_convert_to_reqwest() {
		assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
		assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
		assert_eq!(reqwest::Method::from(HttpMethod::Post), reqwest::Method::POST);
		assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
	}
}
