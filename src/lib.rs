//! Typed catalog of the OpenDistro Security management REST API—declarative endpoint
//! descriptors, a one-shot namespace registrar, and a transport-agnostic client host in one
//! crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod action;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod namespace;
pub mod obs;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{client::Client, http::ReqwestTransport};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = Client<ReqwestTransport>;

	/// Builds a client rooted at the provided base URL with the default reqwest transport.
	pub fn build_reqwest_test_client(base_url: &str) -> ReqwestTestClient {
		let base = Url::parse(base_url).expect("Failed to parse test base URL.");

		Client::with_transport(base, ReqwestTransport::default())
			.expect("Failed to build reqwest test client.")
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {httpmock as _, tokio as _};
