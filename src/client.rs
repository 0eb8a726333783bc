//! Generic client host decorated with the security namespace.
//!
//! [`Client`] owns a base URL, a pluggable [`Transport`], and the [`Namespace`] the
//! `opendistro_security` registrar builds once at construction. The host contributes what the
//! declarative catalog delegates to it (parameter validation, URL rendering, body
//! serialization, dispatch) and nothing more: no retries, no auth handshake, no response
//! parsing.

// self
use crate::{
	_prelude::*,
	endpoint::Params,
	error::TransportError,
	http::{Transport, TransportResponse},
	namespace::{
		Namespace,
		security::{self, action, param},
	},
	obs::{self, ActionOutcome, ActionSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

const NO_BODY: Option<&Value> = None;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestSecurityClient = Client<ReqwestTransport>;

/// Generic HTTP client host carrying the registered security namespace.
///
/// The registrar runs exactly once, inside [`Client::with_transport`]; afterwards the
/// namespace is immutable and shared by every accessor the client hands out. Cloning the
/// client clones `Arc` handles, not the catalog.
#[derive(Clone)]
pub struct Client<T>
where
	T: ?Sized + Transport,
{
	/// Transport used for every outbound request.
	pub transport: Arc<T>,
	/// Base URL all endpoint paths are rendered against.
	pub base_url: Url,
	security: Namespace,
}
impl<T> Client<T>
where
	T: ?Sized + Transport,
{
	/// Creates a client that reuses the caller-provided transport.
	///
	/// Runs the security registrar, so construction fails if the base URL cannot carry path
	/// segments or the catalog fails validation.
	pub fn with_transport(base_url: Url, transport: impl Into<Arc<T>>) -> Result<Self> {
		if base_url.cannot_be_a_base() {
			return Err(Error::OpaqueBaseUrl);
		}

		Ok(Self { transport: transport.into(), base_url, security: security::namespace()? })
	}

	/// Returns the accessor for the `opendistro_security` namespace.
	pub fn security(&self) -> Security<'_, T> {
		Security { client: self }
	}

	async fn dispatch(
		&self,
		name: &str,
		params: Params,
		body: Option<Vec<u8>>,
	) -> Result<TransportResponse> {
		let namespace = &self.security;
		let Some(client_action) = namespace.action(name) else {
			return Err(Error::UnknownAction {
				namespace: namespace.name().to_owned(),
				action: name.to_owned(),
			});
		};
		let span = ActionSpan::new(namespace.name(), client_action.descriptor());

		obs::record_action_outcome(name, ActionOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = client_action.prepare(&self.base_url, &params, body)?;
				let response =
					self.transport.execute(request).await.map_err(TransportError::network)?;

				Ok(response)
			})
			.await;

		match &result {
			Ok(_) => obs::record_action_outcome(name, ActionOutcome::Success),
			Err(_) => obs::record_action_outcome(name, ActionOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
	/// Creates a new client for the provided base URL.
	///
	/// The client provisions its own reqwest-backed transport so callers do not need to pass
	/// HTTP handles explicitly. Use [`Client::with_transport`] to supply a preconfigured
	/// [`ReqwestTransport`] instead.
	pub fn new(base_url: Url) -> Result<Self> {
		Self::with_transport(base_url, ReqwestTransport::default())
	}
}
impl<T> Debug for Client<T>
where
	T: ?Sized + Transport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("base_url", &self.base_url.as_str())
			.field("namespace", &self.security.name())
			.field("actions", &self.security.len())
			.finish()
	}
}

/// Accessor for the `opendistro_security` namespace, one typed method per endpoint.
///
/// Every method funnels into [`Security::invoke`], the generic invocation path hosts can use
/// directly with action-name constants and a hand-built [`Params`] map.
pub struct Security<'a, T>
where
	T: ?Sized + Transport,
{
	client: &'a Client<T>,
}
impl<T> Security<'_, T>
where
	T: ?Sized + Transport,
{
	/// Returns the registered namespace backing this accessor.
	pub fn namespace(&self) -> &Namespace {
		&self.client.security
	}

	/// Invokes a registered action by name.
	pub async fn invoke<B>(
		&self,
		name: &str,
		params: Params,
		body: Option<&B>,
	) -> Result<TransportResponse>
	where
		B: ?Sized + Serialize,
	{
		let body = body
			.map(serde_json::to_vec)
			.transpose()
			.map_err(|e| Error::SerializeBody { source: e })?;

		self.client.dispatch(name, params, body).await
	}

	/// Permissions available to the calling user.
	pub async fn restapiinfo(&self) -> Result<TransportResponse> {
		self.invoke(action::RESTAPIINFO, Params::new(), NO_BODY).await
	}

	/// Field mappings for all indices.
	pub async fn indices(&self) -> Result<TransportResponse> {
		self.invoke(action::INDICES, Params::new(), NO_BODY).await
	}

	/// Lists every instance of a security resource kind.
	pub async fn list_resource(&self, resource_name: &str) -> Result<TransportResponse> {
		let params = Params::new().with(param::RESOURCE_NAME, resource_name);

		self.invoke(action::LIST_RESOURCE, params, NO_BODY).await
	}

	/// Creates or replaces a security resource instance.
	///
	/// The backend performs no conflict detection, so the same call both creates and updates
	/// a resource.
	pub async fn save_resource<B>(
		&self,
		resource_name: &str,
		id: &str,
		body: &B,
	) -> Result<TransportResponse>
	where
		B: ?Sized + Serialize,
	{
		let params =
			Params::new().with(param::RESOURCE_NAME, resource_name).with(param::ID, id);

		self.invoke(action::SAVE_RESOURCE, params, Some(body)).await
	}

	/// Creates or replaces a security resource whose identity the backend derives from
	/// request headers.
	pub async fn save_resource_without_id<B>(
		&self,
		resource_name: &str,
		body: &B,
	) -> Result<TransportResponse>
	where
		B: ?Sized + Serialize,
	{
		let params = Params::new().with(param::RESOURCE_NAME, resource_name);

		self.invoke(action::SAVE_RESOURCE_WITHOUT_ID, params, Some(body)).await
	}

	/// Fetches a single security resource instance.
	pub async fn get_resource(&self, resource_name: &str, id: &str) -> Result<TransportResponse> {
		let params =
			Params::new().with(param::RESOURCE_NAME, resource_name).with(param::ID, id);

		self.invoke(action::GET_RESOURCE, params, NO_BODY).await
	}

	/// Deletes a single security resource instance.
	pub async fn delete_resource(
		&self,
		resource_name: &str,
		id: &str,
	) -> Result<TransportResponse> {
		let params =
			Params::new().with(param::RESOURCE_NAME, resource_name).with(param::ID, id);

		self.invoke(action::DELETE_RESOURCE, params, NO_BODY).await
	}

	/// Flushes the security configuration cache.
	pub async fn clear_cache(&self) -> Result<TransportResponse> {
		self.invoke(action::CLEAR_CACHE, Params::new(), NO_BODY).await
	}

	/// Validates a document-level-security query.
	pub async fn validate_dls<B>(&self, body: &B) -> Result<TransportResponse>
	where
		B: ?Sized + Serialize,
	{
		self.invoke(action::VALIDATE_DLS, Params::new(), Some(body)).await
	}

	/// Field mappings of one index.
	pub async fn get_index_mappings<B>(&self, index: &str, body: &B) -> Result<TransportResponse>
	where
		B: ?Sized + Serialize,
	{
		let params = Params::new().with(param::INDEX, index);

		self.invoke(action::GET_INDEX_MAPPINGS, params, Some(body)).await
	}

	/// Authentication details of the current user.
	pub async fn authinfo(&self) -> Result<TransportResponse> {
		self.invoke(action::AUTHINFO, Params::new(), NO_BODY).await
	}

	/// Multitenancy info plus dashboard server settings (tenant flags, server index, server
	/// user).
	pub async fn multitenancyinfo(&self) -> Result<TransportResponse> {
		self.invoke(action::MULTITENANCYINFO, Params::new(), NO_BODY).await
	}

	/// Tenant info of the current user.
	pub async fn tenantinfo(&self) -> Result<TransportResponse> {
		self.invoke(action::TENANTINFO, Params::new(), NO_BODY).await
	}

	/// Issues an auth token.
	pub async fn authtoken<B>(&self, body: &B) -> Result<TransportResponse>
	where
		B: ?Sized + Serialize,
	{
		self.invoke(action::AUTHTOKEN, Params::new(), Some(body)).await
	}

	/// Reads the audit log configuration.
	pub async fn get_audit(&self) -> Result<TransportResponse> {
		self.invoke(action::GET_AUDIT, Params::new(), NO_BODY).await
	}

	/// Updates the audit log configuration.
	pub async fn save_audit<B>(&self, body: &B) -> Result<TransportResponse>
	where
		B: ?Sized + Serialize,
	{
		self.invoke(action::SAVE_AUDIT, Params::new(), Some(body)).await
	}
}
impl<T> Clone for Security<'_, T>
where
	T: ?Sized + Transport,
{
	fn clone(&self) -> Self {
		*self
	}
}
impl<T> Copy for Security<'_, T> where T: ?Sized + Transport {}
impl<T> Debug for Security<'_, T>
where
	T: ?Sized + Transport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Security").field("namespace", &self.client.security.name()).finish()
	}
}
