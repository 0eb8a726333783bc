//! The `opendistro_security` registrar.
//!
//! Declares the security management endpoint catalog and registers one callable action per
//! descriptor. The catalog is configuration, not behavior: parameter validation, URL
//! rendering, and request execution live with the client host; nothing here runs a request.
//!
//! [`namespace`] is invoked once per client construction and the resulting [`Namespace`]
//! lives, immutable, for the client's lifetime.

// self
use crate::{
	endpoint::{DescriptorError, EndpointDescriptor, HttpMethod, ParamSpec},
	namespace::Namespace,
};

/// Name under which the security namespace is attached to the client host.
pub const NAMESPACE: &str = "opendistro_security";

/// Action names registered under [`NAMESPACE`].
pub mod action {
	/// Permissions available to the calling user.
	pub const RESTAPIINFO: &str = "restapiinfo";
	/// Field mappings for all indices.
	pub const INDICES: &str = "indices";
	/// Lists every instance of a security resource kind.
	pub const LIST_RESOURCE: &str = "list_resource";
	/// Creates or replaces a security resource instance by id.
	///
	/// The backend performs no conflict detection, so this doubles as the update call.
	pub const SAVE_RESOURCE: &str = "save_resource";
	/// Creates or replaces a security resource whose identity comes from request headers.
	pub const SAVE_RESOURCE_WITHOUT_ID: &str = "save_resource_without_id";
	/// Fetches a single security resource instance.
	pub const GET_RESOURCE: &str = "get_resource";
	/// Deletes a single security resource instance.
	pub const DELETE_RESOURCE: &str = "delete_resource";
	/// Flushes the security configuration cache.
	pub const CLEAR_CACHE: &str = "clear_cache";
	/// Validates a document-level-security query.
	pub const VALIDATE_DLS: &str = "validate_dls";
	/// Field mappings of one index.
	pub const GET_INDEX_MAPPINGS: &str = "get_index_mappings";
	/// Authentication details of the current user.
	pub const AUTHINFO: &str = "authinfo";
	/// Multitenancy and dashboard server info.
	pub const MULTITENANCYINFO: &str = "multitenancyinfo";
	/// Tenant info of the current user.
	pub const TENANTINFO: &str = "tenantinfo";
	/// Issues an auth token.
	pub const AUTHTOKEN: &str = "authtoken";
	/// Reads the audit log configuration.
	pub const GET_AUDIT: &str = "get_audit";
	/// Updates the audit log configuration.
	pub const SAVE_AUDIT: &str = "save_audit";
}

/// Parameter names declared by the catalog.
pub mod param {
	/// Security resource kind (`internalusers`, `roles`, ...).
	pub const RESOURCE_NAME: &str = "resourceName";
	/// Resource instance identifier.
	pub const ID: &str = "id";
	/// Index name.
	pub const INDEX: &str = "index";
}

/// Builds the `opendistro_security` namespace, one action per catalog descriptor.
pub fn namespace() -> Result<Namespace, DescriptorError> {
	let mut builder = Namespace::builder(NAMESPACE);

	for descriptor in descriptors()? {
		builder = builder.register(descriptor)?;
	}

	Ok(builder.build())
}

fn descriptors() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
	Ok(vec![
		EndpointDescriptor::builder(action::RESTAPIINFO)
			.url("/_opendistro/_security/api/permissionsinfo")
			.build()?,
		EndpointDescriptor::builder(action::INDICES).url("/_all/_mapping/field/*").build()?,
		EndpointDescriptor::builder(action::LIST_RESOURCE)
			.url("/_opendistro/_security/api/{resourceName}")
			.param(ParamSpec::required(param::RESOURCE_NAME))
			.build()?,
		EndpointDescriptor::builder(action::SAVE_RESOURCE)
			.method(HttpMethod::Put)
			.needs_body()
			.url("/_opendistro/_security/api/{resourceName}/{id}")
			.param(ParamSpec::required(param::RESOURCE_NAME))
			.param(ParamSpec::required(param::ID))
			.build()?,
		EndpointDescriptor::builder(action::SAVE_RESOURCE_WITHOUT_ID)
			.method(HttpMethod::Put)
			.needs_body()
			.url("/_opendistro/_security/api/{resourceName}")
			.param(ParamSpec::required(param::RESOURCE_NAME))
			.build()?,
		EndpointDescriptor::builder(action::GET_RESOURCE)
			.url("/_opendistro/_security/api/{resourceName}/{id}")
			.param(ParamSpec::required(param::RESOURCE_NAME))
			.param(ParamSpec::required(param::ID))
			.build()?,
		EndpointDescriptor::builder(action::DELETE_RESOURCE)
			.method(HttpMethod::Delete)
			.url("/_opendistro/_security/api/{resourceName}/{id}")
			.param(ParamSpec::required(param::RESOURCE_NAME))
			.param(ParamSpec::required(param::ID))
			.build()?,
		EndpointDescriptor::builder(action::CLEAR_CACHE)
			.method(HttpMethod::Delete)
			.url("/_opendistro/_security/api/cache")
			.build()?,
		EndpointDescriptor::builder(action::VALIDATE_DLS)
			.method(HttpMethod::Post)
			.needs_body()
			.url("/_validate/query?explain=true")
			.build()?,
		EndpointDescriptor::builder(action::GET_INDEX_MAPPINGS)
			.needs_body()
			.url("/{index}/_mapping")
			.param(ParamSpec::required(param::INDEX))
			.build()?,
		EndpointDescriptor::builder(action::AUTHINFO)
			.url("/_opendistro/_security/authinfo")
			.build()?,
		EndpointDescriptor::builder(action::MULTITENANCYINFO)
			.url("/_opendistro/_security/kibanainfo")
			.build()?,
		EndpointDescriptor::builder(action::TENANTINFO)
			.url("/_opendistro/_security/tenantinfo")
			.build()?,
		EndpointDescriptor::builder(action::AUTHTOKEN)
			.method(HttpMethod::Post)
			.needs_body()
			.url("/_opendistro/_security/api/authtoken")
			.build()?,
		EndpointDescriptor::builder(action::GET_AUDIT)
			.url("/_opendistro/_security/api/audit")
			.build()?,
		EndpointDescriptor::builder(action::SAVE_AUDIT)
			.method(HttpMethod::Put)
			.needs_body()
			.url("/_opendistro/_security/api/audit/config")
			.build()?,
	])
}
