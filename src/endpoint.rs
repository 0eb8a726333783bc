//! Endpoint descriptor data model shared by the registrar and the client host.
//!
//! A descriptor is declarative configuration: an HTTP verb, a URL template, the parameters the
//! template consumes, and whether invocations carry a body. Descriptors are immutable, built
//! once when a namespace is registered, and never mutated afterwards.

/// Builder API for assembling endpoint descriptors.
pub mod builder;
/// Ordered parameter maps for generic invocation.
pub mod params;
/// URL templates with `{name}` placeholders.
pub mod template;

pub use builder::*;
pub use params::*;
pub use template::*;

// self
use crate::_prelude::*;

/// HTTP verbs used by the security management API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	#[default]
	/// Read-only retrieval; the verb every descriptor starts from.
	Get,
	/// Create or replace a resource.
	Put,
	/// Submit a payload for evaluation.
	Post,
	/// Remove a resource.
	Delete,
}
impl HttpMethod {
	/// Returns the verb as it appears on the wire.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Put => "PUT",
			HttpMethod::Post => "POST",
			HttpMethod::Delete => "DELETE",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Parameter value kinds declared by descriptors.
///
/// The security API declares only string parameters today; the enum stays open for the
/// catalog to grow richer kinds without a breaking change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ParamKind {
	#[default]
	/// UTF-8 string, percent-encoded into a single path segment at render time.
	String,
}

/// Declaration of one parameter consumed by an endpoint's URL template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
	/// Name matched against template placeholders and [`Params`] keys.
	pub name: String,
	/// Declared value kind.
	pub kind: ParamKind,
	/// Whether invocations must supply the parameter.
	pub required: bool,
}
impl ParamSpec {
	/// Creates a parameter spec with an explicit kind and required flag.
	pub fn new(name: impl Into<String>, kind: ParamKind, required: bool) -> Self {
		Self { name: name.into(), kind, required }
	}

	/// Creates a required string parameter, the catalog's common case.
	pub fn required(name: impl Into<String>) -> Self {
		Self::new(name, ParamKind::String, true)
	}
}

/// Immutable endpoint descriptor consumed by the registrar and the client host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
	/// Name the action registers under.
	pub name: String,
	/// HTTP verb, GET when the declaration omitted one.
	pub method: HttpMethod,
	/// URL template the action renders per invocation.
	pub template: UrlTemplate,
	/// Declared parameters, in declaration order.
	pub params: Vec<ParamSpec>,
	/// Whether invocations must carry a request body.
	pub needs_body: bool,
}
impl EndpointDescriptor {
	/// Creates a new builder for the provided action name.
	pub fn builder(name: impl Into<String>) -> EndpointDescriptorBuilder {
		EndpointDescriptorBuilder::new(name)
	}

	/// Looks up a declared parameter by name.
	pub fn param(&self, name: &str) -> Option<&ParamSpec> {
		self.params.iter().find(|spec| spec.name == name)
	}

	/// Iterates over the parameters invocations must supply.
	pub fn required_params(&self) -> impl Iterator<Item = &ParamSpec> {
		self.params.iter().filter(|spec| spec.required)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn methods_render_wire_names() {
		assert_eq!(HttpMethod::default(), HttpMethod::Get);
		assert_eq!(HttpMethod::Put.as_str(), "PUT");
		assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
		assert_eq!(
			serde_json::to_string(&HttpMethod::Post).expect("Method should serialize."),
			"\"POST\"",
		);
	}

	#[test]
	fn descriptor_serde_round_trip() {
		let descriptor = EndpointDescriptor::builder("save_resource")
			.method(HttpMethod::Put)
			.needs_body()
			.url("/_opendistro/_security/api/{resourceName}/{id}")
			.param(ParamSpec::required("resourceName"))
			.param(ParamSpec::required("id"))
			.build()
			.expect("Descriptor fixture should build.");
		let json = serde_json::to_string(&descriptor).expect("Descriptor should serialize.");
		let decoded: EndpointDescriptor =
			serde_json::from_str(&json).expect("Descriptor should deserialize.");

		assert_eq!(decoded, descriptor);
		assert_eq!(decoded.required_params().count(), 2);
		assert!(decoded.param("resourceName").is_some());
		assert!(decoded.param("body").is_none());
	}
}
