//! Callable actions produced from endpoint descriptors.
//!
//! [`ClientAction`] is the factory product the registrar attaches under a namespace: it owns
//! one immutable descriptor and turns an invocation (parameters + optional body) into a
//! fully-formed [`TransportRequest`]. All request-time enforcement the descriptors declare —
//! required parameters, body presence — happens here, before any transport is touched.

// self
use crate::{
	_prelude::*,
	endpoint::{EndpointDescriptor, Params},
	http::TransportRequest,
};

/// Request-time validation failures raised before a request is dispatched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ValidationError {
	/// A parameter the descriptor marks required was not supplied.
	#[error("Required parameter `{param}` is missing.")]
	MissingParam {
		/// Name of the missing parameter.
		param: String,
	},
	/// A supplied parameter value was empty, which would produce an empty path segment.
	#[error("Parameter `{param}` must not be empty.")]
	EmptyParam {
		/// Name of the empty parameter.
		param: String,
	},
	/// A supplied parameter is not declared by the descriptor.
	#[error("Parameter `{param}` is not declared by the endpoint.")]
	UndeclaredParam {
		/// Name of the undeclared parameter.
		param: String,
	},
	/// The action requires a request body and none was supplied.
	#[error("Action `{action}` requires a request body.")]
	MissingBody {
		/// Name of the invoked action.
		action: String,
	},
}

/// Callable produced from one endpoint descriptor.
#[derive(Clone, Debug)]
pub struct ClientAction {
	descriptor: EndpointDescriptor,
}
impl ClientAction {
	/// Wraps a descriptor into its callable form.
	pub fn from_descriptor(descriptor: EndpointDescriptor) -> Self {
		Self { descriptor }
	}

	/// Returns the backing descriptor.
	pub fn descriptor(&self) -> &EndpointDescriptor {
		&self.descriptor
	}

	/// Returns the name the action registers under.
	pub fn name(&self) -> &str {
		&self.descriptor.name
	}

	/// Validates an invocation and renders it into a transport request.
	///
	/// A body may accompany any action; only its absence on a `needs_body` action is an
	/// error, matching the GET-with-body mapping endpoints.
	pub fn prepare(
		&self,
		base: &Url,
		params: &Params,
		body: Option<Vec<u8>>,
	) -> Result<TransportRequest> {
		self.validate(params, body.is_some())?;

		let url = self.descriptor.template.render(base, params)?;

		Ok(TransportRequest { method: self.descriptor.method, url, body })
	}

	fn validate(&self, params: &Params, has_body: bool) -> Result<(), ValidationError> {
		for spec in &self.descriptor.params {
			match params.get(&spec.name) {
				Some(value) if value.is_empty() =>
					return Err(ValidationError::EmptyParam { param: spec.name.clone() }),
				Some(_) => {},
				None if spec.required =>
					return Err(ValidationError::MissingParam { param: spec.name.clone() }),
				None => {},
			}
		}

		for (name, _) in params.iter() {
			if self.descriptor.param(name).is_none() {
				return Err(ValidationError::UndeclaredParam { param: name.to_owned() });
			}
		}

		if self.descriptor.needs_body && !has_body {
			return Err(ValidationError::MissingBody { action: self.descriptor.name.clone() });
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::endpoint::{HttpMethod, ParamSpec};

	fn base() -> Url {
		Url::parse("https://search.example:9200").expect("Failed to parse fixture base URL.")
	}

	fn save_resource() -> ClientAction {
		ClientAction::from_descriptor(
			EndpointDescriptor::builder("save_resource")
				.method(HttpMethod::Put)
				.needs_body()
				.url("/_opendistro/_security/api/{resourceName}/{id}")
				.param(ParamSpec::required("resourceName"))
				.param(ParamSpec::required("id"))
				.build()
				.expect("Save-resource fixture should build."),
		)
	}

	#[test]
	fn prepare_renders_method_url_and_body() {
		let action = save_resource();
		let params = Params::new().with("resourceName", "internalusers").with("id", "admin");
		let request = action
			.prepare(&base(), &params, Some(b"{}".to_vec()))
			.expect("Complete invocation should prepare.");

		assert_eq!(request.method, HttpMethod::Put);
		assert_eq!(request.url.path(), "/_opendistro/_security/api/internalusers/admin");
		assert_eq!(request.body.as_deref(), Some(b"{}".as_slice()));
	}

	#[test]
	fn prepare_enforces_required_params() {
		let action = save_resource();
		let err = action
			.prepare(&base(), &Params::new().with("resourceName", "internalusers"), Some(vec![]))
			.expect_err("Missing id should fail validation.");

		assert!(matches!(
			err,
			Error::Validation(ValidationError::MissingParam { ref param }) if param == "id",
		));
	}

	#[test]
	fn prepare_rejects_empty_and_undeclared_params() {
		let action = save_resource();
		let params = Params::new().with("resourceName", "").with("id", "admin");
		let err = action
			.prepare(&base(), &params, Some(vec![]))
			.expect_err("Empty resourceName should fail validation.");

		assert!(matches!(
			err,
			Error::Validation(ValidationError::EmptyParam { ref param }) if param == "resourceName",
		));

		let params = Params::new()
			.with("resourceName", "internalusers")
			.with("id", "admin")
			.with("tenant", "global");
		let err = action
			.prepare(&base(), &params, Some(vec![]))
			.expect_err("Undeclared tenant parameter should fail validation.");

		assert!(matches!(
			err,
			Error::Validation(ValidationError::UndeclaredParam { ref param }) if param == "tenant",
		));
	}

	#[test]
	fn prepare_enforces_body_presence_but_not_absence() {
		let action = save_resource();
		let params = Params::new().with("resourceName", "internalusers").with("id", "admin");
		let err = action
			.prepare(&base(), &params, None)
			.expect_err("Missing body should fail validation.");

		assert!(matches!(
			err,
			Error::Validation(ValidationError::MissingBody { ref action }) if action == "save_resource",
		));

		let bodyless = ClientAction::from_descriptor(
			EndpointDescriptor::builder("authinfo")
				.url("/_opendistro/_security/authinfo")
				.build()
				.expect("Authinfo fixture should build."),
		);
		let request = bodyless
			.prepare(&base(), &Params::new(), Some(b"{}".to_vec()))
			.expect("A body on a body-less action is permitted.");

		assert_eq!(request.body.as_deref(), Some(b"{}".as_slice()));
	}
}
