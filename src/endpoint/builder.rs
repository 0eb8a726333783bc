// std
use std::collections::BTreeSet;
// self
use crate::{
	_prelude::*,
	endpoint::{EndpointDescriptor, HttpMethod, ParamSpec, TemplateError, UrlTemplate},
};

/// Errors raised while constructing or validating endpoint descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum DescriptorError {
	/// URL template text failed to parse.
	#[error(transparent)]
	Template(#[from] TemplateError),
	/// Every action needs a name to register under.
	#[error("Action name must not be empty.")]
	EmptyActionName,
	/// Parameter specs need a non-empty name.
	#[error("Parameter name must not be empty.")]
	EmptyParamName,
	/// Every descriptor declares a URL template.
	#[error("Descriptor is missing a URL template.")]
	MissingUrl,
	/// A template placeholder has no matching parameter declaration.
	#[error("Placeholder `{placeholder}` has no declared parameter.")]
	UndeclaredPlaceholder {
		/// Placeholder name appearing in the template.
		placeholder: String,
	},
	/// Placeholder parameters must be required, otherwise rendering could not complete.
	#[error("Placeholder parameter `{param}` must be declared required.")]
	OptionalPlaceholder {
		/// Parameter declared optional despite backing a placeholder.
		param: String,
	},
	/// The same parameter was declared twice.
	#[error("Parameter `{param}` is declared more than once.")]
	DuplicateParam {
		/// Parameter name declared more than once.
		param: String,
	},
	/// A declared parameter never appears in the template.
	#[error("Parameter `{param}` does not appear in the URL template.")]
	UnusedParam {
		/// Parameter name with no placeholder.
		param: String,
	},
	/// The namespace already holds an action of this name.
	#[error("Action `{action}` is already registered.")]
	DuplicateAction {
		/// Action name registered twice.
		action: String,
	},
}

/// Builder for [`EndpointDescriptor`] values.
#[derive(Clone, Debug)]
pub struct EndpointDescriptorBuilder {
	/// Name the action registers under.
	pub name: String,
	/// HTTP verb; GET when never overridden.
	pub method: HttpMethod,
	/// URL template text, parsed and validated by [`build`](Self::build).
	pub url: Option<String>,
	/// Declared parameters, in declaration order.
	pub params: Vec<ParamSpec>,
	/// Whether invocations must carry a request body.
	pub needs_body: bool,
}
impl EndpointDescriptorBuilder {
	/// Creates a new builder seeded with the action name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			method: HttpMethod::default(),
			url: None,
			params: Vec::new(),
			needs_body: false,
		}
	}

	/// Overrides the HTTP verb (GET by default).
	pub fn method(mut self, method: HttpMethod) -> Self {
		self.method = method;

		self
	}

	/// Sets the URL template text.
	pub fn url(mut self, template: impl Into<String>) -> Self {
		self.url = Some(template.into());

		self
	}

	/// Declares a parameter.
	pub fn param(mut self, spec: ParamSpec) -> Self {
		self.params.push(spec);

		self
	}

	/// Marks the action as requiring a request body.
	pub fn needs_body(mut self) -> Self {
		self.needs_body = true;

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<EndpointDescriptor, DescriptorError> {
		if self.name.is_empty() {
			return Err(DescriptorError::EmptyActionName);
		}

		let template = UrlTemplate::parse(self.url.ok_or(DescriptorError::MissingUrl)?)?;
		let descriptor = EndpointDescriptor {
			name: self.name,
			method: self.method,
			template,
			params: self.params,
			needs_body: self.needs_body,
		};

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl EndpointDescriptor {
	/// Validates invariants for the descriptor.
	///
	/// Placeholders and declared parameters must match one-to-one: every placeholder is backed
	/// by a required parameter, and every declared parameter appears in the template. Both
	/// checks run at construction so a registered catalog cannot drift.
	fn validate(&self) -> Result<(), DescriptorError> {
		let mut declared = BTreeSet::new();

		for spec in &self.params {
			if spec.name.is_empty() {
				return Err(DescriptorError::EmptyParamName);
			}
			if !declared.insert(spec.name.as_str()) {
				return Err(DescriptorError::DuplicateParam { param: spec.name.clone() });
			}
		}

		let mut placeholders = BTreeSet::new();

		for placeholder in self.template.placeholders() {
			placeholders.insert(placeholder);

			match self.param(placeholder) {
				None =>
					return Err(DescriptorError::UndeclaredPlaceholder {
						placeholder: placeholder.to_owned(),
					}),
				Some(spec) if !spec.required =>
					return Err(DescriptorError::OptionalPlaceholder { param: spec.name.clone() }),
				Some(_) => {},
			}
		}

		for spec in &self.params {
			if !placeholders.contains(spec.name.as_str()) {
				return Err(DescriptorError::UnusedParam { param: spec.name.clone() });
			}
		}

		Ok(())
	}
}
