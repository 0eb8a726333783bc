//! Named action sets produced by endpoint registrars.
//!
//! A [`Namespace`] is the unit a registrar hands to the client host: an immutable map from
//! action name to [`ClientAction`], registered once at client construction and shared for the
//! client's lifetime.

/// The `opendistro_security` registrar and its endpoint catalog.
pub mod security;

// self
use crate::{
	_prelude::*,
	action::ClientAction,
	endpoint::{DescriptorError, EndpointDescriptor},
};

/// Immutable, named set of client actions.
#[derive(Clone, Debug)]
pub struct Namespace {
	name: &'static str,
	actions: BTreeMap<String, ClientAction>,
}
impl Namespace {
	/// Creates a new builder for the provided namespace name.
	pub fn builder(name: &'static str) -> NamespaceBuilder {
		NamespaceBuilder::new(name)
	}

	/// Returns the name the namespace registers under.
	pub fn name(&self) -> &str {
		self.name
	}

	/// Looks up an action by name.
	pub fn action(&self, name: &str) -> Option<&ClientAction> {
		self.actions.get(name)
	}

	/// Returns true when an action of the given name is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.actions.contains_key(name)
	}

	/// Iterates over the registered actions in name order.
	pub fn actions(&self) -> impl Iterator<Item = &ClientAction> {
		self.actions.values()
	}

	/// Iterates over the registered action names in order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.actions.keys().map(String::as_str)
	}

	/// Returns the number of registered actions.
	pub fn len(&self) -> usize {
		self.actions.len()
	}

	/// Returns true when no actions are registered.
	pub fn is_empty(&self) -> bool {
		self.actions.is_empty()
	}
}

/// Builder collecting descriptors into a [`Namespace`].
#[derive(Clone, Debug)]
pub struct NamespaceBuilder {
	name: &'static str,
	actions: BTreeMap<String, ClientAction>,
}
impl NamespaceBuilder {
	/// Creates an empty builder for the provided namespace name.
	pub fn new(name: &'static str) -> Self {
		Self { name, actions: BTreeMap::new() }
	}

	/// Registers one descriptor as a callable action.
	pub fn register(mut self, descriptor: EndpointDescriptor) -> Result<Self, DescriptorError> {
		if self.actions.contains_key(&descriptor.name) {
			return Err(DescriptorError::DuplicateAction { action: descriptor.name });
		}

		self.actions.insert(descriptor.name.clone(), ClientAction::from_descriptor(descriptor));

		Ok(self)
	}

	/// Finalizes the namespace.
	pub fn build(self) -> Namespace {
		Namespace { name: self.name, actions: self.actions }
	}
}
