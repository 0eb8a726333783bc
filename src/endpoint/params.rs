//! Ordered parameter map handed to generic action invocation.

// self
use crate::_prelude::*;

/// Name→value parameters substituted into an endpoint's URL template.
///
/// Typed [`Security`](crate::client::Security) methods populate this map from their
/// arguments; hosts invoking actions generically build one by hand. Keys follow the
/// names declared by the descriptor (`resourceName`, `id`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);
impl Params {
	/// Creates an empty parameter map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a parameter, replacing any previous value of the same name.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.0.insert(name.into(), value.into());

		self
	}

	/// Inserts a parameter, returning the previous value of the same name.
	pub fn insert(
		&mut self,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> Option<String> {
		self.0.insert(name.into(), value.into())
	}

	/// Returns the value recorded for `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Returns true when a value is recorded for `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// Iterates over the recorded parameters in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Returns the number of recorded parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no parameters are recorded.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
