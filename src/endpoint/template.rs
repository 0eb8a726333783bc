//! URL template parsing and placeholder substitution.
//!
//! Templates are rooted paths whose `{name}` placeholders are replaced with caller-supplied
//! parameter values at render time, e.g. `/_opendistro/_security/api/{resourceName}/{id}`.
//! A template may carry a literal query string (`/_validate/query?explain=true`); placeholders
//! never appear in queries. Substituted values are percent-encoded into single path segments,
//! so a rendered URL can never contain a leftover `{...}` marker or a value that escapes its
//! segment.

// self
use crate::{_prelude::*, action::ValidationError, endpoint::Params};

/// Errors raised while parsing a URL template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum TemplateError {
	/// Templates address the API root and must start with `/`.
	#[error("URL template must start with `/`.")]
	NotRooted,
	/// A `{` was never closed by a matching `}` within its segment.
	#[error("URL template contains an unclosed `{{` placeholder.")]
	UnclosedPlaceholder,
	/// A `}` appeared without a matching `{`.
	#[error("URL template contains a `}}` without a matching `{{`.")]
	StrayBrace,
	/// A `{}` placeholder carried no name.
	#[error("URL template contains an empty `{{}}` placeholder.")]
	EmptyPlaceholder,
	/// Two consecutive `/` (or a trailing `/`) produced an empty segment.
	#[error("URL template contains an empty path segment.")]
	EmptySegment,
	/// Query strings are literal; placeholders are only substituted into the path.
	#[error("URL template query strings cannot contain placeholders.")]
	PlaceholderInQuery,
}

/// Parsed URL template backing one endpoint descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UrlTemplate {
	raw: String,
	segments: Vec<TemplateSegment>,
	query: Option<String>,
}
impl UrlTemplate {
	/// Parses a template string into its literal and placeholder parts.
	pub fn parse(raw: impl Into<String>) -> Result<Self, TemplateError> {
		let raw = raw.into();
		let (path, query) = match raw.split_once('?') {
			Some((path, query)) => (path, Some(query)),
			None => (raw.as_str(), None),
		};

		if query.is_some_and(|query| query.contains('{') || query.contains('}')) {
			return Err(TemplateError::PlaceholderInQuery);
		}

		let Some(path) = path.strip_prefix('/') else {
			return Err(TemplateError::NotRooted);
		};
		let mut segments = Vec::new();

		for segment in path.split('/') {
			if segment.is_empty() {
				return Err(TemplateError::EmptySegment);
			}

			segments.push(TemplateSegment::parse(segment)?);
		}

		let query = query.map(str::to_owned);

		Ok(Self { raw, segments, query })
	}

	/// Returns the template exactly as it was declared.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Returns the literal query string, if the template declares one.
	pub fn query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	/// Iterates over the placeholder names appearing in the path.
	pub fn placeholders(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().flat_map(|segment| {
			segment.0.iter().filter_map(|part| match part {
				TemplatePart::Placeholder(name) => Some(name.as_str()),
				TemplatePart::Literal(_) => None,
			})
		})
	}

	/// Renders the template against a base URL, substituting percent-encoded parameter values
	/// for every placeholder.
	pub fn render(&self, base: &Url, params: &Params) -> Result<Url> {
		let mut url = base.clone();

		{
			let mut path = url.path_segments_mut().map_err(|()| Error::OpaqueBaseUrl)?;

			path.pop_if_empty();

			for segment in &self.segments {
				path.push(&segment.render(params)?);
			}
		}

		if let Some(query) = self.query.as_deref() {
			url.set_query(Some(query));
		}

		Ok(url)
	}
}
impl Display for UrlTemplate {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.raw)
	}
}
impl FromStr for UrlTemplate {
	type Err = TemplateError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
impl TryFrom<String> for UrlTemplate {
	type Error = TemplateError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}
impl From<UrlTemplate> for String {
	fn from(template: UrlTemplate) -> Self {
		template.raw
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct TemplateSegment(Vec<TemplatePart>);
impl TemplateSegment {
	fn parse(segment: &str) -> Result<Self, TemplateError> {
		let mut parts = Vec::new();
		let mut rest = segment;

		while let Some(open) = rest.find('{') {
			let literal = &rest[..open];

			if literal.contains('}') {
				return Err(TemplateError::StrayBrace);
			}
			if !literal.is_empty() {
				parts.push(TemplatePart::Literal(literal.to_owned()));
			}

			let after = &rest[open + 1..];
			let Some(close) = after.find('}') else {
				return Err(TemplateError::UnclosedPlaceholder);
			};
			let name = &after[..close];

			if name.is_empty() {
				return Err(TemplateError::EmptyPlaceholder);
			}
			if name.contains('{') {
				return Err(TemplateError::UnclosedPlaceholder);
			}

			parts.push(TemplatePart::Placeholder(name.to_owned()));

			rest = &after[close + 1..];
		}

		if rest.contains('}') {
			return Err(TemplateError::StrayBrace);
		}
		if !rest.is_empty() {
			parts.push(TemplatePart::Literal(rest.to_owned()));
		}

		Ok(Self(parts))
	}

	fn render(&self, params: &Params) -> Result<String, ValidationError> {
		let mut rendered = String::new();

		for part in &self.0 {
			match part {
				TemplatePart::Literal(text) => rendered.push_str(text),
				TemplatePart::Placeholder(name) => match params.get(name) {
					Some(value) if value.is_empty() =>
						return Err(ValidationError::EmptyParam { param: name.clone() }),
					Some(value) => rendered.push_str(value),
					None => return Err(ValidationError::MissingParam { param: name.clone() }),
				},
			}
		}

		Ok(rendered)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum TemplatePart {
	Literal(String),
	Placeholder(String),
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn base() -> Url {
		Url::parse("https://search.example:9200").expect("Failed to parse fixture base URL.")
	}

	#[test]
	fn parse_collects_placeholders_in_order() {
		let template = UrlTemplate::parse("/_opendistro/_security/api/{resourceName}/{id}")
			.expect("Template with placeholders should parse.");

		assert_eq!(template.placeholders().collect::<Vec<_>>(), ["resourceName", "id"]);
		assert_eq!(template.as_str(), "/_opendistro/_security/api/{resourceName}/{id}");
		assert_eq!(template.query(), None);
	}

	#[test]
	fn parse_keeps_literal_queries() {
		let template = UrlTemplate::parse("/_validate/query?explain=true")
			.expect("Template with a literal query should parse.");

		assert_eq!(template.query(), Some("explain=true"));
		assert_eq!(template.placeholders().count(), 0);
	}

	#[test]
	fn parse_rejects_malformed_templates() {
		assert_eq!(UrlTemplate::parse("no-leading-slash"), Err(TemplateError::NotRooted));
		assert_eq!(UrlTemplate::parse("/a//b"), Err(TemplateError::EmptySegment));
		assert_eq!(UrlTemplate::parse("/a/"), Err(TemplateError::EmptySegment));
		assert_eq!(UrlTemplate::parse("/a/{id"), Err(TemplateError::UnclosedPlaceholder));
		assert_eq!(UrlTemplate::parse("/a/id}"), Err(TemplateError::StrayBrace));
		assert_eq!(UrlTemplate::parse("/a/{}"), Err(TemplateError::EmptyPlaceholder));
		assert_eq!(UrlTemplate::parse("/a?x={id}"), Err(TemplateError::PlaceholderInQuery));
	}

	#[test]
	fn render_substitutes_every_placeholder() {
		let template = UrlTemplate::parse("/_opendistro/_security/api/{resourceName}/{id}")
			.expect("Template fixture should parse.");
		let params = Params::new().with("resourceName", "internalusers").with("id", "jane");
		let url = template.render(&base(), &params).expect("Render should succeed.");

		assert_eq!(url.path(), "/_opendistro/_security/api/internalusers/jane");
		assert!(!url.as_str().contains('{'));
		assert!(!url.as_str().contains('}'));
	}

	#[test]
	fn render_percent_encodes_values_into_single_segments() {
		let template =
			UrlTemplate::parse("/{index}/_mapping").expect("Template fixture should parse.");
		let spaced = Params::new().with("index", "my index");
		let url = template.render(&base(), &spaced).expect("Render should succeed.");

		assert_eq!(url.path(), "/my%20index/_mapping");

		let slashed = Params::new().with("index", "logs/2020");
		let url = template.render(&base(), &slashed).expect("Render should succeed.");

		assert_eq!(url.path(), "/logs%2F2020/_mapping");
	}

	#[test]
	fn render_extends_base_paths_and_preserves_queries() {
		let base = Url::parse("https://search.example:9200/proxy/")
			.expect("Failed to parse prefixed base URL.");
		let template =
			UrlTemplate::parse("/_validate/query?explain=true").expect("Template should parse.");
		let url = template.render(&base, &Params::new()).expect("Render should succeed.");

		assert_eq!(url.path(), "/proxy/_validate/query");
		assert_eq!(url.query(), Some("explain=true"));
	}

	#[test]
	fn render_reports_missing_and_empty_values() {
		let template = UrlTemplate::parse("/api/{id}").expect("Template fixture should parse.");
		let err = template
			.render(&base(), &Params::new())
			.expect_err("Render without parameters should fail.");

		assert!(matches!(
			err,
			Error::Validation(ValidationError::MissingParam { ref param }) if param == "id",
		));

		let err = template
			.render(&base(), &Params::new().with("id", ""))
			.expect_err("Render with an empty value should fail.");

		assert!(matches!(
			err,
			Error::Validation(ValidationError::EmptyParam { ref param }) if param == "id",
		));
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let template: UrlTemplate = serde_json::from_str("\"/api/{id}\"")
			.expect("Valid template should deserialize.");

		assert_eq!(template.placeholders().collect::<Vec<_>>(), ["id"]);
		assert_eq!(
			serde_json::to_string(&template).expect("Template should serialize."),
			"\"/api/{id}\"",
		);
		assert!(serde_json::from_str::<UrlTemplate>("\"api/{id}\"").is_err());
	}
}
