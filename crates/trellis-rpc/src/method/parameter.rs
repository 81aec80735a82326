//! Method parameter metadata

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::options::{self, Setter};

/// Type used when a parameter does not declare one.
pub const DEFAULT_PARAMETER_TYPE: &str = "mixed";

/// A single method parameter.
///
/// Only the type is required; the name is an optional secondary key used for
/// lookups by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameter {
	#[serde(skip_serializing_if = "Option::is_none")]
	name: Option<String>,
	#[serde(rename = "type")]
	type_name: String,
	optional: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	default_value: Option<Value>,
	description: String,
}

impl Parameter {
	const SETTERS: &'static [(&'static str, Setter<Parameter>)] = &[
		("name", Parameter::apply_name),
		("type", Parameter::apply_type),
		("optional", Parameter::apply_optional),
		("defaultValue", Parameter::apply_default_value),
		("description", Parameter::apply_description),
	];

	/// Creates an unnamed, required parameter of type `mixed`.
	pub fn new() -> Self {
		Self {
			name: None,
			type_name: DEFAULT_PARAMETER_TYPE.to_string(),
			optional: false,
			default_value: None,
			description: String::new(),
		}
	}

	/// Creates a parameter from an option mapping.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_rpc::Parameter;
	/// use serde_json::{Value, json};
	///
	/// let Value::Object(options) = json!({
	///     "name": "limit",
	///     "type": "int",
	///     "optional": true,
	///     "defaultValue": 10,
	///     "unknown": "ignored"
	/// }) else { unreachable!() };
	///
	/// let parameter = Parameter::from_options(&options);
	/// assert_eq!(parameter.name(), Some("limit"));
	/// assert_eq!(parameter.type_name(), "int");
	/// assert!(parameter.is_optional());
	/// assert_eq!(parameter.default_value(), Some(&json!(10)));
	/// ```
	pub fn from_options(options: &Map<String, Value>) -> Self {
		let mut parameter = Self::new();
		parameter.configure(options);
		parameter
	}

	/// Applies recognised options; unknown keys are ignored.
	pub fn configure(&mut self, options: &Map<String, Value>) -> &mut Self {
		options::apply(self, options, Self::SETTERS);
		self
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
		self.type_name = type_name.into();
		self
	}

	pub fn with_optional(mut self, optional: bool) -> Self {
		self.optional = optional;
		self
	}

	pub fn with_default_value(mut self, value: impl Into<Value>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
		self.name = Some(name.into());
		self
	}

	/// Makes the parameter positional-only.
	pub fn clear_name(&mut self) -> &mut Self {
		self.name = None;
		self
	}

	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	pub fn set_type(&mut self, type_name: impl Into<String>) -> &mut Self {
		self.type_name = type_name.into();
		self
	}

	pub fn is_optional(&self) -> bool {
		self.optional
	}

	pub fn set_optional(&mut self, optional: bool) -> &mut Self {
		self.optional = optional;
		self
	}

	pub fn default_value(&self) -> Option<&Value> {
		self.default_value.as_ref()
	}

	pub fn set_default_value(&mut self, value: Option<Value>) -> &mut Self {
		self.default_value = value;
		self
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
		self.description = description.into();
		self
	}

	fn apply_name(&mut self, value: &Value) {
		match options::scalar_string(value) {
			Some(name) => self.set_name(name),
			None => self.clear_name(),
		};
	}

	fn apply_type(&mut self, value: &Value) {
		if let Some(type_name) = options::scalar_string(value) {
			self.set_type(type_name);
		}
	}

	fn apply_optional(&mut self, value: &Value) {
		self.set_optional(options::truthy(value));
	}

	fn apply_default_value(&mut self, value: &Value) {
		self.set_default_value(Some(value.clone()));
	}

	fn apply_description(&mut self, value: &Value) {
		if let Some(description) = options::scalar_string(value) {
			self.set_description(description);
		}
	}
}

impl Default for Parameter {
	fn default() -> Self {
		Self::new()
	}
}

/// A bare type name becomes an unnamed parameter of that type.
impl From<&str> for Parameter {
	fn from(type_name: &str) -> Self {
		Self::new().with_type(type_name)
	}
}

impl From<String> for Parameter {
	fn from(type_name: String) -> Self {
		Self::new().with_type(type_name)
	}
}
