//! Method signature (return type plus parameter list)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::options::{self, Setter};
use super::parameter::Parameter;

/// Return type used until one is set.
pub const DEFAULT_RETURN_TYPE: &str = "void";

/// Key used to look up a parameter by position or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKey {
	Index(usize),
	Name(String),
	/// A key that can never address a parameter (booleans, fractional numbers, ...).
	Invalid,
}

impl From<usize> for ParameterKey {
	fn from(index: usize) -> Self {
		ParameterKey::Index(index)
	}
}

impl From<i64> for ParameterKey {
	fn from(index: i64) -> Self {
		usize::try_from(index).map_or(ParameterKey::Invalid, ParameterKey::Index)
	}
}

impl From<f64> for ParameterKey {
	fn from(index: f64) -> Self {
		if index.fract() == 0.0 && index >= 0.0 && index <= usize::MAX as f64 {
			ParameterKey::Index(index as usize)
		} else {
			ParameterKey::Invalid
		}
	}
}

impl From<bool> for ParameterKey {
	fn from(_: bool) -> Self {
		ParameterKey::Invalid
	}
}

impl From<&str> for ParameterKey {
	fn from(name: &str) -> Self {
		ParameterKey::Name(name.to_string())
	}
}

impl From<String> for ParameterKey {
	fn from(name: String) -> Self {
		ParameterKey::Name(name)
	}
}

/// Keys arriving as JSON: strings are names, numbers are positions, anything else is invalid.
impl From<&Value> for ParameterKey {
	fn from(value: &Value) -> Self {
		match value {
			Value::String(name) => ParameterKey::Name(name.clone()),
			Value::Number(number) => match (number.as_u64(), number.as_i64(), number.as_f64()) {
				(Some(index), _, _) => {
					usize::try_from(index).map_or(ParameterKey::Invalid, ParameterKey::Index)
				}
				(None, Some(_), _) => ParameterKey::Invalid,
				(None, None, Some(float)) => ParameterKey::from(float),
				(None, None, None) => ParameterKey::Invalid,
			},
			Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
				ParameterKey::Invalid
			}
		}
	}
}

/// Serialised form of a [`MethodSignature`]: return type plus parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureArray {
	pub return_type: String,
	pub parameters: Vec<String>,
}

/// Return type and ordered parameters of one RPC method.
///
/// Named parameters are additionally indexed by name; the index is rebuilt
/// on every mutation so it always reflects the parameter list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct MethodSignature {
	return_type: String,
	parameters: Vec<Parameter>,
	parameter_name_map: HashMap<String, usize>,
}

impl MethodSignature {
	const SETTERS: &'static [(&'static str, Setter<MethodSignature>)] = &[
		("returnType", MethodSignature::apply_return_type),
		("parameters", MethodSignature::apply_parameters),
		("options", MethodSignature::apply_options),
	];

	pub fn new() -> Self {
		Self {
			return_type: DEFAULT_RETURN_TYPE.to_string(),
			parameters: Vec::new(),
			parameter_name_map: HashMap::new(),
		}
	}

	/// Builds a signature from an option mapping.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_rpc::MethodSignature;
	/// use serde_json::{Value, json};
	///
	/// let Value::Object(options) = json!({
	///     "returnType": "struct",
	///     "parameters": ["int", {"name": "query", "type": "string"}],
	///     "cacheable": true
	/// }) else { unreachable!() };
	///
	/// let signature = MethodSignature::from_options(&options);
	/// assert_eq!(signature.return_type(), "struct");
	/// assert_eq!(signature.parameters(), vec!["int", "string"]);
	/// assert_eq!(signature.parameter("query").unwrap().type_name(), "string");
	/// ```
	pub fn from_options(options: &Map<String, Value>) -> Self {
		let mut signature = Self::new();
		signature.configure(options);
		signature
	}

	/// Applies recognised options (`returnType`, `parameters`, `options`); unknown keys are ignored.
	pub fn configure(&mut self, options: &Map<String, Value>) -> &mut Self {
		options::apply(self, options, Self::SETTERS);
		self
	}

	pub fn set_return_type(&mut self, return_type: impl Into<String>) -> &mut Self {
		self.return_type = return_type.into();
		self
	}

	pub fn return_type(&self) -> &str {
		&self.return_type
	}

	/// Appends a parameter; a bare type string becomes an unnamed parameter.
	///
	/// When several parameters share a name, lookups by that name resolve to the last one added.
	pub fn add_parameter(&mut self, parameter: impl Into<Parameter>) -> &mut Self {
		let parameter = parameter.into();
		if let Some(name) = parameter.name() {
			self.parameter_name_map
				.insert(name.to_string(), self.parameters.len());
		}
		self.parameters.push(parameter);
		self
	}

	pub fn add_parameters<I>(&mut self, parameters: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: Into<Parameter>,
	{
		for parameter in parameters {
			self.add_parameter(parameter);
		}
		self
	}

	/// Replaces every parameter, discarding all previously known names.
	pub fn set_parameters<I>(&mut self, parameters: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: Into<Parameter>,
	{
		self.parameters.clear();
		self.parameter_name_map.clear();
		self.add_parameters(parameters)
	}

	/// Parameter types in declaration order.
	pub fn parameters(&self) -> Vec<&str> {
		self.parameters.iter().map(Parameter::type_name).collect()
	}

	pub fn parameter_objects(&self) -> &[Parameter] {
		&self.parameters
	}

	/// Looks up a parameter by name or position.
	///
	/// A key naming a known parameter resolves through its name first; any
	/// other key is treated as a position. Invalid keys and out-of-range
	/// positions yield `None`.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_rpc::{MethodSignature, Parameter};
	///
	/// let mut signature = MethodSignature::new();
	/// signature.add_parameter(Parameter::new().with_name("x").with_type("string"));
	///
	/// assert_eq!(signature.parameter("x"), signature.parameter(0usize));
	/// assert_eq!(signature.parameter("0"), signature.parameter(0usize));
	/// assert!(signature.parameter(1usize).is_none());
	/// assert!(signature.parameter(1.5).is_none());
	/// assert!(signature.parameter(true).is_none());
	/// ```
	pub fn parameter(&self, key: impl Into<ParameterKey>) -> Option<&Parameter> {
		let index = match key.into() {
			ParameterKey::Invalid => return None,
			ParameterKey::Name(name) => match self.parameter_name_map.get(&name) {
				Some(&index) => index,
				// Only canonical integers ("3", not "03" or "+3") address positions
				None => name
					.parse::<usize>()
					.ok()
					.filter(|index| index.to_string() == name)?,
			},
			ParameterKey::Index(index) => self
				.parameter_name_map
				.get(&index.to_string())
				.copied()
				.unwrap_or(index),
		};
		self.parameters.get(index)
	}

	pub fn to_array(&self) -> SignatureArray {
		SignatureArray {
			return_type: self.return_type.clone(),
			parameters: self.parameters().into_iter().map(str::to_string).collect(),
		}
	}

	fn apply_return_type(&mut self, value: &Value) {
		match options::scalar_string(value) {
			Some(return_type) => {
				self.set_return_type(return_type);
			}
			None => tracing::trace!("ignoring non-scalar returnType option"),
		}
	}

	fn apply_parameters(&mut self, value: &Value) {
		let Value::Array(items) = value else {
			tracing::trace!("ignoring non-list parameters option");
			return;
		};
		let parameters: Vec<Parameter> = items
			.iter()
			.filter_map(|item| match item {
				Value::String(type_name) => Some(Parameter::from(type_name.as_str())),
				Value::Object(options) => Some(Parameter::from_options(options)),
				_ => {
					tracing::trace!(entry = %item, "ignoring malformed parameter entry");
					None
				}
			})
			.collect();
		self.set_parameters(parameters);
	}

	fn apply_options(&mut self, value: &Value) {
		if let Value::Object(options) = value {
			self.configure(options);
		}
	}
}

impl Default for MethodSignature {
	fn default() -> Self {
		Self::new()
	}
}

impl From<Map<String, Value>> for MethodSignature {
	fn from(options: Map<String, Value>) -> Self {
		Self::from_options(&options)
	}
}

impl From<&MethodSignature> for SignatureArray {
	fn from(signature: &MethodSignature) -> Self {
		signature.to_array()
	}
}
