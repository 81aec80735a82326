//! Option-table plumbing shared by the metadata types.
//!
//! Each type exposes a static table mapping an option key to a typed setter.
//! Keys match case-insensitively; keys missing from the table are ignored.

use serde_json::{Map, Value};

pub(crate) type Setter<T> = fn(&mut T, &Value);

/// Applies every recognised option in `options` to `target`.
pub(crate) fn apply<T>(target: &mut T, options: &Map<String, Value>, setters: &[(&str, Setter<T>)]) {
	for (key, value) in options {
		match setters
			.iter()
			.find(|(name, _)| name.eq_ignore_ascii_case(key))
		{
			Some((_, setter)) => setter(target, value),
			None => tracing::trace!(option = key.as_str(), "ignoring unknown option"),
		}
	}
}

/// Renders scalar values as strings; arrays, objects and null yield `None`.
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Null | Value::Array(_) | Value::Object(_) => None,
	}
}

/// Loose truthiness: `false`, `0`, `""`, `"0"`, null and empty containers are false.
pub(crate) fn truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !(s.is_empty() || s == "0"),
		Value::Array(items) => !items.is_empty(),
		Value::Object(map) => !map.is_empty(),
	}
}
