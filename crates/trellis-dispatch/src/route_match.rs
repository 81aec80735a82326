//! Router output consumed by the dispatch bridge.

use serde_json::{Map, Value};

/// Parameters matched by a router for one request.
///
/// Values keep the router's JSON representation; most routers only produce
/// strings, but defaults configured on a route may be any JSON value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteMatch {
	params: Map<String, Value>,
	matched_route_name: Option<String>,
}

impl RouteMatch {
	/// Creates a route match from its parameters.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_dispatch::RouteMatch;
	/// use serde_json::{Map, Value, json};
	///
	/// let mut params = Map::new();
	/// params.insert("id".to_string(), json!("42"));
	///
	/// let route_match = RouteMatch::new(params).with_matched_route_name("user-detail");
	/// assert_eq!(route_match.param("id"), Some(&json!("42")));
	/// assert_eq!(route_match.matched_route_name(), Some("user-detail"));
	/// ```
	pub fn new(params: Map<String, Value>) -> Self {
		Self {
			params,
			matched_route_name: None,
		}
	}

	pub fn with_matched_route_name(mut self, name: impl Into<String>) -> Self {
		self.matched_route_name = Some(name.into());
		self
	}

	pub fn matched_route_name(&self) -> Option<&str> {
		self.matched_route_name.as_deref()
	}

	pub fn set_matched_route_name(&mut self, name: impl Into<String>) {
		self.matched_route_name = Some(name.into());
	}

	/// Sets a parameter, replacing any previous value.
	pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.params.insert(name.into(), value.into());
	}

	pub fn param(&self, name: &str) -> Option<&Value> {
		self.params.get(name)
	}

	/// Returns the parameter or `default` when it was not matched.
	pub fn param_or<'a>(&'a self, name: &str, default: &'a Value) -> &'a Value {
		self.params.get(name).unwrap_or(default)
	}

	pub fn params(&self) -> &Map<String, Value> {
		&self.params
	}
}

impl FromIterator<(String, Value)> for RouteMatch {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_set_param_overwrites() {
		let mut route_match = RouteMatch::default();
		route_match.set_param("page", "1");
		route_match.set_param("page", 2);

		assert_eq!(route_match.param("page"), Some(&json!(2)));
		assert_eq!(route_match.params().len(), 1);
	}

	#[test]
	fn test_param_or_default() {
		let route_match: RouteMatch = [("format".to_string(), json!("json"))].into_iter().collect();
		let fallback = json!("html");

		assert_eq!(route_match.param_or("format", &fallback), &json!("json"));
		assert_eq!(route_match.param_or("locale", &fallback), &json!("html"));
	}

	#[test]
	fn test_matched_route_name() {
		let mut route_match = RouteMatch::default();
		assert_eq!(route_match.matched_route_name(), None);

		route_match.set_matched_route_name("home");
		assert_eq!(route_match.matched_route_name(), Some("home"));
	}
}
