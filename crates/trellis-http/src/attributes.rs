//! Named request attributes
//!
//! Attributes are the string-keyed counterpart of typed extensions: routing
//! and middleware attach arbitrary values under a name, and later stages read
//! them back by name and type.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type AttributeValue = Arc<dyn Any + Send + Sync>;

/// String-keyed, heterogeneous attribute storage.
///
/// Cloning is cheap: values are shared, not copied.
#[derive(Clone, Default)]
pub struct Attributes {
	map: HashMap<String, AttributeValue>,
}

impl Attributes {
	/// Create an empty attribute set
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::Attributes;
	///
	/// let attributes = Attributes::new();
	/// assert!(attributes.is_empty());
	/// ```
	pub fn new() -> Self {
		Self {
			map: HashMap::new(),
		}
	}

	/// Insert a value under `name`, replacing any previous value of any type.
	///
	/// Returns `true` if a previous value was replaced.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::Attributes;
	///
	/// let mut attributes = Attributes::new();
	/// assert!(!attributes.insert("id", 42u32));
	/// assert!(attributes.insert("id", "forty-two".to_string()));
	///
	/// assert_eq!(attributes.get::<u32>("id"), None);
	/// assert_eq!(attributes.get::<String>("id").map(String::as_str), Some("forty-two"));
	/// ```
	pub fn insert<T: Send + Sync + 'static>(&mut self, name: impl Into<String>, value: T) -> bool {
		self.insert_shared(name, Arc::new(value))
	}

	/// Insert an already shared value without re-wrapping it.
	///
	/// Reading it back through [`get_shared`](Self::get_shared) yields the same allocation.
	pub fn insert_shared<T: Send + Sync + 'static>(
		&mut self,
		name: impl Into<String>,
		value: Arc<T>,
	) -> bool {
		let value: AttributeValue = value;
		self.map.insert(name.into(), value).is_some()
	}

	/// Borrow the value stored under `name` if it has type `T`
	pub fn get<T: 'static>(&self, name: &str) -> Option<&T> {
		self.map.get(name).and_then(|value| (**value).downcast_ref::<T>())
	}

	/// Get a shared handle to the value stored under `name` if it has type `T`
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::Attributes;
	/// use std::sync::Arc;
	///
	/// let shared = Arc::new(vec![1, 2, 3]);
	/// let mut attributes = Attributes::new();
	/// attributes.insert_shared("numbers", shared.clone());
	///
	/// let read_back = attributes.get_shared::<Vec<i32>>("numbers").unwrap();
	/// assert!(Arc::ptr_eq(&shared, &read_back));
	/// ```
	pub fn get_shared<T: Send + Sync + 'static>(&self, name: &str) -> Option<Arc<T>> {
		self.map
			.get(name)
			.cloned()
			.and_then(|value| value.downcast::<T>().ok())
	}

	/// Check if an attribute with the given name exists, whatever its type
	pub fn contains(&self, name: &str) -> bool {
		self.map.contains_key(name)
	}

	/// Remove an attribute, returning `true` if it existed
	pub fn remove(&mut self, name: &str) -> bool {
		self.map.remove(name).is_some()
	}

	pub fn len(&self) -> usize {
		self.map.len()
	}

	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Attribute names in unspecified order
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.map.keys().map(String::as_str)
	}

	pub fn clear(&mut self) {
		self.map.clear();
	}
}

impl fmt::Debug for Attributes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut names: Vec<&str> = self.names().collect();
		names.sort_unstable();
		f.debug_struct("Attributes").field("names", &names).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::{Value, json};

	#[derive(Clone, Debug, PartialEq)]
	struct TestData {
		value: String,
	}

	#[test]
	fn test_insert_and_get() {
		let mut attributes = Attributes::new();
		let data = TestData {
			value: "test".to_string(),
		};

		attributes.insert("data", data.clone());

		assert_eq!(attributes.get::<TestData>("data"), Some(&data));
	}

	#[test]
	fn test_get_wrong_type() {
		let mut attributes = Attributes::new();
		attributes.insert("id", json!("42"));

		assert_eq!(attributes.get::<String>("id"), None);
		assert_eq!(attributes.get::<Value>("id"), Some(&json!("42")));
	}

	#[test]
	fn test_get_nonexistent() {
		let attributes = Attributes::new();
		assert_eq!(attributes.get::<TestData>("missing"), None);
		assert!(attributes.get_shared::<TestData>("missing").is_none());
	}

	#[test]
	fn test_contains_and_remove() {
		let mut attributes = Attributes::new();
		attributes.insert("flag", true);

		assert!(attributes.contains("flag"));
		assert!(attributes.remove("flag"));
		assert!(!attributes.contains("flag"));
		assert!(!attributes.remove("flag"));
	}

	#[test]
	fn test_clone_shares_values() {
		let mut attributes = Attributes::new();
		attributes.insert_shared("data", Arc::new(TestData {
			value: "shared".to_string(),
		}));

		let cloned = attributes.clone();
		let original = attributes.get_shared::<TestData>("data").unwrap();
		let copy = cloned.get_shared::<TestData>("data").unwrap();

		assert!(Arc::ptr_eq(&original, &copy));
	}

	#[test]
	fn test_names_and_len() {
		let mut attributes = Attributes::new();
		attributes.insert("a", 1u8);
		attributes.insert("b", 2u8);

		let mut names: Vec<&str> = attributes.names().collect();
		names.sort_unstable();

		assert_eq!(names, vec!["a", "b"]);
		assert_eq!(attributes.len(), 2);

		attributes.clear();
		assert!(attributes.is_empty());
	}

	#[test]
	fn test_debug_lists_names() {
		let mut attributes = Attributes::new();
		attributes.insert("b", 1u8);
		attributes.insert("a", 1u8);

		assert_eq!(format!("{:?}", attributes), r#"Attributes { names: ["a", "b"] }"#);
	}
}
