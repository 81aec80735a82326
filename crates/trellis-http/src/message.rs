//! Object-safe view over the request kinds a dispatch event can carry.

use std::any::Any;

/// A request handed to the framework by a host (HTTP server, console runner, ...).
///
/// Dispatch events store requests as `Arc<dyn RequestMessage>`; consumers
/// that need a specific representation downcast through [`as_any`](Self::as_any)
/// and report [`type_name`](Self::type_name) when the downcast fails.
pub trait RequestMessage: Any + Send + Sync {
	/// Returns `self` as [`Any`] for downcasting to the concrete request type.
	fn as_any(&self) -> &dyn Any;

	/// Fully qualified name of the concrete request type.
	fn type_name(&self) -> &'static str;
}

impl dyn RequestMessage {
	/// Downcasts to a concrete request type.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::{ConsoleRequest, Request, RequestMessage};
	/// use std::sync::Arc;
	///
	/// let message: Arc<dyn RequestMessage> = Arc::new(ConsoleRequest::new(vec!["migrate".to_string()]));
	/// assert!(message.downcast_ref::<ConsoleRequest>().is_some());
	/// assert!(message.downcast_ref::<Request>().is_none());
	/// ```
	pub fn downcast_ref<T: RequestMessage>(&self) -> Option<&T> {
		self.as_any().downcast_ref::<T>()
	}

	/// Returns `true` if the concrete type is `T`.
	pub fn is<T: RequestMessage>(&self) -> bool {
		self.as_any().is::<T>()
	}
}
