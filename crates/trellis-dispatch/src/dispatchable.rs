use async_trait::async_trait;
use trellis_core::exception::Result;
use trellis_http::Response;

use crate::event::DispatchEvent;

/// Something an event-driven host can dispatch a [`DispatchEvent`] to.
///
/// Hosts attach listeners to the identifier returned by
/// [`event_identifier`](Self::event_identifier) and call
/// [`dispatch`](Self::dispatch) once per event.
#[async_trait]
pub trait Dispatchable: Send + Sync {
	/// Identifier under which listeners for this dispatchable are registered.
	fn event_identifier(&self) -> &'static str;

	/// Handles the event, records the result on it and returns that result.
	///
	/// # Errors
	///
	/// Returns an error when the event cannot be dispatched; the event's
	/// result is left untouched in that case.
	async fn dispatch(&self, event: &mut DispatchEvent) -> Result<Response>;
}
