use crate::geom::ClientRect;
use glam::{vec2, Vec2};
use wasm_bindgen::JsCast;

mod result_ext;
pub use result_ext::*;

#[derive(thiserror::Error, Debug, Clone)]
#[error("javascript error: {0}")]
pub struct JsError(String);

static_assertions::assert_impl_all!(JsError: std::error::Error, Send, Sync);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

/// Reads positions off pointer events.
pub trait PointerSource {
	/// Position in client (viewport) coordinates.
	fn client_position(&self) -> Vec2;

	/// The bounding box of the element the listener is attached to.
	fn target_rect(&self) -> Option<ClientRect>;
}

impl PointerSource for leptos::ev::PointerEvent {
	fn client_position(&self) -> Vec2 {
		vec2(self.client_x() as f32, self.client_y() as f32)
	}

	fn target_rect(&self) -> Option<ClientRect> {
		let element = self
			.current_target()
			.and_then(|target| target.dyn_into::<web_sys::Element>().ok())?;
		Some(ClientRect::from(&element.get_bounding_client_rect()))
	}
}
