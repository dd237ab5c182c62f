use wasm_bindgen::{prelude::*, JsCast};

pub fn window() -> Result<web_sys::Window, JsValue> {
	web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))
}

pub fn document() -> Result<web_sys::Document, JsValue> {
	window()?
		.document()
		.ok_or_else(|| JsValue::from_str("document is not available"))
}

/// Collect the nodes in `node_list` that are a `T`, in document order.
pub fn elements<T>(node_list: &web_sys::NodeList) -> Vec<T>
where
	T: JsCast,
{
	(0..node_list.length())
		.filter_map(|index| node_list.item(index))
		.filter_map(|node| node.dyn_into::<T>().ok())
		.collect()
}
