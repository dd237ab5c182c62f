use wasm_bindgen::prelude::*;
use web_sys::console;

// Placeholder until the dashboard has charts to draw.
pub fn boot_dashboard_charts() {
	console::log_1(&JsValue::from_str("Charts initialized"));
}
