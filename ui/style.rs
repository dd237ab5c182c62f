use votesecure_common::{STYLESHEET, STYLE_ELEMENT_ID};
use wasm_bindgen::prelude::*;

/// Append the client stylesheet to `<head>` unless a previous boot already did.
pub fn inject_styles() -> Result<(), JsValue> {
	let document = crate::document()?;
	if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
		return Ok(());
	}
	let head = document
		.head()
		.ok_or_else(|| JsValue::from_str("document has no head"))?;
	let style = document.create_element("style")?;
	style.set_id(STYLE_ELEMENT_ID);
	style.set_text_content(Some(STYLESHEET));
	head.append_child(&style)?;
	Ok(())
}
