use votesecure_common::{ERROR_CLASS, INPUT_ERROR_CLASS};
use wasm_bindgen::{prelude::*, JsCast};

/// Mark `input` as invalid and show `message` directly after it. Any error already shown for the input is replaced, so an input never has more than one.
pub fn show_input_error(input: &web_sys::HtmlInputElement, message: &str) -> Result<(), JsValue> {
	clear_input_error(input)?;
	input.class_list().add_1(ERROR_CLASS)?;
	if input.parent_node().is_none() {
		return Ok(());
	}
	let document = crate::document()?;
	let error = document
		.create_element("div")?
		.dyn_into::<web_sys::HtmlElement>()?;
	error.set_class_name(INPUT_ERROR_CLASS);
	let style = error.style();
	style.set_property("color", "var(--danger)")?;
	style.set_property("font-size", "0.8rem")?;
	style.set_property("margin-top", "0.25rem")?;
	error.set_text_content(Some(message));
	// The message is the input's next sibling. In a wrapper holding only the input, that is the end of the wrapper.
	input.after_with_node_1(&error)?;
	Ok(())
}

/// Remove the invalid marker and message from `input`. Messages belonging to other inputs in the same parent are left alone. Does nothing if it has none.
pub fn clear_input_error(input: &web_sys::HtmlInputElement) -> Result<(), JsValue> {
	input.class_list().remove_1(ERROR_CLASS)?;
	if let Some(error) = input_error(input) {
		error.remove();
	}
	Ok(())
}

fn input_error(input: &web_sys::HtmlInputElement) -> Option<web_sys::Element> {
	input
		.next_element_sibling()
		.filter(|sibling| sibling.class_list().contains(INPUT_ERROR_CLASS))
}
