use crate::{clear_input_error, show_input_error};
use votesecure_common::{validate_form, FieldAction, FieldInput, InputKind, VALIDATED_FORM_SELECTOR};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::console;

/// Check every form marked with `data-validate` on submit, and cancel the submission if any field is invalid.
pub fn boot_form_validation() -> Result<(), JsValue> {
	let document = crate::document()?;
	let forms = crate::elements::<web_sys::HtmlFormElement>(
		&document.query_selector_all(VALIDATED_FORM_SELECTOR)?,
	);
	for form in forms {
		let form_for_closure = form.clone();
		let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
			if let Err(error) = validate_on_submit(&form_for_closure, &event) {
				console::error_1(&error);
			}
		}));
		form.add_event_listener_with_callback("submit", callback_fn.as_ref().unchecked_ref())?;
		callback_fn.forget();
	}
	Ok(())
}

fn validate_on_submit(
	form: &web_sys::HtmlFormElement,
	event: &web_sys::Event,
) -> Result<(), JsValue> {
	let inputs = crate::elements::<web_sys::HtmlInputElement>(&form.query_selector_all("input")?);
	let fields = inputs
		.iter()
		.map(|input| FieldInput {
			value: input.value(),
			required: input.required(),
			kind: InputKind::from_type_attribute(&input.type_()),
		})
		.collect::<Vec<_>>();
	let report = validate_form(&fields);
	// The submission stays cancelled even if annotating a field fails below.
	if !report.valid {
		event.prevent_default();
	}
	for action in report.actions.iter() {
		match action {
			FieldAction::ShowError { index, message } => show_input_error(&inputs[*index], message)?,
			FieldAction::ClearError { index } => clear_input_error(&inputs[*index])?,
		}
	}
	Ok(())
}
