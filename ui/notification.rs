use crate::set_timeout;
use std::{cell::Cell, rc::Rc};
use votesecure_common::{
	ClientConfig, Notification, ToastLifecycle, ToastStep, NOTIFICATION_CLOSE_CLASS,
	TOAST_EXIT_ANIMATION,
};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::console;

/// Show a toast in the top right corner. It is removed when its close button is clicked, or slides out on its own once `notification_lifetime_ms` has passed, whichever happens first.
pub fn show_notification(notification: &Notification, config: &ClientConfig) -> Result<(), JsValue> {
	let document = crate::document()?;
	let body = document
		.body()
		.ok_or_else(|| JsValue::from_str("document has no body"))?;
	let toast = document
		.create_element("div")?
		.dyn_into::<web_sys::HtmlElement>()?;
	toast.set_class_name(&notification.kind.class_name());
	toast.style().set_css_text(&notification.style());
	let message = document.create_element("span")?;
	message.set_text_content(Some(&notification.message));
	toast.append_child(&message)?;
	let close_button = document.create_element("button")?;
	close_button.set_class_name(NOTIFICATION_CLOSE_CLASS);
	close_button.set_text_content(Some("\u{00d7}"));
	toast.append_child(&close_button)?;
	body.append_child(&toast)?;

	let lifecycle = Rc::new(Cell::new(ToastLifecycle::default()));
	let toast_for_closure = toast.clone();
	let lifecycle_for_closure = lifecycle.clone();
	let callback_fn = Closure::wrap(Box::new(move || {
		if advance(&lifecycle_for_closure, ToastLifecycle::close) == ToastStep::Remove {
			toast_for_closure.remove();
		}
	}) as Box<dyn FnMut()>);
	close_button.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())?;
	callback_fn.forget();

	let exit_ms = config.notification_exit_ms;
	set_timeout(config.notification_lifetime_ms, move || {
		if let Err(error) = expire_toast(toast, lifecycle, exit_ms) {
			console::error_1(&error);
		}
	})
}

fn expire_toast(
	toast: web_sys::HtmlElement,
	lifecycle: Rc<Cell<ToastLifecycle>>,
	exit_ms: u32,
) -> Result<(), JsValue> {
	let attached = toast.parent_node().is_some();
	if advance(&lifecycle, |lifecycle| lifecycle.expire(attached)) != ToastStep::PlayExit {
		return Ok(());
	}
	toast.style().set_property("animation", TOAST_EXIT_ANIMATION)?;
	set_timeout(exit_ms, move || {
		if advance(&lifecycle, ToastLifecycle::finish_exit) == ToastStep::Remove {
			toast.remove();
		}
	})
}

fn advance(
	lifecycle: &Cell<ToastLifecycle>,
	event: impl FnOnce(&mut ToastLifecycle) -> ToastStep,
) -> ToastStep {
	let mut state = lifecycle.get();
	let step = event(&mut state);
	lifecycle.set(state);
	step
}
