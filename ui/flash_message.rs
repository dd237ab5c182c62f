use crate::set_timeout;
use votesecure_common::{ClientConfig, FLASH_MESSAGE_SELECTOR};
use wasm_bindgen::prelude::*;
use web_sys::console;

/// Fade out and remove every flash message rendered with the page once its lifetime is over.
pub fn boot_flash_messages(config: &ClientConfig) -> Result<(), JsValue> {
	let document = crate::document()?;
	let flash_messages = crate::elements::<web_sys::HtmlElement>(
		&document.query_selector_all(FLASH_MESSAGE_SELECTOR)?,
	);
	for flash_message in flash_messages {
		let fade_ms = config.flash_message_fade_ms;
		set_timeout(config.flash_message_lifetime_ms, move || {
			if let Err(error) = dismiss_flash_message(flash_message, fade_ms) {
				console::error_1(&error);
			}
		})?;
	}
	Ok(())
}

fn dismiss_flash_message(flash_message: web_sys::HtmlElement, fade_ms: u32) -> Result<(), JsValue> {
	flash_message.style().set_property("opacity", "0")?;
	// Removing a detached element is a no-op.
	set_timeout(fade_ms, move || flash_message.remove())
}
