use num_traits::ToPrimitive;
use wasm_bindgen::{prelude::*, JsCast};

/// Run `callback` once after `delay_ms`. The timer cannot be cancelled.
pub fn set_timeout(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<(), JsValue> {
	let window = crate::window()?;
	let callback = Closure::once_into_js(callback);
	window.set_timeout_with_callback_and_timeout_and_arguments_0(
		callback.unchecked_ref(),
		delay_ms.to_i32().unwrap_or(i32::MAX),
	)?;
	Ok(())
}
