use votesecure_common::{ClientConfig, Notification, NotificationKind, CLIENT_CONFIG_KEY};
use votesecure_ui as ui;
use wasm_bindgen::prelude::*;
use web_sys::console;

mod dashboard_charts;
mod vote;

pub use self::vote::submit_vote;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	console_error_panic_hook::set_once();
	let config = load_config()?;
	ui::inject_styles()?;
	ui::boot_flash_messages(&config)?;
	ui::boot_form_validation()?;
	vote::boot_vote_buttons(&config)?;
	dashboard_charts::boot_dashboard_charts();
	Ok(())
}

/// Show a toast from other scripts on the page. `kind` is one of `success`, `error` or `info`, and defaults to `info`.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) -> Result<(), JsValue> {
	let kind = match kind {
		Some(kind) => kind.parse::<NotificationKind>().unwrap_or_else(|error| {
			console::error_1(&JsValue::from_str(&format!("{}", error)));
			NotificationKind::default()
		}),
		None => NotificationKind::default(),
	};
	let config = load_config()?;
	ui::show_notification(&Notification::new(message, kind), &config)
}

/// Read the config overrides from `<body data-client-config="...">`. Invalid overrides are logged and the defaults are used.
fn load_config() -> Result<ClientConfig, JsValue> {
	let document = ui::document()?;
	let overrides = document
		.body()
		.and_then(|body| body.dataset().get(CLIENT_CONFIG_KEY));
	let overrides = match overrides {
		Some(overrides) => overrides,
		None => return Ok(ClientConfig::default()),
	};
	match ClientConfig::from_json(&overrides) {
		Ok(config) => Ok(config),
		Err(error) => {
			console::error_2(
				&JsValue::from_str("invalid client config:"),
				&JsValue::from_str(&error.to_string()),
			);
			Ok(ClientConfig::default())
		}
	}
}
