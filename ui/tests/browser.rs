#![cfg(target_arch = "wasm32")]

use votesecure_common::{ClientConfig, Notification, NotificationKind};
use votesecure_ui as ui;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> web_sys::Element {
	let document = ui::document().unwrap();
	let container = document.create_element("div").unwrap();
	container.set_inner_html(html);
	document.body().unwrap().append_child(&container).unwrap();
	container
}

fn input(container: &web_sys::Element, selector: &str) -> web_sys::HtmlInputElement {
	container
		.query_selector(selector)
		.unwrap()
		.unwrap()
		.dyn_into::<web_sys::HtmlInputElement>()
		.unwrap()
}

fn count(container: &web_sys::Element, selector: &str) -> u32 {
	container.query_selector_all(selector).unwrap().length()
}

async fn sleep(ms: i32) {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		ui::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn test_show_input_error_twice() {
	let container = mount(r#"<div><input id="email" type="email"></div>"#);
	let email = input(&container, "#email");
	ui::show_input_error(&email, "This field is required").unwrap();
	ui::show_input_error(&email, "Please enter a valid email address").unwrap();
	assert_eq!(count(&container, ".input-error"), 1);
	let error = email.next_element_sibling().unwrap();
	assert_eq!(
		error.text_content().unwrap(),
		"Please enter a valid email address"
	);
	assert!(email.class_list().contains("error"));
	container.remove();
}

#[wasm_bindgen_test]
fn test_clear_input_without_error() {
	let container = mount(r#"<div><input id="name" required><span>hint</span></div>"#);
	let name = input(&container, "#name");
	let before = container.inner_html();
	ui::clear_input_error(&name).unwrap();
	assert_eq!(container.inner_html(), before);
	assert_eq!(count(&container, "span"), 1);
	container.remove();
}

#[wasm_bindgen_test]
fn test_clear_keeps_sibling_input_errors() {
	let container = mount(r#"<form><input id="a" required><input id="b" required></form>"#);
	let a = input(&container, "#a");
	let b = input(&container, "#b");
	ui::show_input_error(&a, "This field is required").unwrap();
	ui::clear_input_error(&b).unwrap();
	assert_eq!(count(&container, ".input-error"), 1);
	assert!(a.next_element_sibling().unwrap().class_list().contains("input-error"));
	assert!(a.class_list().contains("error"));
	ui::clear_input_error(&a).unwrap();
	assert_eq!(count(&container, ".input-error"), 0);
	container.remove();
}

#[wasm_bindgen_test]
fn test_invalid_form_submission_is_cancelled() {
	let container = mount(
		r#"<form data-validate><input id="a" required><input id="b" required value="filled"><input id="email" type="email" value="bad-email"></form>"#,
	);
	ui::boot_form_validation().unwrap();
	let form = container.query_selector("form").unwrap().unwrap();
	let init = web_sys::EventInit::new();
	init.set_cancelable(true);
	let event = web_sys::Event::new_with_event_init_dict("submit", &init).unwrap();
	let not_cancelled = form.dispatch_event(&event).unwrap();
	assert!(!not_cancelled);
	assert_eq!(count(&container, ".input-error"), 2);
	let a = input(&container, "#a");
	assert_eq!(
		a.next_element_sibling().unwrap().text_content().unwrap(),
		"This field is required"
	);
	let email = input(&container, "#email");
	assert_eq!(
		email.next_element_sibling().unwrap().text_content().unwrap(),
		"Please enter a valid email address"
	);
	assert!(!input(&container, "#b").class_list().contains("error"));
	container.remove();
}

#[wasm_bindgen_test]
async fn test_toast_closed_before_expiry() {
	let config = ClientConfig {
		notification_lifetime_ms: 50,
		notification_exit_ms: 50,
		..Default::default()
	};
	let notification = Notification::new("Vote recorded", NotificationKind::Success);
	ui::show_notification(&notification, &config).unwrap();
	let document = ui::document().unwrap();
	let toasts = document.query_selector_all(".notification-success").unwrap();
	let toast = toasts
		.item(toasts.length() - 1)
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap();
	toast
		.query_selector(".notification-close")
		.unwrap()
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap()
		.click();
	assert!(toast.parent_node().is_none());
	// The lifetime timer and the exit timer both fire after the toast is gone.
	sleep(200).await;
	assert!(toast.parent_node().is_none());
}

#[wasm_bindgen_test]
async fn test_toast_expires() {
	let config = ClientConfig {
		notification_lifetime_ms: 50,
		notification_exit_ms: 100,
		..Default::default()
	};
	let notification = Notification::new("Already voted", NotificationKind::Error);
	ui::show_notification(&notification, &config).unwrap();
	let document = ui::document().unwrap();
	let toasts = document.query_selector_all(".notification-error").unwrap();
	let toast = toasts
		.item(toasts.length() - 1)
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap();
	assert_eq!(toast.text_content().unwrap(), "Already voted\u{00d7}");
	sleep(100).await;
	assert!(toast.parent_node().is_some());
	let animation = toast.style().get_property_value("animation").unwrap();
	assert!(animation.contains("slideOutRight"));
	sleep(150).await;
	assert!(toast.parent_node().is_none());
}

#[wasm_bindgen_test]
async fn test_flash_messages_are_removed_after_fading() {
	let container = mount(r#"<div class="flash-message">Welcome back</div>"#);
	let flash_message = container
		.query_selector(".flash-message")
		.unwrap()
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap();
	let config = ClientConfig {
		flash_message_lifetime_ms: 100,
		flash_message_fade_ms: 100,
		..Default::default()
	};
	ui::boot_flash_messages(&config).unwrap();
	sleep(50).await;
	assert!(flash_message.parent_node().is_some());
	assert_eq!(flash_message.style().get_property_value("opacity").unwrap(), "");
	sleep(100).await;
	assert!(flash_message.parent_node().is_some());
	assert_eq!(flash_message.style().get_property_value("opacity").unwrap(), "0");
	sleep(150).await;
	assert!(flash_message.parent_node().is_none());
	container.remove();
}

#[wasm_bindgen_test]
fn test_inject_styles_once() {
	ui::inject_styles().unwrap();
	ui::inject_styles().unwrap();
	let document = ui::document().unwrap();
	let styles = document.query_selector_all("#votesecure-styles").unwrap();
	assert_eq!(styles.length(), 1);
}
