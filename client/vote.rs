use votesecure_common::{
	ClientConfig, SubmitVoteError, SubmitVoteRequest, SubmitVoteResponse, VoteIntent, VoteOutcome,
	CANDIDATE_ID_KEY, CANDIDATE_NAME_KEY, ELECTION_ID_KEY, VOTE_BUTTON_SELECTOR,
};
use votesecure_ui as ui;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::console;

/// Ask for confirmation when a vote button is clicked, then submit the vote.
pub fn boot_vote_buttons(config: &ClientConfig) -> Result<(), JsValue> {
	let document = ui::document()?;
	let vote_buttons =
		ui::elements::<web_sys::HtmlElement>(&document.query_selector_all(VOTE_BUTTON_SELECTOR)?);
	for vote_button in vote_buttons {
		let vote_button_for_closure = vote_button.clone();
		let config = config.clone();
		let callback_fn = Closure::wrap(Box::new(move || {
			if let Err(error) = handle_vote_click(&vote_button_for_closure, &config) {
				console::error_1(&error);
			}
		}) as Box<dyn FnMut()>);
		vote_button.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())?;
		callback_fn.forget();
	}
	Ok(())
}

fn handle_vote_click(
	vote_button: &web_sys::HtmlElement,
	config: &ClientConfig,
) -> Result<(), JsValue> {
	let dataset = vote_button.dataset();
	let vote_intent = VoteIntent::from_attributes(
		dataset.get(ELECTION_ID_KEY),
		dataset.get(CANDIDATE_ID_KEY),
		dataset.get(CANDIDATE_NAME_KEY),
	);
	let vote_intent = match vote_intent {
		Some(vote_intent) => vote_intent,
		None => {
			console::error_1(&JsValue::from_str(
				"vote button is missing data-election-id, data-candidate-id or data-candidate-name",
			));
			return Ok(());
		}
	};
	let confirmed = ui::window()?.confirm_with_message(&vote_intent.confirmation_message())?;
	if !confirmed {
		return Ok(());
	}
	let config = config.clone();
	spawn_local(async move {
		submit_vote(&vote_intent, &config).await;
	});
	Ok(())
}

/// Send the vote, then show the result as a toast. A successful vote navigates to the dashboard after `redirect_delay_ms`. Failures are not retried.
pub async fn submit_vote(vote_intent: &VoteIntent, config: &ClientConfig) {
	let result = send_vote(vote_intent, config).await;
	if let Err(error) = &result {
		console::error_2(
			&JsValue::from_str("Error:"),
			&JsValue::from_str(&error.to_string()),
		);
	}
	let outcome = VoteOutcome::new(&result, config);
	if let Err(error) = present_outcome(outcome, config) {
		console::error_1(&error);
	}
}

async fn send_vote(
	vote_intent: &VoteIntent,
	config: &ClientConfig,
) -> Result<SubmitVoteResponse, SubmitVoteError> {
	let body = vote_intent.request().to_form_body()?;
	let (status, body) = post_form(&config.submit_vote_path, &body)
		.await
		.map_err(|error| SubmitVoteError::Network(format!("{:?}", error)))?;
	SubmitVoteResponse::from_status_and_body(status, &body)
}

async fn post_form(path: &str, body: &str) -> Result<(u16, String), JsValue> {
	let init = web_sys::RequestInit::new();
	init.set_method("POST");
	init.set_body(&JsValue::from_str(body));
	let request = web_sys::Request::new_with_str_and_init(path, &init)?;
	request
		.headers()
		.set("Content-Type", SubmitVoteRequest::CONTENT_TYPE)?;
	let response = JsFuture::from(ui::window()?.fetch_with_request(&request))
		.await?
		.dyn_into::<web_sys::Response>()?;
	let text = JsFuture::from(response.text()?).await?;
	Ok((response.status(), text.as_string().unwrap_or_default()))
}

fn present_outcome(outcome: VoteOutcome, config: &ClientConfig) -> Result<(), JsValue> {
	ui::show_notification(&outcome.notification, config)?;
	if let Some(redirect) = outcome.redirect {
		ui::set_timeout(redirect.delay_ms, move || {
			let result = ui::window().and_then(|window| window.location().set_href(&redirect.path));
			if let Err(error) = result {
				console::error_1(&error);
			}
		})?;
	}
	Ok(())
}
