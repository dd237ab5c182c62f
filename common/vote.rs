use crate::{ClientConfig, Notification, NotificationKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUBMIT_VOTE_FAILED_MESSAGE: &str = "An error occurred while submitting your vote";

/// The election and candidate a voter picked, read from the vote button that was clicked.
#[derive(Clone, Debug, PartialEq)]
pub struct VoteIntent {
	pub election_id: String,
	pub candidate_id: String,
	pub candidate_name: String,
}

impl VoteIntent {
	/// Returns `None` if the button is missing any of its data attributes.
	pub fn from_attributes(
		election_id: Option<String>,
		candidate_id: Option<String>,
		candidate_name: Option<String>,
	) -> Option<VoteIntent> {
		Some(VoteIntent {
			election_id: election_id?,
			candidate_id: candidate_id?,
			candidate_name: candidate_name?,
		})
	}

	pub fn confirmation_message(&self) -> String {
		format!(
			"Are you sure you want to vote for {}? This action cannot be undone.",
			self.candidate_name
		)
	}

	pub fn request(&self) -> SubmitVoteRequest<'_> {
		SubmitVoteRequest {
			election_id: &self.election_id,
			candidate_id: &self.candidate_id,
		}
	}
}

#[derive(Debug, Serialize)]
pub struct SubmitVoteRequest<'a> {
	pub election_id: &'a str,
	pub candidate_id: &'a str,
}

impl<'a> SubmitVoteRequest<'a> {
	pub const CONTENT_TYPE: &'static str = "application/x-www-form-urlencoded";

	pub fn to_form_body(&self) -> Result<String, SubmitVoteError> {
		Ok(serde_urlencoded::to_string(self)?)
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SubmitVoteResponse {
	pub success: bool,
	pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmitVoteError {
	#[error("request failed: {0}")]
	Network(String),
	#[error("unexpected response status {0}")]
	Status(u16),
	#[error("failed to encode request body")]
	Encode(#[from] serde_urlencoded::ser::Error),
	#[error("failed to decode response body")]
	Decode(#[from] serde_json::Error),
}

impl SubmitVoteResponse {
	/// Interpret a completed response. Anything but a 2xx status with a `{ success, message }` JSON body is a failure.
	pub fn from_status_and_body(
		status: u16,
		body: &str,
	) -> Result<SubmitVoteResponse, SubmitVoteError> {
		if !(200..300).contains(&status) {
			return Err(SubmitVoteError::Status(status));
		}
		Ok(serde_json::from_str(body)?)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Redirect {
	pub path: String,
	pub delay_ms: u32,
}

/// What the page shows after a vote submission completes.
#[derive(Clone, Debug, PartialEq)]
pub struct VoteOutcome {
	pub notification: Notification,
	pub redirect: Option<Redirect>,
}

impl VoteOutcome {
	pub fn new(
		result: &Result<SubmitVoteResponse, SubmitVoteError>,
		config: &ClientConfig,
	) -> VoteOutcome {
		match result {
			Ok(SubmitVoteResponse {
				success: true,
				message,
			}) => VoteOutcome {
				notification: Notification::new(message.clone(), NotificationKind::Success),
				redirect: Some(Redirect {
					path: config.dashboard_path.clone(),
					delay_ms: config.redirect_delay_ms,
				}),
			},
			Ok(SubmitVoteResponse {
				success: false,
				message,
			}) => VoteOutcome {
				notification: Notification::new(message.clone(), NotificationKind::Error),
				redirect: None,
			},
			Err(_) => VoteOutcome {
				notification: Notification::new(SUBMIT_VOTE_FAILED_MESSAGE, NotificationKind::Error),
				redirect: None,
			},
		}
	}
}

#[cfg(test)]
fn intent() -> VoteIntent {
	VoteIntent {
		election_id: "7".to_owned(),
		candidate_id: "42".to_owned(),
		candidate_name: "Ada Lovelace".to_owned(),
	}
}

#[test]
fn test_vote_intent_from_attributes() {
	let vote_intent = VoteIntent::from_attributes(
		Some("7".to_owned()),
		Some("42".to_owned()),
		Some("Ada Lovelace".to_owned()),
	);
	assert_eq!(vote_intent, Some(intent()));
	let vote_intent =
		VoteIntent::from_attributes(Some("7".to_owned()), None, Some("Ada Lovelace".to_owned()));
	assert_eq!(vote_intent, None);
}

#[test]
fn test_confirmation_message() {
	assert_eq!(
		intent().confirmation_message(),
		"Are you sure you want to vote for Ada Lovelace? This action cannot be undone."
	);
}

#[test]
fn test_form_body() {
	assert_eq!(
		intent().request().to_form_body().unwrap(),
		"election_id=7&candidate_id=42"
	);
	let vote_intent = VoteIntent {
		election_id: "a b".to_owned(),
		candidate_id: "x&y=z".to_owned(),
		candidate_name: String::new(),
	};
	assert_eq!(
		vote_intent.request().to_form_body().unwrap(),
		"election_id=a+b&candidate_id=x%26y%3Dz"
	);
}

#[test]
fn test_parse_response() {
	let response =
		SubmitVoteResponse::from_status_and_body(200, r#"{"success":true,"message":"Vote recorded"}"#)
			.unwrap();
	assert_eq!(
		response,
		SubmitVoteResponse {
			success: true,
			message: "Vote recorded".to_owned(),
		}
	);
	assert!(matches!(
		SubmitVoteResponse::from_status_and_body(500, r#"{"success":false,"message":"x"}"#),
		Err(SubmitVoteError::Status(500))
	));
	assert!(matches!(
		SubmitVoteResponse::from_status_and_body(200, "<html></html>"),
		Err(SubmitVoteError::Decode(_))
	));
	assert!(matches!(
		SubmitVoteResponse::from_status_and_body(200, r#"{"success":true}"#),
		Err(SubmitVoteError::Decode(_))
	));
}

#[test]
fn test_success_outcome() {
	let config = ClientConfig::default();
	let result = Ok(SubmitVoteResponse {
		success: true,
		message: "Vote recorded".to_owned(),
	});
	let outcome = VoteOutcome::new(&result, &config);
	insta::assert_debug_snapshot!(outcome, @r###"
 VoteOutcome {
     notification: Notification {
         message: "Vote recorded",
         kind: Success,
     },
     redirect: Some(
         Redirect {
             path: "/voter/dashboard",
             delay_ms: 2000,
         },
     ),
 }
 "###);
}

#[test]
fn test_rejected_outcome() {
	let config = ClientConfig::default();
	let result = Ok(SubmitVoteResponse {
		success: false,
		message: "Already voted".to_owned(),
	});
	let outcome = VoteOutcome::new(&result, &config);
	assert_eq!(
		outcome.notification,
		Notification::new("Already voted", NotificationKind::Error)
	);
	assert_eq!(outcome.redirect, None);
}

#[test]
fn test_failed_outcome() {
	let config = ClientConfig::default();
	for result in vec![
		Err(SubmitVoteError::Network("TypeError: Failed to fetch".to_owned())),
		Err(SubmitVoteError::Status(502)),
		SubmitVoteResponse::from_status_and_body(200, "not json"),
	] {
		let outcome = VoteOutcome::new(&result, &config);
		assert_eq!(
			outcome.notification,
			Notification::new(SUBMIT_VOTE_FAILED_MESSAGE, NotificationKind::Error)
		);
		assert_eq!(outcome.redirect, None);
	}
}
