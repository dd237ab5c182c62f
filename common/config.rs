use serde::{Deserialize, Serialize};

/// The selectors and data attributes the server-rendered markup uses to opt elements into client behavior.
pub const FLASH_MESSAGE_SELECTOR: &str = ".flash-message";
pub const VALIDATED_FORM_SELECTOR: &str = "form[data-validate]";
pub const VOTE_BUTTON_SELECTOR: &str = ".vote-btn";

/// Dataset keys, in the camel case form `HtmlElement::dataset` expects. `electionId` reads `data-election-id`.
pub const ELECTION_ID_KEY: &str = "electionId";
pub const CANDIDATE_ID_KEY: &str = "candidateId";
pub const CANDIDATE_NAME_KEY: &str = "candidateName";
pub const CLIENT_CONFIG_KEY: &str = "clientConfig";

/// Endpoints and timings. A page may override any subset of these with a JSON object in the `data-client-config` attribute on `<body>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	pub submit_vote_path: String,
	pub dashboard_path: String,
	/// How long a flash message stays fully visible.
	pub flash_message_lifetime_ms: u32,
	/// How long a flash message fades before it is removed.
	pub flash_message_fade_ms: u32,
	pub notification_lifetime_ms: u32,
	pub notification_exit_ms: u32,
	/// How long the success toast is visible before navigating to the dashboard.
	pub redirect_delay_ms: u32,
}

impl Default for ClientConfig {
	fn default() -> ClientConfig {
		ClientConfig {
			submit_vote_path: "/voter/submit-vote".to_owned(),
			dashboard_path: "/voter/dashboard".to_owned(),
			flash_message_lifetime_ms: 5000,
			flash_message_fade_ms: 300,
			notification_lifetime_ms: 5000,
			notification_exit_ms: 300,
			redirect_delay_ms: 2000,
		}
	}
}

impl ClientConfig {
	pub fn from_json(json: &str) -> Result<ClientConfig, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// The time after boot at which a flash message is gone from the document.
	pub fn flash_message_removal_ms(&self) -> u32 {
		self.flash_message_lifetime_ms + self.flash_message_fade_ms
	}
}

#[test]
fn test_default_config() {
	let config = ClientConfig::default();
	assert_eq!(config.submit_vote_path, "/voter/submit-vote");
	assert_eq!(config.dashboard_path, "/voter/dashboard");
	assert_eq!(config.redirect_delay_ms, 2000);
	assert_eq!(config.notification_lifetime_ms, 5000);
	assert_eq!(config.notification_exit_ms, 300);
}

#[test]
fn test_flash_message_timing() {
	let config = ClientConfig::default();
	// The fade starts at 5000ms and the element is removed at 5300ms.
	assert_eq!(config.flash_message_lifetime_ms, 5000);
	assert_eq!(config.flash_message_removal_ms(), 5300);
}

#[test]
fn test_partial_override() {
	let config =
		ClientConfig::from_json(r#"{ "dashboard_path": "/home", "redirect_delay_ms": 0 }"#)
			.unwrap();
	assert_eq!(config.dashboard_path, "/home");
	assert_eq!(config.redirect_delay_ms, 0);
	assert_eq!(config.submit_vote_path, "/voter/submit-vote");
	assert_eq!(config.flash_message_lifetime_ms, 5000);
}

#[test]
fn test_invalid_override() {
	assert!(ClientConfig::from_json("not json").is_err());
	assert!(ClientConfig::from_json(r#"{ "redirect_delay_ms": "soon" }"#).is_err());
}
