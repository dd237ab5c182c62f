use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
	Success,
	Error,
	Info,
}

impl Default for NotificationKind {
	fn default() -> NotificationKind {
		NotificationKind::Info
	}
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown notification kind \"{0}\"")]
pub struct ParseNotificationKindError(pub String);

impl NotificationKind {
	pub fn as_str(self) -> &'static str {
		match self {
			NotificationKind::Success => "success",
			NotificationKind::Error => "error",
			NotificationKind::Info => "info",
		}
	}

	pub fn class_name(self) -> String {
		format!("notification notification-{}", self.as_str())
	}

	pub fn background_color(self) -> &'static str {
		match self {
			NotificationKind::Success => "var(--success)",
			NotificationKind::Error => "var(--danger)",
			NotificationKind::Info => "var(--info)",
		}
	}
}

impl fmt::Display for NotificationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for NotificationKind {
	type Err = ParseNotificationKindError;
	fn from_str(value: &str) -> Result<NotificationKind, ParseNotificationKindError> {
		match value {
			"success" => Ok(NotificationKind::Success),
			"error" => Ok(NotificationKind::Error),
			"info" => Ok(NotificationKind::Info),
			_ => Err(ParseNotificationKindError(value.to_owned())),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
	pub message: String,
	pub kind: NotificationKind,
}

impl Notification {
	pub fn new(message: impl Into<String>, kind: NotificationKind) -> Notification {
		Notification {
			message: message.into(),
			kind,
		}
	}

	/// The inline style for the toast element, fixed to the top right corner and sliding in from the right.
	pub fn style(&self) -> String {
		format!(
			"position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; background: {}; color: white; border-radius: 8px; box-shadow: var(--shadow); z-index: 1000; animation: {}; display: flex; align-items: center; gap: 1rem; max-width: 400px;",
			self.kind.background_color(),
			TOAST_ENTER_ANIMATION,
		)
	}
}

pub const TOAST_ENTER_ANIMATION: &str = "slideInRight 0.3s ease";
pub const TOAST_EXIT_ANIMATION: &str = "slideOutRight 0.3s ease";

/// Where a single toast is in its life. Each toast owns one of these, so toasts never affect each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLifecycle {
	Shown,
	Leaving,
	Removed,
}

/// What the toast element should do in response to a lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastStep {
	Nothing,
	PlayExit,
	Remove,
}

impl Default for ToastLifecycle {
	fn default() -> ToastLifecycle {
		ToastLifecycle::Shown
	}
}

impl ToastLifecycle {
	/// The close button was clicked.
	pub fn close(&mut self) -> ToastStep {
		match self {
			ToastLifecycle::Shown | ToastLifecycle::Leaving => {
				*self = ToastLifecycle::Removed;
				ToastStep::Remove
			}
			ToastLifecycle::Removed => ToastStep::Nothing,
		}
	}

	/// The lifetime timer fired. `attached` is whether the element is still in the document.
	pub fn expire(&mut self, attached: bool) -> ToastStep {
		if !attached {
			*self = ToastLifecycle::Removed;
			return ToastStep::Nothing;
		}
		match self {
			ToastLifecycle::Shown => {
				*self = ToastLifecycle::Leaving;
				ToastStep::PlayExit
			}
			ToastLifecycle::Leaving | ToastLifecycle::Removed => ToastStep::Nothing,
		}
	}

	/// The exit animation finished.
	pub fn finish_exit(&mut self) -> ToastStep {
		match self {
			ToastLifecycle::Leaving => {
				*self = ToastLifecycle::Removed;
				ToastStep::Remove
			}
			ToastLifecycle::Shown | ToastLifecycle::Removed => ToastStep::Nothing,
		}
	}
}

#[test]
fn test_notification_kind() {
	assert_eq!(NotificationKind::default(), NotificationKind::Info);
	assert_eq!("success".parse::<NotificationKind>(), Ok(NotificationKind::Success));
	assert_eq!("error".parse::<NotificationKind>(), Ok(NotificationKind::Error));
	assert_eq!("info".parse::<NotificationKind>(), Ok(NotificationKind::Info));
	assert_eq!(
		"warning".parse::<NotificationKind>(),
		Err(ParseNotificationKindError("warning".to_owned()))
	);
	assert_eq!(
		NotificationKind::Error.class_name(),
		"notification notification-error"
	);
	assert_eq!(NotificationKind::Success.to_string(), "success");
}

#[test]
fn test_notification_style() {
	let success = Notification::new("Vote recorded", NotificationKind::Success).style();
	assert!(success.contains("background: var(--success);"));
	assert!(success.contains("animation: slideInRight 0.3s ease;"));
	let error = Notification::new("Already voted", NotificationKind::Error).style();
	assert!(error.contains("background: var(--danger);"));
	let info = Notification::new("Hello", NotificationKind::Info).style();
	assert!(info.contains("background: var(--info);"));
}

#[test]
fn test_toast_expires() {
	let mut lifecycle = ToastLifecycle::default();
	assert_eq!(lifecycle.expire(true), ToastStep::PlayExit);
	assert_eq!(lifecycle, ToastLifecycle::Leaving);
	assert_eq!(lifecycle.finish_exit(), ToastStep::Remove);
	assert_eq!(lifecycle, ToastLifecycle::Removed);
}

#[test]
fn test_toast_closed_before_expiry() {
	let mut lifecycle = ToastLifecycle::default();
	assert_eq!(lifecycle.close(), ToastStep::Remove);
	// The lifetime timer still fires later and must do nothing.
	assert_eq!(lifecycle.expire(false), ToastStep::Nothing);
	assert_eq!(lifecycle.finish_exit(), ToastStep::Nothing);
	assert_eq!(lifecycle.close(), ToastStep::Nothing);
}

#[test]
fn test_toast_closed_while_leaving() {
	let mut lifecycle = ToastLifecycle::default();
	assert_eq!(lifecycle.expire(true), ToastStep::PlayExit);
	assert_eq!(lifecycle.close(), ToastStep::Remove);
	assert_eq!(lifecycle.finish_exit(), ToastStep::Nothing);
}

#[test]
fn test_toast_detached_elsewhere() {
	let mut lifecycle = ToastLifecycle::default();
	assert_eq!(lifecycle.expire(false), ToastStep::Nothing);
	assert_eq!(lifecycle, ToastLifecycle::Removed);
}
