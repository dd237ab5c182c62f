/// The id of the `<style>` element holding `STYLESHEET`. Its presence means the styles were already injected.
pub const STYLE_ELEMENT_ID: &str = "votesecure-styles";

/// Added to an input that failed validation.
pub const ERROR_CLASS: &str = "error";
/// The message element placed next to an input that failed validation.
pub const INPUT_ERROR_CLASS: &str = "input-error";
pub const NOTIFICATION_CLOSE_CLASS: &str = "notification-close";

pub const STYLESHEET: &str = r#"
@keyframes slideInRight {
	from {
		transform: translateX(100%);
		opacity: 0;
	}
	to {
		transform: translateX(0);
		opacity: 1;
	}
}

@keyframes slideOutRight {
	from {
		transform: translateX(0);
		opacity: 1;
	}
	to {
		transform: translateX(100%);
		opacity: 0;
	}
}

.input-error {
	color: var(--danger);
	font-size: 0.8rem;
	margin-top: 0.25rem;
}

.error {
	border-color: var(--danger) !important;
}
"#;

#[test]
fn test_stylesheet_animations() {
	use crate::{TOAST_ENTER_ANIMATION, TOAST_EXIT_ANIMATION};
	for animation in [TOAST_ENTER_ANIMATION, TOAST_EXIT_ANIMATION].iter() {
		let name = animation.split(' ').next().unwrap();
		assert!(STYLESHEET.contains(&format!("@keyframes {} {{", name)));
	}
}
