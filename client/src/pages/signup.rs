// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::accounts::AccountService;
use crate::components::form_status::{FormStatus, FormStatusDisplay};
use account_signup_shared::messages::accounts::NewAccount;
use account_signup_shared::validation::password_meets_complexity;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

const USERNAME_REQUIRED_ERROR: &str = "Please enter username";
const PASSWORD_COMPLEXITY_ERROR: &str =
	"Please valid password. One uppercase, one lowercase, one special character and no spaces";
const USERNAME_HINT: &str = "Enter your full name.";
const PASSWORD_HINT: &str = "One uppercase, one lowercase, one special character and no spaces";

// The submit button stays disabled for this long after each submission,
// regardless of how fast the account call itself finishes.
const SUBMIT_COOLDOWN_MILLIS: u32 = 500;

fn username_error(username: &str) -> Option<&'static str> {
	if username.is_empty() {
		Some(USERNAME_REQUIRED_ERROR)
	} else {
		None
	}
}

fn password_error(password: &str) -> Option<&'static str> {
	if password_meets_complexity(password) {
		None
	} else {
		Some(PASSWORD_COMPLEXITY_ERROR)
	}
}

#[component]
pub fn SignupView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating signup view");

	let username_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());

	// Field errors only show once the field has been interacted with, so each
	// field tracks whether it lost focus at least once.
	let username_touched_signal = create_signal(ctx, false);
	let password_touched_signal = create_signal(ctx, false);

	let submitting_signal = create_signal(ctx, false);
	let form_status_signal: &Signal<Option<&'static FormStatus>> = create_signal(ctx, None);

	let username_error_signal = create_memo(ctx, || username_error(&username_signal.get()));
	let password_error_signal = create_memo(ctx, || password_error(&password_signal.get()));

	let username_error_shown_signal =
		create_memo(ctx, || *username_touched_signal.get() && username_error_signal.get().is_some());
	let password_error_shown_signal =
		create_memo(ctx, || *password_touched_signal.get() && password_error_signal.get().is_some());

	let username_class_signal = create_memo(ctx, || if *username_error_shown_signal.get() { "error" } else { "" });
	let password_class_signal = create_memo(ctx, || if *password_error_shown_signal.get() { "error" } else { "" });

	// Each field shows its hint until it's been touched and is invalid; the
	// error message takes the hint's place.
	let username_help_signal = create_memo(ctx, || match *username_error_signal.get() {
		Some(error) if *username_touched_signal.get() => error,
		_ => USERNAME_HINT,
	});
	let password_help_signal = create_memo(ctx, || match *password_error_signal.get() {
		Some(error) if *password_touched_signal.get() => error,
		_ => PASSWORD_HINT,
	});

	let username_help_class_signal =
		create_memo(ctx, || if *username_error_shown_signal.get() { "input_error" } else { "input_help" });
	let password_help_class_signal =
		create_memo(ctx, || if *password_error_shown_signal.get() { "input_error" } else { "input_help" });

	let username_blur_handler = move |_event: WebEvent| {
		username_touched_signal.set(true);
	};
	let password_blur_handler = move |_event: WebEvent| {
		password_touched_signal.set(true);
	};

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		// Submitting counts as interacting with every field, so errors surface
		// even if a field never received focus.
		username_touched_signal.set(true);
		password_touched_signal.set(true);

		if username_error_signal.get().is_some() || password_error_signal.get().is_some() {
			return;
		}
		if *submitting_signal.get() {
			return;
		}
		submitting_signal.set(true);

		let new_account = NewAccount {
			username: (*username_signal.get()).clone(),
			password: (*password_signal.get()).clone(),
		};

		spawn_local_scoped(ctx, async move {
			let account_service: &Rc<dyn AccountService> = use_context(ctx);
			let response = account_service.create_account(new_account).await;

			if response.is_ok() {
				username_signal.set(String::new());
				password_signal.set(String::new());
				username_touched_signal.set(false);
				password_touched_signal.set(false);
			}
			form_status_signal.set(Some(FormStatus::for_response(response)));
		});

		// The cool-down runs from submission start, not from completion of the
		// account call.
		spawn_local_scoped(ctx, async move {
			TimeoutFuture::new(SUBMIT_COOLDOWN_MILLIS).await;
			submitting_signal.set(false);
		});
	};

	view! {
		ctx,
		h1(id="signup_title") { "Login" }
		form(id="signup_form", on:submit=form_submission_handler) {
			div(class="input_with_message") {
				label(for="signup_username") {
					"Username: "
				}
				input(
					id="signup_username",
					type="text",
					class=*username_class_signal.get(),
					bind:value=username_signal,
					on:blur=username_blur_handler
				)
				span(class=*username_help_class_signal.get()) { (*username_help_signal.get()) }
			}
			div(class="input_with_message") {
				label(for="signup_password") {
					"Password: "
				}
				input(
					id="signup_password",
					type="password",
					class=*password_class_signal.get(),
					bind:value=password_signal,
					on:blur=password_blur_handler
				)
				span(class=*password_help_class_signal.get()) { (*password_help_signal.get()) }
			}
			button(id="signup_submit", type="submit", disabled=*submitting_signal.get()) {
				"LOGIN"
			}
			FormStatusDisplay(status=form_status_signal)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_username_reports_required_error() {
		assert_eq!(username_error(""), Some("Please enter username"));
	}

	#[test]
	fn nonempty_username_is_valid() {
		assert_eq!(username_error("alice"), None);
	}

	#[test]
	fn weak_passwords_report_complexity_error() {
		for password in ["", "abc", "alllowercase1!", "NoDigits!!"] {
			assert_eq!(
				password_error(password),
				Some("Please valid password. One uppercase, one lowercase, one special character and no spaces"),
				"password {:?} should have been rejected",
				password
			);
		}
	}

	#[test]
	fn complex_password_is_valid() {
		assert_eq!(password_error("Valid1!pass"), None);
	}
}
