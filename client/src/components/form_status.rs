// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use account_signup_shared::messages::accounts::{AccountCreationError, AccountCreationResponse};
use sycamore::prelude::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
	Success,
	Error,
}

/// Message shown under the form once a submission attempt has finished.
#[derive(Debug, Eq, PartialEq)]
pub struct FormStatus {
	pub message: &'static str,
	pub kind: StatusKind,
}

pub static SUCCESS_STATUS: FormStatus = FormStatus {
	message: "Signed up successfully.",
	kind: StatusKind::Success,
};
pub static DUPLICATE_STATUS: FormStatus = FormStatus {
	message: "Email-id already exist. Please use different email-id.",
	kind: StatusKind::Error,
};
pub static ERROR_STATUS: FormStatus = FormStatus {
	message: "Something went wrong. Please try again.",
	kind: StatusKind::Error,
};

impl FormStatus {
	/// Maps each account creation outcome to its fixed status message.
	pub fn for_response(response: AccountCreationResponse) -> &'static FormStatus {
		match response {
			Ok(()) => &SUCCESS_STATUS,
			Err(AccountCreationError::AlreadyExists) => &DUPLICATE_STATUS,
			Err(AccountCreationError::ServerError) => &ERROR_STATUS,
		}
	}
}

#[derive(Prop)]
pub struct FormStatusProps<'a> {
	status: &'a ReadSignal<Option<&'static FormStatus>>,
}

/// Renders nothing until a submission attempt has finished; after that,
/// renders the message for the one active status.
#[component]
pub fn FormStatusDisplay<'a, G: Html>(ctx: Scope<'a>, props: FormStatusProps<'a>) -> View<G> {
	view! {
		ctx,
		(match *props.status.get() {
			Some(status) => {
				let message_class = match status.kind {
					StatusKind::Success => "success_message",
					StatusKind::Error => "error_message",
				};
				view! { ctx, p(class=message_class) { (status.message) } }
			}
			None => view! { ctx, },
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::accounts::AccountService;
	use account_signup_shared::messages::accounts::NewAccount;
	use async_trait::async_trait;
	use futures::executor::block_on;
	use std::rc::Rc;

	struct FakeAccountService(AccountCreationResponse);

	#[async_trait(?Send)]
	impl AccountService for FakeAccountService {
		async fn create_account(&self, _new_account: NewAccount) -> AccountCreationResponse {
			self.0
		}
	}

	fn fake_submission(response: AccountCreationResponse) -> &'static FormStatus {
		let service: Rc<dyn AccountService> = Rc::new(FakeAccountService(response));
		let new_account = NewAccount {
			username: String::from("alice"),
			password: String::from("Valid1!pass"),
		};
		FormStatus::for_response(block_on(service.create_account(new_account)))
	}

	#[test]
	fn success_maps_to_success_message() {
		let status = fake_submission(Ok(()));
		assert_eq!(status.message, "Signed up successfully.");
		assert_eq!(status.kind, StatusKind::Success);
	}

	#[test]
	fn conflict_maps_to_duplicate_message() {
		let status = fake_submission(Err(AccountCreationError::AlreadyExists));
		assert_eq!(status.message, "Email-id already exist. Please use different email-id.");
		assert_eq!(status.kind, StatusKind::Error);
	}

	#[test]
	fn other_failures_map_to_generic_message() {
		let status = fake_submission(Err(AccountCreationError::ServerError));
		assert_eq!(status.message, "Something went wrong. Please try again.");
		assert_eq!(status.kind, StatusKind::Error);
	}

	#[test]
	fn every_outcome_maps_to_exactly_one_status() {
		let outcomes = [
			Ok(()),
			Err(AccountCreationError::AlreadyExists),
			Err(AccountCreationError::ServerError),
		];
		let mapped: Vec<&'static FormStatus> = outcomes.iter().map(|outcome| FormStatus::for_response(*outcome)).collect();
		assert!(std::ptr::eq(mapped[0], &SUCCESS_STATUS));
		assert!(std::ptr::eq(mapped[1], &DUPLICATE_STATUS));
		assert!(std::ptr::eq(mapped[2], &ERROR_STATUS));
	}
}
