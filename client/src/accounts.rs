// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use account_signup_shared::messages::accounts::{AccountCreationResponse, NewAccount};
use async_trait::async_trait;

/// Boundary to whatever creates accounts. The form only ever needs the one
/// call, and it reports one of three outcomes: created, name already taken,
/// or any other failure.
#[async_trait(?Send)]
pub trait AccountService {
	async fn create_account(&self, new_account: NewAccount) -> AccountCreationResponse;
}

/// Stand-in account backend until a real transport is wired up. Always
/// reports success; the failure outcomes become reachable once a server
/// integration replaces this.
pub struct StubAccountService;

#[async_trait(?Send)]
impl AccountService for StubAccountService {
	async fn create_account(&self, new_account: NewAccount) -> AccountCreationResponse {
		log::debug!("Handling account creation for {} with stub backend", new_account.username);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;

	#[test]
	fn stub_backend_reports_success() {
		let service = StubAccountService;
		let new_account = NewAccount {
			username: String::from("alice"),
			password: String::from("Valid1!pass"),
		};
		assert_eq!(block_on(service.create_account(new_account)), Ok(()));
	}
}
