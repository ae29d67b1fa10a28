// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data from the client when trying to create an account
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewAccount {
	pub username: String,
	pub password: String,
}

/// Failure outcomes the backend can report for an account creation attempt
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AccountCreationError {
	AlreadyExists,
	ServerError,
}

impl fmt::Display for AccountCreationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::AlreadyExists => write!(f, "An account with that name already exists"),
			Self::ServerError => write!(f, "The server failed to process the account"),
		}
	}
}

pub type AccountCreationResponse = Result<(), AccountCreationError>;
