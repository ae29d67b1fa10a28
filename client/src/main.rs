// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::rc::Rc;
use sycamore::prelude::*;
use web_sys::window;

mod accounts;
mod components;
mod pages;

use accounts::{AccountService, StubAccountService};
use pages::signup::SignupView;

fn set_page_title(new_title: &str) {
	if let Some(window) = window() {
		if let Some(document) = window.document() {
			document.set_title(new_title);
		}
	}
}

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	set_page_title("Login");

	sycamore::render(|ctx| {
		let account_service: Rc<dyn AccountService> = Rc::new(StubAccountService);
		provide_context(ctx, account_service);
		SignupView(ctx)
	});
}
