/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Yadle
//!
//! This library was created for working with the Yadle APIv2 interface.
//!
//! For further details on the Rest API refer to the [Yadle API Docs](https://api.yadle.com/)
//!
//! ## Features
//!
//! - Login (username/password exchanged for a bearer credential)
//! - Users
//!     - List users (with `skip`/`limit`)
//!     - Invite a new user
//! - Full text search
//! - File information and directory listings
//! - Aggregates
//!     - Create, view, list, add/remove members, change primary file, delete
//! - Collections
//!     - Create, view, list, add/remove members, rename, delete
//! - Lower level interface for handling the raw communication
//!
//! *If you want to use this library for more than is currently implemented, the
//! [`v2::ApiClient`] is a way to make request/responses in a more direct way*
//!
//! ## Usage
//!
//! **You will need a Yadle account and one of your organization's app ids**
//!
//! ```no_run
//! use yadle::v2::{Client, Page};
//!
//! async fn list_users(server: &str, user: &str, password: &str, app_id: &str) -> anyhow::Result<()> {
//!     // Log in and get the bearer used to authenticate all subsequent calls
//!     let client = Client::login(server, user, password, app_id).await?;
//!
//!     // Get the first 20 users
//!     let page = Page::default().limit("20");
//!     for user in client.users(&page).await? {
//!         println!("{} {} {} {}", user.id, user.first_name, user.last_name, user.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The command line programs (`yadle-search`, `yadle-getusers`, ...) are built with the
//! default `cli` feature.
pub mod v2;

#[cfg(feature = "cli")]
pub mod cli;
