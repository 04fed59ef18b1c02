/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod aggregate;
pub mod api;
pub mod auth;
pub mod client;
pub mod collection;
pub mod errors;
pub mod file;
pub mod params;
pub mod search;
pub mod user;

pub use aggregate::*;
pub use api::*;
pub use auth::Bearer;
pub use client::*;
pub use collection::*;
pub use errors::*;
pub use file::*;
pub use params::*;
pub use search::*;
pub use user::*;
