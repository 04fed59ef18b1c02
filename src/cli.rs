/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Pieces shared by the command line programs.

use crate::v2::{Client, Page, YadleError};
use clap::Args;
use serde::Serialize;

/// Server and account used to log in
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Url of your organization's Yadle API server
    #[arg(long, env = "YADLE_APISERVER")]
    pub apiserver: String,

    /// Yadle user account making the API calls
    #[arg(long, env = "YADLE_USER")]
    pub user: String,

    /// Password for the Yadle user account
    #[arg(long, env = "YADLE_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// One of your organization's app ids
    #[arg(long, env = "YADLE_APPID")]
    pub appid: String,
}

impl ConnectionArgs {
    /// Logs in and returns the authenticated client
    pub async fn login(&self) -> Result<Client, YadleError> {
        log::info!("Logging in to {} as {}", self.apiserver, self.user);
        Client::login(&self.apiserver, &self.user, &self.password, &self.appid).await
    }
}

/// `--skip`/`--limit` passed through to the server as given
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Number of results to skip
    #[arg(long)]
    pub skip: Option<String>,

    /// Maximum number of results to return
    #[arg(long)]
    pub limit: Option<String>,
}

impl From<&PageArgs> for Page {
    fn from(args: &PageArgs) -> Self {
        Page {
            skip: args.skip.clone(),
            limit: args.limit.clone(),
        }
    }
}

/// Loads `.env` and sets up logging. `RUST_LOG` overrides the default `info` level.
pub fn init() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Pretty prints a response to stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<(), YadleError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `--quiet` is on only for the literal value `true`
pub fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}
