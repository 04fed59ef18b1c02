/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Logs in, gets a list of users and prints one line per user.
//!
//! ```text
//! yadle-getusers --apiserver=https://yadle11.yadle.com --user=yadle \
//!     --password=xxxxxxx --appid=api_xxxxxxxxxxxxxxxxxxxx --limit=5 --skip=2
//! ```

use anyhow::Result;
use clap::Parser;
use yadle::cli::{self, ConnectionArgs, PageArgs};
use yadle::v2::Page;

/// List the users of your organization
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    conn: ConnectionArgs,

    #[command(flatten)]
    page: PageArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    cli::init();
    let args = Cli::parse();

    // log in and get the bearer used for the subsequent calls
    let client = args.conn.login().await?;

    let users = client.users(&Page::from(&args.page)).await?;
    for u in users {
        println!("{} {} {} {}", u.id, u.first_name, u.last_name, u.status);
    }
    Ok(())
}
