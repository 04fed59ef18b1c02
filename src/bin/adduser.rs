/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Logs in and invites a new user.
//!
//! ```text
//! yadle-adduser --apiserver=https://yadle11.yadle.com --user=yadle \
//!     --password=xxxxxxx --appid=api_xxxxxxxxxxxxxxxxxxxx \
//!     --email=someone@domain.com --firstname=Some --lastname=One
//! ```

use anyhow::Result;
use clap::Parser;
use yadle::cli::{self, ConnectionArgs};
use yadle::v2::UserInvite;

/// Invite a user into your organization
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    conn: ConnectionArgs,

    #[arg(long)]
    email: String,

    #[arg(long)]
    firstname: String,

    #[arg(long)]
    lastname: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    cli::init();
    let args = Cli::parse();

    let client = args.conn.login().await?;

    let resp = client
        .invite_user(&UserInvite {
            email: args.email,
            first_name: args.firstname,
            last_name: args.lastname,
        })
        .await?;
    println!("{}", resp.status);
    if !resp.body.is_empty() {
        println!("{}", resp.body);
    }
    Ok(())
}
