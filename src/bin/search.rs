/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Logs in, runs a search and prints the results.
//!
//! ```text
//! yadle-search --apiserver=https://exampleOrg1.yadle.com --user=exampleUser \
//!     --password=examplePassword --appid=exampleAppId \
//!     --quiet=true --limit=20 --skip=80 --terms='"star trek" #"3d model"'
//! ```

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use yadle::cli::{self, ConnectionArgs, PageArgs};
use yadle::v2::{Page, SearchQuery};

/// Search the files of your organization
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    conn: ConnectionArgs,

    #[command(flatten)]
    page: PageArgs,

    /// `true` returns only file ids instead of full file objects
    #[arg(long)]
    quiet: Option<String>,

    /// Space separated terms. Quote multi-word terms, prefix tags with `#`
    #[arg(long)]
    terms: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    cli::init();
    let args = Cli::parse();

    let query = SearchQuery {
        page: Page::from(&args.page),
        quiet: cli::is_true(args.quiet.as_deref()),
        terms: args.terms,
    };
    println!("{}", json!({ "terms": query.terms }));

    let client = args.conn.login().await?;

    println!("{}", client.search_url(&query)?);
    let res = client.search(&query).await?;
    cli::print_json(&res)?;
    Ok(())
}
