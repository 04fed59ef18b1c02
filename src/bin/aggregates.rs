/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Walks through the aggregate API: create an aggregate, view it, change its
//! primary file, remove and re-add a member, then delete it.
//!
//! ```text
//! yadle-aggregates --apiserver=https://example1.yadle.com --user=your_username \
//!     --password=your_password --appid=your_app_id \
//!     --primary=file_id1 --member=file_id2 --member=file_id3 --member=file_id4
//! ```

use anyhow::{Result, anyhow};
use clap::Parser;
use log::info;
use yadle::cli::{self, ConnectionArgs};
use yadle::v2::{aggregate_id, primary_after_edit};

/// Create, modify and delete an aggregate
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    conn: ConnectionArgs,

    /// File shown in search results for the aggregate
    #[arg(long)]
    primary: String,

    /// Other files of the aggregate
    #[arg(long = "member", required = true)]
    members: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    cli::init();
    let args = Cli::parse();
    let third = args
        .members
        .get(2)
        .cloned()
        .ok_or_else(|| anyhow!("at least three --member values are needed"))?;
    let client = args.conn.login().await?;

    let mut head = args.primary.clone();
    let members = &args.members;

    let created = client.create_aggregate(&head, members.as_slice()).await?;
    cli::print_json(&created)?;

    // The new aggregate id is used for every following call
    let agg_id = aggregate_id(&created)?.to_string();

    let aggregate = client.aggregate(&head, &agg_id).await?;
    cli::print_json(&aggregate)?;

    // Make the first member the primary file (the one displayed in search results)
    let edited = client.edit_aggregate_primary(&head, &agg_id, &members[0]).await?;
    cli::print_json(&edited)?;
    let new_head = primary_after_edit(&head, &members[0], &edited);
    if new_head != head {
        info!("Primary file is now {}", new_head);
        head = new_head;
    }

    // Remove the third member from the aggregate and add it back
    let to_remove = [third.as_str()];
    cli::print_json(&client.remove_aggregate_members(&head, &agg_id, &to_remove[..]).await?)?;
    cli::print_json(&client.add_aggregate_members(&head, &agg_id, &to_remove[..]).await?)?;

    cli::print_json(&client.delete_aggregate(&head, &agg_id).await?)?;
    Ok(())
}
