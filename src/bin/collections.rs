/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Walks through the collections API.
//!
//! Gets the Yadle file ids of all of the files in a directory and adds them to a
//! collection. Then removes a few files, adds one back, renames the collection
//! and finally deletes it.
//!
//! ```text
//! yadle-collections --apiserver=https://example1.yadle.com --user=your_username \
//!     --password=your_password --appid=your_app_id --org=yadle1 \
//!     --device-id=a_device_id --directory=/full/path/to/a/directory/ \
//!     --name=my_test_collection2 --new-name=MyTestCollection2
//! ```

use anyhow::{Result, bail};
use clap::Parser;
use log::{error, info};
use yadle::cli::{self, ConnectionArgs};
use yadle::v2::has_error;

/// Build a collection from a directory, modify it and delete it
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    conn: ConnectionArgs,

    /// Organization the device catalog belongs to
    #[arg(long)]
    org: String,

    #[arg(long)]
    device_id: String,

    /// Directory whose files are added. A trailing slash is added when missing
    #[arg(long, value_parser = with_trailing_slash)]
    directory: String,

    #[arg(long, default_value = "my_test_collection2")]
    name: String,

    #[arg(long, default_value = "MyTestCollection2")]
    new_name: String,
}

fn with_trailing_slash(dir: &str) -> Result<String, String> {
    if dir.ends_with('/') {
        Ok(dir.to_string())
    } else {
        Ok(format!("{}/", dir))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    cli::init();
    let args = Cli::parse();
    let client = args.conn.login().await?;

    // Files within the first level of the directory
    let Some(files) = client
        .files_in_directory(&args.org, &args.device_id, &args.directory)
        .await?
    else {
        bail!("could not list {}", args.directory);
    };
    info!("Found {} files in {}", files.len(), args.directory);

    let files_to_add = client
        .matching_file_instances(&files, &args.directory)
        .await?;
    println!("files_to_add: ");
    cli::print_json(&files_to_add)?;

    let created = client.create_collection(&args.name, &files_to_add).await?;
    cli::print_json(&created)?;
    if has_error(&created) {
        error!("error creating collection, exiting");
        return Ok(());
    }

    // Take three of the files added above and remove them from the collection
    let ids: Vec<&str> = files_to_add.file_ids().take(3).collect();
    if ids.len() < 3 {
        bail!("need at least three files in {}, found {}", args.directory, ids.len());
    }
    let to_remove = files_to_add.subset(&ids);
    cli::print_json(&client.remove_collection_members(&args.name, &to_remove).await?)?;

    // Add one of those files back
    let to_re_add = files_to_add.subset(&ids[2..]);
    cli::print_json(&client.add_collection_members(&args.name, &to_re_add).await?)?;

    cli::print_json(&client.collection(&args.name).await?)?;

    cli::print_json(&client.rename_collection(&args.name, &args.new_name).await?)?;

    cli::print_json(&client.delete_collection(&args.new_name).await?)?;
    Ok(())
}
