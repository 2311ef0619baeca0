//
//  bitbucket-rest
//  demos/list_members.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lists the first members of a team.
//!
//! ```text
//! BITBUCKET_DEBUG=debug cargo run --example list_members -- atlassian 5
//! ```
//!
//! Credentials are read from the config file and the `BITBUCKET_*`
//! environment variables; public teams can be listed anonymously.

use anyhow::{Context, Result};
use bitbucket_rest::{BitbucketClient, ClientConfig};
use tracing::Dispatch;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn logging() -> Dispatch {
    let filter = EnvFilter::try_from_env("BITBUCKET_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter);
    Dispatch::new(subscriber)
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let team = args.next().context("usage: list_members <team> [max]")?;
    let max = match args.next() {
        Some(raw) => raw.parse().with_context(|| format!("invalid max: {}", raw))?,
        None => 10,
    };

    let mut config = ClientConfig::load()?;
    config.apply_env();

    let client = BitbucketClient::from_config(&config)?.with_dispatch(logging());
    let members = client.v2().teams(&team).list_members(max).await?;

    for member in members {
        println!(
            "{:<24} {}",
            member.username.as_deref().unwrap_or("-"),
            member.display_name.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
