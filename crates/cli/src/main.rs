//! `taskify` -- read-only command line access to a Taskify backend.
//!
//! Prints one JSON object per line so output can be piped into `jq`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskify_client::pagination::DEFAULT_PAGE_SIZE;
use taskify_client::{ApiClient, ClientConfig};
use taskify_core::models::{ListCardsParams, ListMembersParams};
use taskify_core::types::DbId;

#[derive(Debug, Parser)]
#[command(name = "taskify", version, about = "Query a Taskify kanban backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the signed-in user.
    Me,
    /// List dashboards visible to the caller.
    Dashboards {
        /// Page length; all pages are fetched.
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
    },
    /// List the columns of a dashboard.
    Columns { dashboard: DbId },
    /// List the cards of a column.
    Cards {
        column: DbId,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
        /// Follow cursors until the column is exhausted.
        #[arg(long)]
        all: bool,
    },
    /// List the members of a dashboard.
    Members { dashboard: DbId },
    /// List invitations addressed to the caller.
    Invitations {
        /// Only invitations to dashboards whose title matches.
        #[arg(long)]
        title: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskify_client=info,taskify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // --- Configuration ---
    let config = ClientConfig::from_env().context("invalid configuration")?;
    tracing::info!(base_url = %config.base_url, "Loaded client configuration");

    let client = ApiClient::new(config).context("failed to build HTTP client")?;

    match cli.command {
        Command::Me => print_one(&client.users().me().await?)?,
        Command::Dashboards { size } => {
            let dashboards = client.dashboards().list_all(size).await?;
            tracing::info!(count = dashboards.len(), "Fetched dashboards");
            print_all(&dashboards)?;
        }
        Command::Columns { dashboard } => {
            print_all(&client.columns().list(dashboard).await?.data)?;
        }
        Command::Cards { column, size, all } => {
            if all {
                print_all(&client.cards().list_all(column, size).await?)?;
            } else {
                let page = client
                    .cards()
                    .list(&ListCardsParams {
                        size: Some(size),
                        ..ListCardsParams::for_column(column)
                    })
                    .await?;
                print_all(&page.cards)?;
                if let Some(cursor) = page.cursor_id {
                    tracing::info!(
                        cursor,
                        total = page.total_count,
                        "More cards available, pass --all"
                    );
                }
            }
        }
        Command::Members { dashboard } => {
            let list = client
                .members()
                .list(&ListMembersParams::for_dashboard(dashboard))
                .await?;
            print_all(&list.members)?;
        }
        Command::Invitations { title } => {
            let invitations = client
                .invitations()
                .list_all(title.as_deref(), DEFAULT_PAGE_SIZE)
                .await?;
            print_all(&invitations)?;
        }
    }

    Ok(())
}

fn print_one<T: Serialize>(item: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(item)?);
    Ok(())
}

fn print_all<T: Serialize>(items: &[T]) -> anyhow::Result<()> {
    items.iter().try_for_each(print_one)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cards_subcommand_parses_flags() {
        let cli = Cli::try_parse_from(["taskify", "cards", "5", "--size", "2", "--all"]).unwrap();
        match cli.command {
            Command::Cards { column, size, all } => {
                assert_eq!((column, size, all), (5, 2, true));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
