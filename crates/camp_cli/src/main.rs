//! `camp` entry point.
//!
//! Owns the process lifecycle: configuration, logging, opening the database
//! once, and handing it to the HTTP layer until shutdown.

mod config;

use anyhow::{anyhow, Context};
use camp_api::AppState;
use camp_core::db::open_db;
use clap::Parser;
use config::{Cli, Command, ServeArgs};
use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    camp_core::init_logging(cli.log_level(), cli.log_dir.as_deref())
        .map_err(|err| anyhow!(err))
        .context("failed to initialize logging")?;

    let mut conn = open_db(&cli.db_path)
        .with_context(|| format!("failed to open database `{}`", cli.db_path.display()))?;

    match cli.command {
        Command::Serve(args) => serve(args, AppState::new(conn)).await,
        Command::Seed => {
            let summary = camp_core::seed_sample_data(&mut conn).context("seeding failed")?;
            println!(
                "seeded {} campers, {} activities, {} signups",
                summary.campers, summary.activities, summary.signups
            );
            Ok(())
        }
    }
}

async fn serve(args: ServeArgs, state: AppState) -> anyhow::Result<()> {
    let addr = args.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    println!("camp API listening on http://{addr}");

    camp_api::serve(listener, state, shutdown_signal()).await?;
    info!("event=db_close module=cli status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=shutdown_signal module=cli status=error error={err}");
    }
}
