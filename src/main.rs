//! member-admin - administrative CLI for the membership database

#![allow(missing_docs)]

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use member_admin::utils::init_logging;
use member_admin::{AdminCore, Config, Database, PrivilegeLevel, WatchOutcome};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "member-admin", version, about = "Membership administration tool")]
struct Cli {
    /// Configuration file (YAML); environment variables override it
    #[arg(long, short, global = true, env = "MEMBER_ADMIN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending database migrations
    Migrate,
    /// Check database connectivity
    Health,
    /// Queue a membership card and wait for the printer
    PrintCard {
        #[arg(long)]
        actor: Uuid,
        #[arg(long)]
        member: Uuid,
    },
    /// Change a member's privilege level
    SetPrivilege {
        #[arg(long)]
        actor: Uuid,
        #[arg(long)]
        member: Uuid,
        /// Level name or rank (1-5)
        #[arg(long)]
        level: PrivilegeLevel,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let env = Config::from_env().context("Invalid environment configuration")?;
    let config = match path {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load {}", path.display()))?
            .merge(env),
        None => env,
    };
    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref()).await?;
    init_logging(config.logging())?;

    match cli.command {
        Command::Migrate => migrate(&config).await,
        Command::Health => health(&config).await,
        command => {
            let core = AdminCore::new(config).await?;
            run_with_core(&core, command).await
        }
    }
}

async fn migrate(config: &Config) -> anyhow::Result<()> {
    let db = Database::new(config.database()).await?;
    db.migrate().await?;
    db.close().await?;
    info!("Migrations applied");
    println!("Database is up to date");
    Ok(())
}

/// Read-only check; an unmigrated schema is reported, never repaired
async fn health(config: &Config) -> anyhow::Result<()> {
    let db = Database::new(config.database()).await?;
    db.health_check()
        .await
        .context("Health check failed (has `member-admin migrate` been run?)")?;
    let stats = db.stats().await?;
    db.close().await?;
    println!(
        "ok: {} members, {} pending print jobs",
        stats.total_members, stats.pending_print_jobs
    );
    Ok(())
}

async fn run_with_core(core: &AdminCore, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Migrate | Command::Health => {}
        Command::PrintCard { actor, member } => {
            let actor = core.actor(actor).await?;
            let ticket = core
                .print_membership_card(&actor, member)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            println!("Queued print job {}", ticket.queue_id);

            let cancel = CancellationToken::new();
            let on_interrupt = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_interrupt.cancel();
                }
            });

            let timeout = core.print_queue().timeout();
            let outcome = core.print_queue().watch(ticket, timeout, cancel).await;
            if outcome == WatchOutcome::Cancelled {
                bail!("Stopped waiting for print job {}", ticket.queue_id);
            }
            outcome
                .into_result(&ticket, timeout)
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            println!("Card printed");
        }
        Command::SetPrivilege {
            actor,
            member,
            level,
        } => {
            let actor = core.actor(actor).await?;
            let updated = core
                .members()
                .change_privilege(&actor, member, level)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            println!("{} is now {}", updated.full_name(), updated.privilege);
        }
    }

    Ok(())
}
