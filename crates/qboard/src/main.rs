//! qboard - Terminal viewer for a task-queue scheduler

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qboard_core::client::DEFAULT_ENDPOINT;
use qboard_core::QueueClient;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "qboard",
    version,
    about = "Terminal viewer for a task-queue scheduler",
    long_about = "Displays the scheduler's task queue in the terminal.\n\
                  \n\
                  Fetches the queue listing once per launch and renders one row per\n\
                  task (id, source file, next run time, trigger). Tasks without a\n\
                  next run time are shown as 'not scheduled'.\n\
                  \n\
                  Examples:\n\
                    qboard                           # Run TUI (default)\n\
                    qboard show                      # Print queue table and exit\n\
                    qboard show --json               # Raw JSON envelope\n\
                    qboard task send_mail_daily      # One task's details\n\
                  \n\
                  Environment Variables:\n\
                    QBOARD_ENDPOINT                  # Override scheduler endpoint"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Scheduler endpoint (scheme://host:port)
    #[arg(long, env = "QBOARD_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the TUI (default)
    Tui,
    /// Print the queue as a table and exit
    Show {
        /// Output the raw JSON envelope
        #[arg(long)]
        json: bool,
    },
    /// Show one task's details and exit
    Task {
        /// Task identifier
        task_id: String,
        /// Output the raw JSON envelope
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = QueueClient::new(cli.endpoint, Duration::from_secs(cli.timeout_secs))?;

    match cli.mode.unwrap_or(Mode::Tui) {
        Mode::Tui => qboard_tui::run(client).await,
        Mode::Show { json } => run_show(client, json).await,
        Mode::Task { task_id, json } => run_task(client, &task_id, json).await,
    }
}

async fn run_show(client: QueueClient, json: bool) -> Result<()> {
    let envelope = client.fetch_queue().await?;
    println!("{}", cli::format_queue(&envelope, json)?);
    Ok(())
}

async fn run_task(client: QueueClient, task_id: &str, json: bool) -> Result<()> {
    let envelope = client.fetch_task(task_id).await?;
    println!("{}", cli::format_task(&envelope, json)?);
    Ok(())
}
