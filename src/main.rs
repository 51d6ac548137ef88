mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use hireizon::apply::Application;
use hireizon::config::Config;
use hireizon::types::Job;
use hireizon::JobBoard;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hireizon=info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.database_url.is_some() {
        config.database_url = cli.database_url.clone();
    }
    let board = JobBoard::connect(&config, true).await?;

    match cli.command {
        Commands::Jobs { query } => {
            board.refresh_jobs().await?;
            let snapshot = board.snapshot(&query).await;
            if snapshot.jobs.is_empty() {
                println!("No jobs found.");
            }
            for job in &snapshot.jobs {
                let mark = if snapshot.saved_ids.contains(&job.id) { "*" } else { " " };
                print_job(mark, job);
            }
        }
        Commands::Saved { sort } => {
            let saved = match sort {
                Some(order) => board.sorted_saved_jobs(order).await,
                None => board.saved_jobs().await,
            };
            if saved.is_empty() {
                println!("No saved jobs found.");
            }
            for job in &saved {
                print_job("*", job);
            }
        }
        Commands::Save { id } => {
            let job = listed_job(&board, &id).await?;
            let (saved, outcome) = board.toggle_saved(&job).await;
            println!("{:?}: {} ({} saved)", outcome, job.title, saved.len());
        }
        Commands::Remove { id } => {
            let saved = board.remove_saved(&id).await;
            println!("Removed {id} ({} saved)", saved.len());
        }
        Commands::DarkMode { toggle } => {
            let on = if toggle { board.toggle_dark_mode().await } else { board.dark_mode().await };
            println!("dark mode: {}", if on { "on" } else { "off" });
        }
        Commands::Apply { id, name, email, contact, reason } => {
            let job = match board.saved_jobs().await.into_iter().find(|j| j.id == id) {
                Some(job) => job,
                None => listed_job(&board, &id).await?,
            };
            let app = Application { name, email, contact, reason, ..Application::for_job(&job) };
            match board.apply(&app) {
                Ok(sub) => println!("{}: {} ({} at {})", sub.title, sub.message, sub.position, sub.company),
                Err(e) => eprintln!("{}: {}", e.title(), e),
            }
        }
    }
    Ok(())
}

async fn listed_job(board: &JobBoard, id: &str) -> Result<Job> {
    board.refresh_jobs().await?;
    board.find_job(id).await.with_context(|| format!("no job with id {id} in the listing"))
}

fn print_job(mark: &str, job: &Job) {
    println!("{mark} {} | {} | {} | {} [{}]", job.title, job.company_name, job.job_location, job.compensation, job.id);
}
