//! One-shot report of jobs by status.
//!
//! Usage: `jobs_report [STATUS ...]`
//!
//! With no arguments, reports the statuses a dispatcher watches day to
//! day: OPEN, ASSIGNED and IN_PROGRESS.

use workhub::jobs::{repo, JobStatus};
use workhub::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "workhub=info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let statuses: Vec<JobStatus> = if std::env::args().len() > 1 {
        std::env::args()
            .skip(1)
            .map(|arg| arg.parse())
            .collect::<Result<_, _>>()?
    } else {
        vec![JobStatus::Open, JobStatus::Assigned, JobStatus::InProgress]
    };

    let state = AppState::init().await?;

    for status in statuses {
        let jobs = repo::list_with_status(&state.db, status).await?;
        println!("{} ({} jobs)", status.as_str(), jobs.len());
        for job in jobs {
            let price = job
                .price_cents
                .map(|cents| format!("{:.2}", cents as f64 / 100.0))
                .unwrap_or_else(|| "-".into());
            println!(
                "  {}  {}  price={}  client={}",
                job.id, job.title, price, job.client_id
            );
        }
    }

    Ok(())
}
