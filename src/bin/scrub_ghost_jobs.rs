//! Removes ghost jobs: records seeded during testing, matched by their
//! exact description text. Prints what it deletes.

use workhub::jobs::repo;
use workhub::state::AppState;

const GHOST_DESCRIPTIONS: &[&str] = &["test", "test job", "Ghost job for smoke testing"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "workhub=info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let state = AppState::init().await?;

    let descriptions: Vec<String> = GHOST_DESCRIPTIONS.iter().map(|s| s.to_string()).collect();

    let ghosts = repo::list_by_descriptions(&state.db, &descriptions).await?;
    if ghosts.is_empty() {
        println!("no ghost jobs found");
        return Ok(());
    }

    for job in &ghosts {
        println!(
            "deleting {}  {}  {:?}  status={}",
            job.id,
            job.title,
            job.description,
            job.status.as_str()
        );
    }

    let deleted = repo::delete_by_descriptions(&state.db, &descriptions).await?;
    println!("deleted {deleted} ghost jobs");

    Ok(())
}
