use std::sync::Arc;

use chrono::{Duration, Utc};

use repset_app::application::queries::StatsQueries;
use repset_domain::shared::{CategoryId, ExerciseId, UserId};
use repset_domain::workout::{Category, LogEntry, LogRepository};
use repset_infrastructure::logging;
use repset_infrastructure::persistence::InMemoryLogRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = logging::init_logger(logging::default_log_dir()) {
        eprintln!("Failed to initialize file logging: {e}");
        eprintln!("Falling back to console logging only");

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .with_line_number(true)
            .try_init();
    }

    tracing::info!("Repset starting");

    let store = Arc::new(InMemoryLogRepository::new());
    let user = UserId::new();
    seed_demo_logs(store.as_ref(), &user).await?;

    let queries = StatsQueries::new(store);
    let response = queries.enhanced_stats(&user, Some(7), None).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Two weeks of sample activity: push-ups most days with a gap every third
/// day, plus a daily plank habit for the last week.
async fn seed_demo_logs(store: &InMemoryLogRepository, user: &UserId) -> anyhow::Result<()> {
    let now = Utc::now();
    let pushups = ExerciseId::new();
    let plank = ExerciseId::new();
    let arms = CategoryId::new();
    let core = CategoryId::new();

    for days_ago in 0..14 {
        let date = now - Duration::days(days_ago);

        if days_ago % 3 != 2 {
            let entry = LogEntry::new(
                user.clone(),
                pushups.clone(),
                arms.clone(),
                "Push-ups".to_string(),
                Category::Arms,
                date,
                Some(20),
                Some(2),
            )?;
            store.save(&entry).await?;
        }

        if days_ago < 7 {
            let entry = LogEntry::new(
                user.clone(),
                plank.clone(),
                core.clone(),
                "Plank".to_string(),
                Category::Core,
                date,
                None,
                Some(3),
            )?;
            store.save(&entry).await?;
        }
    }

    Ok(())
}
