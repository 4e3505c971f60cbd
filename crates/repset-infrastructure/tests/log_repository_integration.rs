use chrono::{Duration, NaiveDate, TimeZone, Utc};

use repset_domain::shared::calendar::day_key;
use repset_domain::shared::{CategoryId, ExerciseId, UserId};
use repset_domain::workout::{Category, LogEntry, LogRepository};
use repset_infrastructure::persistence::InMemoryLogRepository;

fn seed_entry(
    user_id: &UserId,
    name: &str,
    category: Category,
    date: NaiveDate,
    reps: u32,
    count: u32,
) -> LogEntry {
    let ts = Utc
        .from_utc_datetime(&date.and_hms_opt(18, 30, 0).unwrap());
    LogEntry::new(
        user_id.clone(),
        ExerciseId::new(),
        CategoryId::new(),
        name.to_string(),
        category,
        ts,
        Some(reps),
        Some(count),
    )
    .unwrap()
}

#[tokio::test]
async fn test_store_supports_the_three_engine_queries() {
    let repo = InMemoryLogRepository::new();
    let user = UserId::new();
    let other_user = UserId::new();
    let base = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    // Three weeks of mixed-category history for `user`.
    for offset in 0..21 {
        let day = base + Duration::days(offset);
        let (name, category) = if offset % 2 == 0 {
            ("Push-ups", Category::Arms)
        } else {
            ("Plank", Category::Core)
        };
        repo.save(&seed_entry(&user, name, category, day, 10, 1))
            .await
            .unwrap();
    }
    repo.save(&seed_entry(&other_user, "Squats", Category::Thighs, base, 50, 0))
        .await
        .unwrap();

    // Period query: last 7 days of the seeded window, one category.
    let period_start = base + Duration::days(14);
    let period_end = base + Duration::days(20);
    let period_arms = repo
        .list_in_range(&user, period_start, period_end, Some(Category::Arms))
        .await
        .unwrap();
    assert_eq!(period_arms.len(), 4); // even offsets 14, 16, 18, 20
    assert!(period_arms
        .iter()
        .all(|e| e.category() == Category::Arms && e.user_id() == &user));

    // All-time query with the same filter sees the full history.
    let all_arms = repo
        .list_all(&user, Some(Category::Arms))
        .await
        .unwrap();
    assert_eq!(all_arms.len(), 11); // even offsets 0..=20

    // Unfiltered history (the streak input) covers every logged day.
    let everything = repo.list_all(&user, None).await.unwrap();
    assert_eq!(everything.len(), 21);
    let first_day = day_key(everything.first().unwrap().date());
    let last_day = day_key(everything.last().unwrap().date());
    assert_eq!(first_day, base);
    assert_eq!(last_day, base + Duration::days(20));
}
